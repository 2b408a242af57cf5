use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Active filter criteria. List fields keep toggle order and never hold duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub guilds: Vec<String>,
    pub main_skills: Vec<String>,
    pub levels: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.guilds.is_empty()
            && self.main_skills.is_empty()
            && self.levels.is_empty()
    }

    /// Drops repeated list values, keeping each first occurrence in place.
    pub fn normalized(mut self) -> Self {
        dedupe(&mut self.guilds);
        dedupe(&mut self.main_skills);
        dedupe(&mut self.levels);
        self
    }

    pub fn with_search(&self, text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..self.clone()
        }
    }

    /// Toggles a guild. Removing the last selected guild also drops every
    /// main-skill selection; nothing else is pruned.
    pub fn with_guild_toggled(&self, guild: &str) -> Self {
        let guilds = toggled(&self.guilds, guild);
        let main_skills = if guilds.is_empty() && !self.guilds.is_empty() {
            Vec::new()
        } else {
            self.main_skills.clone()
        };
        Self {
            guilds,
            main_skills,
            ..self.clone()
        }
    }

    pub fn with_main_skill_toggled(&self, main_skill: &str) -> Self {
        Self {
            main_skills: toggled(&self.main_skills, main_skill),
            ..self.clone()
        }
    }

    pub fn with_level_toggled(&self, level: &str) -> Self {
        Self {
            levels: toggled(&self.levels, level),
            ..self.clone()
        }
    }

    pub fn with_field_cleared(&self, field: FilterField) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Search => next.search.clear(),
            FilterField::Guilds => next.guilds.clear(),
            FilterField::MainSkills => next.main_skills.clear(),
            FilterField::Levels => next.levels.clear(),
        }
        next
    }
}

fn dedupe(values: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(values.len());
    values.retain(|value| seen.insert(value.clone()));
}

fn toggled(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Names one [`FilterState`] field for [`FilterStore::clear_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Guilds,
    MainSkills,
    Levels,
}

impl FilterField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "search" => Some(FilterField::Search),
            "guild" | "guilds" => Some(FilterField::Guilds),
            "skill" | "skills" | "mainSkills" => Some(FilterField::MainSkills),
            "level" | "levels" => Some(FilterField::Levels),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Arc<FilterState>) + Send>;

/// Owner of the current [`FilterState`].
///
/// Every mutator builds a fresh snapshot, swaps it in and then notifies
/// observers in subscription order. Readers holding an older `Arc` keep a
/// complete, consistent state.
pub struct FilterStore {
    current: Arc<FilterState>,
    version: u64,
    next_subscription: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("current", &self.current)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FilterStore {
    pub fn new() -> Self {
        Self::with_state(FilterState::default())
    }

    pub fn with_state(state: FilterState) -> Self {
        Self {
            current: Arc::new(state.normalized()),
            version: 0,
            next_subscription: 0,
            observers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Arc<FilterState> {
        Arc::clone(&self.current)
    }

    pub fn get(&self) -> &FilterState {
        &self.current
    }

    /// Number of snapshots published since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Arc<FilterState>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let next = self.current.with_search(text);
        self.publish(next);
    }

    pub fn toggle_guild(&mut self, guild: &str) {
        let next = self.current.with_guild_toggled(guild);
        self.publish(next);
    }

    pub fn toggle_main_skill(&mut self, main_skill: &str) {
        let next = self.current.with_main_skill_toggled(main_skill);
        self.publish(next);
    }

    pub fn toggle_level(&mut self, level: &str) {
        let next = self.current.with_level_toggled(level);
        self.publish(next);
    }

    pub fn clear_field(&mut self, field: FilterField) {
        let next = self.current.with_field_cleared(field);
        self.publish(next);
    }

    pub fn clear_all(&mut self) {
        self.publish(FilterState::default());
    }

    /// Publishes a whole state at once, e.g. a restored session. Repeated
    /// list values are collapsed first.
    pub fn replace(&mut self, state: FilterState) {
        self.publish(state.normalized());
    }

    fn publish(&mut self, next: FilterState) {
        self.current = Arc::new(next);
        self.version += 1;
        let snapshot = Arc::clone(&self.current);
        for (_, observer) in &mut self.observers {
            observer(&snapshot);
        }
    }
}
