use crate::{FilterField, FilterState, FilterStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Search,
    Guild,
    MainSkill,
    Level,
}

/// A removable chip shown for one active criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTag {
    pub kind: TagKind,
    pub value: String,
    pub label: Option<String>,
}

impl FilterTag {
    fn plain(kind: TagKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            label: None,
        }
    }

    /// Text to show on the chip.
    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Tags for `filters`: search first, then guilds, main skills and levels in
/// selection order.
pub fn to_tags(filters: &FilterState) -> Vec<FilterTag> {
    let mut tags = Vec::with_capacity(
        1 + filters.guilds.len() + filters.main_skills.len() + filters.levels.len(),
    );
    if !filters.search.is_empty() {
        tags.push(search_tag(&filters.search));
    }
    tags.extend(filters.guilds.iter().map(|g| FilterTag::plain(TagKind::Guild, g)));
    tags.extend(
        filters
            .main_skills
            .iter()
            .map(|s| FilterTag::plain(TagKind::MainSkill, s)),
    );
    tags.extend(filters.levels.iter().map(|l| FilterTag::plain(TagKind::Level, l)));
    tags
}

fn search_tag(search: &str) -> FilterTag {
    let label = if looks_like_job_code(search) {
        format!("Code: {search}")
    } else {
        format!("Search: {search}")
    };
    FilterTag {
        kind: TagKind::Search,
        value: search.to_string(),
        label: Some(label),
    }
}

/// Uppercase alphanumeric token with at least one letter and one digit, e.g. `ENG1A`.
pub fn looks_like_job_code(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_digit())
}

/// Applies the single store mutation that removes `tag`.
pub fn remove_tag(tag: &FilterTag, store: &mut FilterStore) {
    match tag.kind {
        TagKind::Search => store.clear_field(FilterField::Search),
        TagKind::Guild => store.toggle_guild(&tag.value),
        TagKind::MainSkill => store.toggle_main_skill(&tag.value),
        TagKind::Level => store.toggle_level(&tag.value),
    }
}

/// "Clear all" is only offered next to two or more tags.
pub fn can_clear_all(tags: &[FilterTag]) -> bool {
    tags.len() > 1
}

pub fn clear_all(store: &mut FilterStore) {
    store.clear_all();
}

#[cfg(test)]
mod tests {
    use super::looks_like_job_code;

    #[test]
    fn job_code_heuristic() {
        assert!(looks_like_job_code("ENG1A"));
        assert!(looks_like_job_code("DEV42"));
        assert!(!looks_like_job_code("Engineer"));
        assert!(!looks_like_job_code("ENG"));
        assert!(!looks_like_job_code("123"));
        assert!(!looks_like_job_code("ENG 1"));
        assert!(!looks_like_job_code(""));
    }
}
