use std::sync::Arc;

use crate::filter::{
    available_guilds, available_levels, available_main_skills, filtered_jobs, is_selection_visible,
};
use crate::store::SubscriptionId;
use crate::tags::{can_clear_all, to_tags};
use crate::view_model::{
    BoardViewModel, CountryVariantView, JobRowView, OptionView, SelectedJobView,
};
use crate::{country_name, FilterState, FilterStore, Job, JobDetails, Language};

/// Progress of the detail lookup for the selected job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailsState {
    #[default]
    Idle,
    Loading {
        valid_job_root_id: u64,
        language: Language,
    },
    Loaded {
        valid_job_root_id: u64,
        details: JobDetails,
    },
    Failed {
        valid_job_root_id: u64,
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct AppState {
    jobs: Vec<Job>,
    filters: FilterStore,
    selected_job_id: Option<String>,
    language: Language,
    details: DetailsState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn filters(&self) -> Arc<FilterState> {
        self.filters.snapshot()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selected_job(&self) -> Option<&Job> {
        let id = self.selected_job_id.as_deref()?;
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Registers an observer on the filter store; see [`FilterStore::subscribe`].
    pub fn subscribe_filters<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Arc<FilterState>) + Send + 'static,
    {
        self.filters.subscribe(observer)
    }

    pub fn unsubscribe_filters(&mut self, id: SubscriptionId) -> bool {
        self.filters.unsubscribe(id)
    }

    /// Returns whether a re-render is pending and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Recomputes every derived value from the current snapshot.
    pub fn view(&self) -> BoardViewModel {
        let filters = self.filters.snapshot();
        let visible = filtered_jobs(&self.jobs, &filters);
        let selected_id = self.selected_job_id.as_deref();

        let jobs = visible
            .iter()
            .map(|job| JobRowView {
                id: job.id.clone(),
                title: job.job_title.clone(),
                level_label: job.level.label(),
                selected: selected_id == Some(job.id.as_str()),
            })
            .collect();

        let tags = to_tags(&filters);
        let show_clear_all = can_clear_all(&tags);

        BoardViewModel {
            total_jobs: self.jobs.len(),
            result_count: visible.len(),
            jobs,
            show_clear_all,
            tags,
            guild_options: options(available_guilds(&self.jobs), &filters.guilds),
            main_skill_options: options(
                available_main_skills(&self.jobs, &filters),
                &filters.main_skills,
            ),
            level_options: options(available_levels(&self.jobs), &filters.levels),
            selected: self.selected_job().map(selected_view),
            selection_visible: is_selection_visible(selected_id, &visible),
            language: self.language,
            details: self.details.clone(),
            filters: (*filters).clone(),
        }
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterStore {
        &mut self.filters
    }

    pub(crate) fn filters_version(&self) -> u64 {
        self.filters.version()
    }

    pub(crate) fn set_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        if self.selected_job().is_none() && self.selected_job_id.is_some() {
            self.clear_selection();
        }
        self.dirty = true;
    }

    pub(crate) fn details(&self) -> &DetailsState {
        &self.details
    }

    pub(crate) fn select(&mut self, job_id: String, valid_job_root_id: u64) {
        self.selected_job_id = Some(job_id);
        self.details = DetailsState::Loading {
            valid_job_root_id,
            language: self.language,
        };
        self.dirty = true;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_job_id = None;
        self.details = DetailsState::Idle;
        self.dirty = true;
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
        self.dirty = true;
    }

    pub(crate) fn set_details(&mut self, details: DetailsState) {
        self.details = details;
        self.dirty = true;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn options(values: Vec<String>, selected: &[String]) -> Vec<OptionView> {
    values
        .into_iter()
        .map(|value| OptionView {
            selected: selected.contains(&value),
            value,
        })
        .collect()
}

fn selected_view(job: &Job) -> SelectedJobView {
    SelectedJobView {
        id: job.id.clone(),
        title: job.job_title.clone(),
        guild: job.guild.clone(),
        main_skill: job.main_skill.clone(),
        level_label: job.level.label(),
        valid_job_root_id: job.valid_job_root_id,
        variants: job
            .job_codes
            .iter()
            .map(|(country, code)| CountryVariantView {
                country: country.clone(),
                country_name: country_name(country)
                    .map_or_else(|| country.clone(), str::to_string),
                job_code: code.clone(),
            })
            .collect(),
    }
}
