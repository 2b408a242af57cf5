use crate::{DetailsState, FilterState, FilterTag, Language};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub filters: FilterState,
    pub jobs: Vec<JobRowView>,
    pub total_jobs: usize,
    pub result_count: usize,
    pub tags: Vec<FilterTag>,
    pub show_clear_all: bool,
    pub guild_options: Vec<OptionView>,
    pub main_skill_options: Vec<OptionView>,
    pub level_options: Vec<OptionView>,
    pub selected: Option<SelectedJobView>,
    /// False when the selected job is hidden by the current filters.
    pub selection_visible: bool,
    pub language: Language,
    pub details: DetailsState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: String,
    pub title: String,
    pub level_label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedJobView {
    pub id: String,
    pub title: String,
    pub guild: String,
    pub main_skill: String,
    pub level_label: String,
    pub valid_job_root_id: u64,
    pub variants: Vec<CountryVariantView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryVariantView {
    pub country: String,
    pub country_name: String,
    pub job_code: String,
}
