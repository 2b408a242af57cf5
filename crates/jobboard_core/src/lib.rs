//! Job board core: data model, grouping, filter store and the pure state machine.
mod effect;
mod filter;
mod grouping;
mod model;
mod msg;
mod state;
mod store;
mod tags;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{
    available_guilds, available_levels, available_main_skills, filtered_jobs,
    is_selection_visible, matches, result_count,
};
pub use grouping::{group_jobs, strip_country_suffix};
pub use model::{
    country_name, Job, JobDetails, JobLevel, Language, RawJobRow, Skill, COUNTRY_NAMES,
    LEVEL_NAMES,
};
pub use msg::Msg;
pub use state::{AppState, DetailsState};
pub use store::{FilterField, FilterState, FilterStore, SubscriptionId};
pub use tags::{can_clear_all, clear_all, looks_like_job_code, remove_tag, to_tags, FilterTag, TagKind};
pub use update::update;
pub use view_model::{BoardViewModel, CountryVariantView, JobRowView, OptionView, SelectedJobView};
