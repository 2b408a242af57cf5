#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Feed rows became available; replaces the job list.
    JobsLoaded(Vec<crate::RawJobRow>),
    /// User edited the search box.
    SearchChanged(String),
    /// User clicked a guild option.
    GuildToggled(String),
    /// User clicked a main-skill option.
    MainSkillToggled(String),
    /// User clicked a level option.
    LevelToggled(String),
    /// User cleared one filter field.
    FieldCleared(crate::FilterField),
    /// User clicked "Clear All" next to the tags.
    ClearAllClicked,
    /// User clicked the remove button of a tag.
    TagRemoved(crate::FilterTag),
    /// Restore filters from a previous session.
    FiltersRestored(crate::FilterState),
    /// User opened a job's detail view.
    JobSelected { job_id: String },
    /// User closed the detail view.
    SelectionCleared,
    /// User switched the detail language.
    LanguageChanged(crate::Language),
    /// Detail lookup finished.
    DetailsLoaded {
        valid_job_root_id: u64,
        language: crate::Language,
        result: Result<crate::JobDetails, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
