#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine for the detail page of a job.
    LoadDetails {
        valid_job_root_id: u64,
        language: crate::Language,
    },
}
