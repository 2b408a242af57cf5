use std::collections::HashSet;

use crate::{FilterState, Job, JobLevel};

/// True when `job` satisfies every non-empty criterion of `filters`.
///
/// Values inside one field are alternatives; fields are combined with AND.
pub fn matches(job: &Job, filters: &FilterState) -> bool {
    let search_ok = filters.search.is_empty()
        || job
            .job_title
            .to_lowercase()
            .contains(&filters.search.to_lowercase());
    let guild_ok = filters.guilds.is_empty() || filters.guilds.contains(&job.guild);
    let skill_ok = filters.main_skills.is_empty() || filters.main_skills.contains(&job.main_skill);
    let level_ok = filters.levels.is_empty() || filters.levels.contains(&job.level.label());

    search_ok && guild_ok && skill_ok && level_ok
}

/// Jobs passing [`matches`], in input order.
pub fn filtered_jobs<'a>(jobs: &'a [Job], filters: &FilterState) -> Vec<&'a Job> {
    jobs.iter().filter(|job| matches(job, filters)).collect()
}

pub fn result_count(jobs: &[Job], filters: &FilterState) -> usize {
    filtered_jobs(jobs, filters).len()
}

/// Main skills offered for selection.
///
/// With guilds selected only skills of those guilds are offered. This never
/// changes what [`matches`] accepts.
pub fn available_main_skills(jobs: &[Job], filters: &FilterState) -> Vec<String> {
    distinct(
        jobs.iter()
            .filter(|job| filters.guilds.is_empty() || filters.guilds.contains(&job.guild))
            .map(|job| job.main_skill.as_str()),
    )
}

pub fn available_guilds(jobs: &[Job]) -> Vec<String> {
    distinct(jobs.iter().map(|job| job.guild.as_str()))
}

/// Level labels present in `jobs`, ordered by rank.
pub fn available_levels(jobs: &[Job]) -> Vec<String> {
    let mut levels: Vec<&JobLevel> = Vec::new();
    for job in jobs {
        if !levels.contains(&&job.level) {
            levels.push(&job.level);
        }
    }
    // Stable sort keeps first-seen order among unknown codes.
    levels.sort_by_key(|level| level.rank());
    levels.into_iter().map(JobLevel::label).collect()
}

/// Whether the selected job (if any) is still among the filtered jobs.
pub fn is_selection_visible(selected_job_id: Option<&str>, filtered: &[&Job]) -> bool {
    match selected_job_id {
        None => true,
        Some(id) => filtered.iter().any(|job| job.id == id),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(ToOwned::to_owned)
        .collect()
}
