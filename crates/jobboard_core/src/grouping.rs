use std::collections::{BTreeMap, HashMap};

use crate::{Job, JobLevel, RawJobRow};

/// Folds per-country feed rows into one [`Job`] per `valid_job_root_id`.
///
/// Jobs come out in the order their root id was first seen. The first row of a
/// root decides title, skill, level and guild; every row contributes its
/// `country -> job_code` pair.
pub fn group_jobs(rows: &[RawJobRow]) -> Vec<Job> {
    let mut index_by_root: HashMap<u64, usize> = HashMap::new();
    let mut jobs: Vec<Job> = Vec::new();

    for row in rows {
        let idx = *index_by_root.entry(row.valid_job_root_id).or_insert_with(|| {
            jobs.push(job_from_first_row(row));
            jobs.len() - 1
        });
        jobs[idx]
            .job_codes
            .insert(row.country.clone(), row.job_code.clone());
    }

    jobs
}

fn job_from_first_row(row: &RawJobRow) -> Job {
    Job {
        id: strip_country_suffix(&row.job_code).to_string(),
        job_title: row.job_title.clone(),
        main_skill: row.main_skill.clone(),
        level: JobLevel::from_code(&row.level),
        guild: row.guild.clone(),
        valid_job_root_id: row.valid_job_root_id,
        job_codes: BTreeMap::new(),
    }
}

/// Drops the trailing country marker from a job code.
///
/// Assumes every per-country code ends in exactly one country character.
pub fn strip_country_suffix(job_code: &str) -> &str {
    match job_code.char_indices().next_back() {
        Some((last, _)) => &job_code[..last],
        None => job_code,
    }
}
