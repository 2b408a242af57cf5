use std::collections::BTreeMap;

use jobboard_core::{
    available_guilds, available_levels, available_main_skills, filtered_jobs,
    is_selection_visible, matches, result_count, FilterState, Job, JobLevel,
};
use pretty_assertions::assert_eq;

fn job(id: &str, title: &str, guild: &str, skill: &str, level: &str) -> Job {
    let mut job_codes = BTreeMap::new();
    job_codes.insert("A".to_string(), format!("{id}A"));
    Job {
        id: id.to_string(),
        job_title: title.to_string(),
        main_skill: skill.to_string(),
        level: JobLevel::from_code(level),
        guild: guild.to_string(),
        valid_job_root_id: id.len() as u64,
        job_codes,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn ids(jobs: &[&Job]) -> Vec<String> {
    jobs.iter().map(|job| job.id.clone()).collect()
}

fn sample() -> Vec<Job> {
    vec![
        job("J1", "Backend Engineer", "X", "A", "1"),
        job("J2", "Frontend Engineer", "X", "B", "B"),
        job("J3", "Data Analyst", "Y", "A", "1"),
        job("J4", "Engineering Manager", "Z", "C", "3"),
    ]
}

#[test]
fn empty_filters_match_everything() {
    let jobs = sample();
    let filters = FilterState::default();
    assert_eq!(result_count(&jobs, &filters), 4);
    assert!(jobs.iter().all(|j| matches(j, &filters)));
}

#[test]
fn or_within_field_and_across_fields() {
    let jobs = sample();
    let filters = FilterState {
        guilds: strings(&["X"]),
        main_skills: strings(&["A", "B"]),
        ..FilterState::default()
    };

    assert_eq!(ids(&filtered_jobs(&jobs, &filters)), strings(&["J1", "J2"]));
}

#[test]
fn search_is_case_insensitive_substring_of_title() {
    let jobs = sample();
    let filters = FilterState {
        search: "ENGINEER".to_string(),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filtered_jobs(&jobs, &filters)),
        strings(&["J1", "J2", "J4"])
    );

    let filters = FilterState {
        search: "analyst".to_string(),
        ..FilterState::default()
    };
    assert_eq!(ids(&filtered_jobs(&jobs, &filters)), strings(&["J3"]));
}

#[test]
fn search_does_not_look_at_job_codes() {
    let jobs = sample();
    let filters = FilterState {
        search: "J1".to_string(),
        ..FilterState::default()
    };
    assert!(filtered_jobs(&jobs, &filters).is_empty());
}

#[test]
fn level_filter_uses_code_name_label() {
    let jobs = sample();
    let filters = FilterState {
        levels: strings(&["1-Senior"]),
        ..FilterState::default()
    };
    assert_eq!(ids(&filtered_jobs(&jobs, &filters)), strings(&["J1", "J3"]));

    let bare_code = FilterState {
        levels: strings(&["1"]),
        ..FilterState::default()
    };
    assert!(filtered_jobs(&jobs, &bare_code).is_empty());
}

#[test]
fn no_match_is_an_empty_result() {
    let jobs = sample();
    let filters = FilterState {
        guilds: strings(&["X"]),
        levels: strings(&["3-Principal"]),
        ..FilterState::default()
    };
    assert!(filtered_jobs(&jobs, &filters).is_empty());
    assert_eq!(result_count(&jobs, &filters), 0);
}

#[test]
fn count_matches_filtered_length_for_many_states() {
    let jobs = sample();
    let states = [
        FilterState::default(),
        FilterState {
            search: "eng".to_string(),
            ..FilterState::default()
        },
        FilterState {
            guilds: strings(&["X", "Z"]),
            levels: strings(&["1-Senior", "3-Principal"]),
            ..FilterState::default()
        },
        FilterState {
            main_skills: strings(&["A"]),
            search: "data".to_string(),
            ..FilterState::default()
        },
    ];
    for filters in &states {
        assert_eq!(
            result_count(&jobs, filters),
            filtered_jobs(&jobs, filters).len()
        );
    }
}

#[test]
fn filtering_is_restartable() {
    let jobs = sample();
    let filters = FilterState {
        guilds: strings(&["Y"]),
        ..FilterState::default()
    };
    let first = ids(&filtered_jobs(&jobs, &filters));
    let second = ids(&filtered_jobs(&jobs, &filters));
    assert_eq!(first, second);
    assert_eq!(jobs.len(), 4);
}

#[test]
fn available_main_skills_follow_selected_guilds() {
    let jobs = sample();
    assert_eq!(
        available_main_skills(&jobs, &FilterState::default()),
        strings(&["A", "B", "C"])
    );

    let filters = FilterState {
        guilds: strings(&["X"]),
        ..FilterState::default()
    };
    assert_eq!(available_main_skills(&jobs, &filters), strings(&["A", "B"]));

    let filters = FilterState {
        guilds: strings(&["Y", "Z"]),
        ..FilterState::default()
    };
    assert_eq!(available_main_skills(&jobs, &filters), strings(&["A", "C"]));
}

#[test]
fn stale_skill_is_hidden_from_options_but_still_filters() {
    let jobs = sample();
    let filters = FilterState {
        guilds: strings(&["Y"]),
        main_skills: strings(&["B"]),
        ..FilterState::default()
    };
    assert!(!available_main_skills(&jobs, &filters).contains(&"B".to_string()));
    assert!(filtered_jobs(&jobs, &filters).is_empty());
}

#[test]
fn guild_and_level_options() {
    let jobs = sample();
    assert_eq!(available_guilds(&jobs), strings(&["X", "Y", "Z"]));
    assert_eq!(
        available_levels(&jobs),
        strings(&["B-Intermediate", "1-Senior", "3-Principal"])
    );
}

#[test]
fn unknown_levels_sort_last() {
    let jobs = vec![
        job("J1", "a", "X", "A", "Q"),
        job("J2", "b", "X", "A", "8"),
        job("J3", "c", "X", "A", "F"),
    ];
    assert_eq!(
        available_levels(&jobs),
        strings(&["F-Intern", "8-Fellow II", "Q-Q"])
    );
}

#[test]
fn selection_visibility() {
    let jobs = sample();
    let filters = FilterState {
        guilds: strings(&["X"]),
        ..FilterState::default()
    };
    let visible = filtered_jobs(&jobs, &filters);

    assert!(is_selection_visible(None, &visible));
    assert!(is_selection_visible(Some("J2"), &visible));
    assert!(!is_selection_visible(Some("J3"), &visible));
    assert!(!is_selection_visible(Some("J1"), &[]));
}
