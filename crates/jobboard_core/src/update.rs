use crate::tags::{can_clear_all, remove_tag, to_tags};
use crate::{group_jobs, AppState, DetailsState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let version_before = state.filters_version();

    let effects = match msg {
        Msg::JobsLoaded(rows) => {
            state.set_jobs(group_jobs(&rows));
            Vec::new()
        }
        Msg::SearchChanged(text) => {
            state.filters_mut().set_search(text);
            Vec::new()
        }
        Msg::GuildToggled(guild) => {
            state.filters_mut().toggle_guild(&guild);
            Vec::new()
        }
        Msg::MainSkillToggled(main_skill) => {
            state.filters_mut().toggle_main_skill(&main_skill);
            Vec::new()
        }
        Msg::LevelToggled(level) => {
            state.filters_mut().toggle_level(&level);
            Vec::new()
        }
        Msg::FieldCleared(field) => {
            state.filters_mut().clear_field(field);
            Vec::new()
        }
        Msg::ClearAllClicked => {
            // A lone tag is only removable through its own button.
            if can_clear_all(&to_tags(&state.filters())) {
                state.filters_mut().clear_all();
            }
            Vec::new()
        }
        Msg::TagRemoved(tag) => {
            remove_tag(&tag, state.filters_mut());
            Vec::new()
        }
        Msg::FiltersRestored(filters) => {
            state.filters_mut().replace(filters);
            Vec::new()
        }
        Msg::JobSelected { job_id } => select_job(&mut state, job_id),
        Msg::SelectionCleared => {
            if state.selected_job().is_some() {
                state.clear_selection();
            }
            Vec::new()
        }
        Msg::LanguageChanged(language) => {
            if language == state.language() {
                return (state, Vec::new());
            }
            state.set_language(language);
            let selected = state
                .selected_job()
                .map(|job| (job.id.clone(), job.valid_job_root_id));
            match selected {
                Some((job_id, root_id)) => {
                    state.select(job_id, root_id);
                    vec![Effect::LoadDetails {
                        valid_job_root_id: root_id,
                        language,
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::DetailsLoaded {
            valid_job_root_id,
            language,
            result,
        } => {
            let awaited = matches!(
                state.details(),
                DetailsState::Loading { valid_job_root_id: id, language: lang }
                    if *id == valid_job_root_id && *lang == language
            );
            // Responses for an earlier selection or language are dropped.
            if awaited {
                state.set_details(match result {
                    Ok(details) => DetailsState::Loaded {
                        valid_job_root_id,
                        details,
                    },
                    Err(message) => DetailsState::Failed {
                        valid_job_root_id,
                        message,
                    },
                });
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    if state.filters_version() != version_before {
        state.mark_dirty();
    }

    (state, effects)
}

fn select_job(state: &mut AppState, job_id: String) -> Vec<Effect> {
    let Some(root_id) = state
        .jobs()
        .iter()
        .find(|job| job.id == job_id)
        .map(|job| job.valid_job_root_id)
    else {
        return Vec::new();
    };

    let already_selected = state
        .selected_job()
        .is_some_and(|job| job.id == job_id);
    if already_selected && !matches!(state.details(), DetailsState::Failed { .. }) {
        return Vec::new();
    }

    state.select(job_id, root_id);
    vec![Effect::LoadDetails {
        valid_job_root_id: root_id,
        language: state.language(),
    }]
}
