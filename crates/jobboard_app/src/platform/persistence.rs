use std::path::Path;

use board_logging::{board_error, board_info, board_warn};
use chrono::Utc;
use jobboard_core::{FilterState, Language};
use jobboard_engine::StateFile;
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".jobboard_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    #[serde(default)]
    search: String,
    #[serde(default)]
    guilds: Vec<String>,
    #[serde(default)]
    main_skills: Vec<String>,
    #[serde(default)]
    levels: Vec<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    saved_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RestoredSession {
    pub filters: FilterState,
    pub language: Option<Language>,
}

pub(crate) fn load_session(state_dir: &Path) -> Option<RestoredSession> {
    let file = StateFile::new(state_dir, SESSION_FILENAME);
    let content = match file.load() {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            board_warn!("Failed to load saved session: {}", err);
            return None;
        }
    };

    let session: PersistedSession = match ron::from_str(&content) {
        Ok(session) => session,
        Err(err) => {
            board_warn!("Failed to parse saved session from {:?}: {}", file.path(), err);
            return None;
        }
    };

    board_info!(
        "Restored filter session from {:?} (saved {})",
        file.path(),
        session.saved_at.as_deref().unwrap_or("at an unknown time")
    );
    Some(RestoredSession {
        language: session.language.as_deref().and_then(Language::from_code),
        filters: FilterState {
            search: session.search,
            guilds: session.guilds,
            main_skills: session.main_skills,
            levels: session.levels,
        },
    })
}

pub(crate) fn save_session(state_dir: &Path, filters: &FilterState, language: Language) {
    let session = PersistedSession {
        search: filters.search.clone(),
        guilds: filters.guilds.clone(),
        main_skills: filters.main_skills.clone(),
        levels: filters.levels.clone(),
        language: Some(language.code().to_string()),
        saved_at: Some(Utc::now().to_rfc3339()),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&session, pretty) {
        Ok(text) => text,
        Err(err) => {
            board_error!("Failed to serialize filter session: {}", err);
            return;
        }
    };

    if let Err(err) = StateFile::new(state_dir, SESSION_FILENAME).save(&content) {
        board_error!("Failed to save filter session: {}", err);
    }
}
