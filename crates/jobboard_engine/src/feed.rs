use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use board_logging::{board_debug, board_info};
use jobboard_core::RawJobRow;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid feed JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Row shape of the job listing API. Extra fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiJobRow {
    job_title: String,
    main_skill: String,
    level: String,
    guild: String,
    country: String,
    job_code: String,
    valid_job_root_id: u64,
}

impl From<ApiJobRow> for RawJobRow {
    fn from(row: ApiJobRow) -> Self {
        RawJobRow {
            job_title: row.job_title,
            main_skill: row.main_skill,
            level: row.level,
            guild: row.guild,
            country: row.country,
            job_code: row.job_code,
            valid_job_root_id: row.valid_job_root_id,
        }
    }
}

/// Parse a JSON array of job rows.
pub fn decode_feed(bytes: &[u8]) -> Result<Vec<RawJobRow>, FeedError> {
    let rows: Vec<ApiJobRow> = serde_json::from_slice(bytes)?;
    board_debug!("Decoded {} feed rows", rows.len());
    Ok(rows.into_iter().map(RawJobRow::from).collect())
}

/// Read and parse a saved feed document.
pub fn load_feed(path: &Path) -> Result<Vec<RawJobRow>, FeedError> {
    let bytes = fs::read(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = decode_feed(&bytes)?;
    board_info!("Loaded {} job rows from {:?}", rows.len(), path);
    Ok(rows)
}
