use std::time::Duration;

use board_logging::{board_debug, board_warn};
use futures_util::StreamExt;
use jobboard_core::{JobDetails, Language, Skill};
use serde::Deserialize;

use crate::{FailureKind, FetchError};

pub const DEFAULT_API_BASE: &str = "https://job-arch-app-service-2.azurewebsites.net/api";

#[derive(Debug, Clone)]
pub struct DetailsSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for DetailsSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Source of job detail pages, keyed by root id and language.
#[async_trait::async_trait]
pub trait DetailsFetcher: Send + Sync {
    async fn fetch(
        &self,
        valid_job_root_id: u64,
        language: Language,
    ) -> Result<JobDetails, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDetailsFetcher {
    settings: DetailsSettings,
    client: reqwest::Client,
}

impl ReqwestDetailsFetcher {
    pub fn new(settings: DetailsSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `{base}/ValidJobRoot?validJobRootId={id}&language={api value}`
    pub fn details_url(
        &self,
        valid_job_root_id: u64,
        language: Language,
    ) -> Result<reqwest::Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/ValidJobRoot"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("validJobRootId", &valid_job_root_id.to_string())
            .append_pair("language", language.api_value());
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl DetailsFetcher for ReqwestDetailsFetcher {
    async fn fetch(
        &self,
        valid_job_root_id: u64,
        language: Language,
    ) -> Result<JobDetails, FetchError> {
        let url = self.details_url(valid_job_root_id, language)?;
        board_debug!("Fetching details root={} url={}", valid_job_root_id, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            board_warn!(
                "Detail lookup for root {} failed with {}",
                valid_job_root_id,
                status
            );
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        decode_details(&bytes)
    }
}

/// Decode a `ValidJobRoot` response body into [`JobDetails`].
pub fn decode_details(bytes: &[u8]) -> Result<JobDetails, FetchError> {
    let root: ApiJobRoot = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    let mission = match root.mission {
        Some(mission) if !mission.trim().is_empty() => mission,
        _ => {
            return Err(FetchError::new(
                FailureKind::MissingMission,
                "response has no mission text",
            ))
        }
    };

    Ok(JobDetails {
        mission,
        responsibilities: texts(root.responsibilities),
        experiences: texts(root.experiences),
        technical_skills: root.technical_skills.into_iter().map(Skill::from).collect(),
        foundational_skills: root
            .foundational_skills
            .into_iter()
            .map(Skill::from)
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiJobRoot {
    #[serde(default)]
    mission: Option<String>,
    #[serde(default)]
    technical_skills: Vec<ApiSkill>,
    #[serde(default)]
    foundational_skills: Vec<ApiSkill>,
    #[serde(default)]
    responsibilities: Vec<ApiText>,
    #[serde(default)]
    experiences: Vec<ApiText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSkill {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    proficiency_text: String,
    #[serde(default)]
    observable_behaviors: Vec<ApiText>,
}

#[derive(Debug, Deserialize)]
struct ApiText {
    #[serde(default)]
    text: Option<String>,
}

impl From<ApiSkill> for Skill {
    fn from(skill: ApiSkill) -> Self {
        Skill {
            name: skill.title,
            level: skill.proficiency_text,
            description: skill.description,
            observable_behaviors: texts(skill.observable_behaviors),
        }
    }
}

/// Trimmed, non-blank `text` values.
fn texts(items: Vec<ApiText>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| item.text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
