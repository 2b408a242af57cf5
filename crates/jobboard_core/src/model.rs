use std::collections::BTreeMap;
use std::fmt;

/// Fixed rank table: level code -> display name.
pub const LEVEL_NAMES: &[(&str, &str)] = &[
    ("F", "Intern"),
    ("E", "Trainee"),
    ("D", "Associate"),
    ("C", "Associate II"),
    ("B", "Intermediate"),
    ("A", "Intermediate II"),
    ("1", "Senior"),
    ("2", "Senior II"),
    ("3", "Principal"),
    ("4", "Principal II"),
    ("5", "Distinguished"),
    ("6", "Distinguished II"),
    ("7", "Fellow"),
    ("8", "Fellow II"),
];

/// Country key -> display name for the per-country job code variants.
pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("A", "Argentina"),
    ("B", "Brazil"),
    ("C", "Costa Rica"),
    ("M", "Mexico"),
    ("U", "USA"),
];

/// Display name for a country key, if it is one of the known markets.
pub fn country_name(key: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Seniority level of a job. The name is always derived from the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobLevel {
    code: String,
    name: String,
}

impl JobLevel {
    /// Looks the code up in [`LEVEL_NAMES`]; unknown codes reuse the code as name.
    pub fn from_code(code: &str) -> Self {
        let name = LEVEL_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(code, |(_, name)| *name);
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `"{code}-{name}"`, the form used by level filters and list badges.
    pub fn label(&self) -> String {
        format!("{}-{}", self.code, self.name)
    }

    /// Position in the rank table; unknown codes sort after every known one.
    pub(crate) fn rank(&self) -> usize {
        LEVEL_NAMES
            .iter()
            .position(|(c, _)| *c == self.code)
            .unwrap_or(LEVEL_NAMES.len())
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.code, self.name)
    }
}

/// One feed row: a job as offered in a single country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJobRow {
    pub job_title: String,
    pub main_skill: String,
    pub level: String,
    pub guild: String,
    pub country: String,
    pub job_code: String,
    pub valid_job_root_id: u64,
}

/// Canonical job record with all of its country variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub job_title: String,
    pub main_skill: String,
    pub level: JobLevel,
    pub guild: String,
    pub valid_job_root_id: u64,
    /// Country key -> full per-country job code.
    pub job_codes: BTreeMap<String, String>,
}

/// UI language for the job detail lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::Portuguese];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
        }
    }

    /// Value expected by the detail API's `language` query parameter.
    pub fn api_value(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Portuguese => "Portuguese",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Portuguese => "Português",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Like [`Language::from_code`] but falls back to the default language.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

/// A skill entry of a job detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub description: String,
    pub observable_behaviors: Vec<String>,
}

/// Long-form description of a job, fetched on selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDetails {
    pub mission: String,
    pub responsibilities: Vec<String>,
    pub experiences: Vec<String>,
    pub technical_skills: Vec<Skill>,
    pub foundational_skills: Vec<Skill>,
}
