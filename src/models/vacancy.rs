use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::utils::serde_ext::null_as_default;

/// One normalized posting, as stored in the collector's output file.
///
/// Field order is the on-disk order. Optional fields serialize as `null`
/// rather than being skipped, so absent and empty stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_skills: Vec<String>,
    pub experience: Option<String>,
    pub employment: Option<String>,
    pub schedule: Option<String>,
    pub salary: Option<JsonValue>,
    pub area: Option<String>,
    pub employer: Option<String>,
    pub published_at: Option<String>,
}

/// The collection the server answers from. Built once at startup and never mutated.
#[derive(Debug, Default)]
pub struct VacancySnapshot {
    records: Vec<VacancyRecord>,
}

impl VacancySnapshot {
    pub fn new(records: Vec<VacancyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VacancyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
