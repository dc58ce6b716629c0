use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::vacancy::{VacancyRecord, VacancySnapshot};

/// Renders records as a JSON array with 4-space indentation.
/// Non-ASCII text is written as-is.
pub fn to_pretty_json(records: &[VacancyRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes the full collection in one go: temp file first, then rename over the target.
pub async fn write_vacancies(path: &Path, records: &[VacancyRecord]) -> Result<()> {
    let bytes = to_pretty_json(records)?;
    let tmp = temp_path_for(path);
    tokio::fs::write(&tmp, &bytes).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    info!(path = %path.display(), count = records.len(), "Vacancies written");
    Ok(())
}

pub async fn load_vacancies(path: &Path) -> Result<Vec<VacancyRecord>> {
    let data_load = |reason: String| Error::DataLoad {
        path: path.display().to_string(),
        reason,
    };
    let raw = tokio::fs::read(path)
        .await
        .map_err(|e| data_load(e.to_string()))?;
    serde_json::from_slice(&raw).map_err(|e| data_load(e.to_string()))
}

pub async fn load_snapshot(path: &Path) -> Result<VacancySnapshot> {
    let records = load_vacancies(path).await?;
    info!(path = %path.display(), count = records.len(), "Vacancy snapshot loaded");
    Ok(VacancySnapshot::new(records))
}
