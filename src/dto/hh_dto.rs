use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Error;
use crate::models::vacancy::VacancyRecord;
use crate::utils::serde_ext::{deserialize_id_flexible, null_as_default};

/// One page of `GET /vacancies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default, deserialize_with = "deserialize_id_flexible")]
    pub id: Option<String>,
}

/// A `{ "name": ... }` reference object, as used for experience, area, employer and so on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `GET /vacancies/{id}`. Only the fields the collector keeps are decoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyDetail {
    #[serde(default, deserialize_with = "deserialize_id_flexible")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_skills: Vec<NamedRef>,
    #[serde(default)]
    pub experience: Option<NamedRef>,
    #[serde(default)]
    pub employment: Option<NamedRef>,
    #[serde(default)]
    pub schedule: Option<NamedRef>,
    #[serde(default)]
    pub salary: Option<JsonValue>,
    #[serde(default)]
    pub area: Option<NamedRef>,
    #[serde(default)]
    pub employer: Option<NamedRef>,
    #[serde(default)]
    pub published_at: Option<String>,
}

fn ref_name(value: Option<NamedRef>) -> Option<String> {
    value.and_then(|r| r.name)
}

impl TryFrom<VacancyDetail> for VacancyRecord {
    type Error = Error;

    fn try_from(detail: VacancyDetail) -> Result<Self, Self::Error> {
        let id = detail.id.ok_or_else(|| {
            Error::MalformedRecord(format!("vacancy '{}' has no id", detail.name))
        })?;

        Ok(Self {
            id,
            name: detail.name,
            description: detail.description,
            key_skills: detail.key_skills.into_iter().filter_map(|s| s.name).collect(),
            experience: ref_name(detail.experience),
            employment: ref_name(detail.employment),
            schedule: ref_name(detail.schedule),
            salary: detail.salary,
            area: ref_name(detail.area),
            employer: ref_name(detail.employer),
            published_at: detail.published_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_detail_normalizes_to_record() {
        let detail: VacancyDetail = serde_json::from_value(json!({
            "id": "101",
            "name": "Python-разработчик",
            "description": "<p>Бэкенд</p>",
            "key_skills": [{"name": "Python"}, {"name": "Django"}],
            "experience": {"id": "between1And3", "name": "От 1 года до 3 лет"},
            "employment": {"id": "full", "name": "Полная занятость"},
            "schedule": {"id": "remote", "name": "Удаленная работа"},
            "salary": {"from": 150000, "to": null, "currency": "RUR", "gross": false},
            "area": {"id": "1", "name": "Москва"},
            "employer": {"id": "42", "name": "Acme"},
            "published_at": "2024-05-01T10:00:00+0300",
            "alternate_url": "https://hh.ru/vacancy/101"
        }))
        .unwrap();

        let record = VacancyRecord::try_from(detail).unwrap();
        assert_eq!(record.id, "101");
        assert_eq!(record.key_skills, vec!["Python", "Django"]);
        assert_eq!(record.experience.as_deref(), Some("От 1 года до 3 лет"));
        assert_eq!(record.schedule.as_deref(), Some("Удаленная работа"));
        assert_eq!(record.area.as_deref(), Some("Москва"));
        assert_eq!(record.employer.as_deref(), Some("Acme"));
        assert_eq!(record.salary.unwrap()["currency"], "RUR");
    }

    #[test]
    fn missing_optional_fields_stay_absent() {
        let detail: VacancyDetail =
            serde_json::from_value(json!({"id": 7, "name": "Intern", "employer": null}))
                .unwrap();
        let record = VacancyRecord::try_from(detail).unwrap();

        assert_eq!(record.id, "7");
        assert!(record.key_skills.is_empty());
        assert_eq!(record.description, None);
        assert_eq!(record.experience, None);
        assert_eq!(record.employment, None);
        assert_eq!(record.schedule, None);
        assert_eq!(record.salary, None);
        assert_eq!(record.employer, None);
        assert_eq!(record.published_at, None);
    }

    #[test]
    fn nameless_skills_are_dropped() {
        let detail: VacancyDetail = serde_json::from_value(json!({
            "id": "3",
            "name": "Dev",
            "key_skills": [{"name": "SQL"}, {}, {"name": null}]
        }))
        .unwrap();
        let record = VacancyRecord::try_from(detail).unwrap();
        assert_eq!(record.key_skills, vec!["SQL"]);
    }

    #[test]
    fn detail_without_id_is_malformed() {
        let detail: VacancyDetail = serde_json::from_value(json!({"name": "Ghost"})).unwrap();
        let err = VacancyRecord::try_from(detail).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn search_page_tolerates_missing_ids() {
        let page: SearchPage = serde_json::from_value(json!({
            "items": [{"id": "1"}, {"name": "no id"}, {"id": 2}],
            "found": 3,
            "pages": 1
        }))
        .unwrap();
        let ids: Vec<Option<String>> = page.items.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![Some("1".into()), None, Some("2".into())]);
    }
}
