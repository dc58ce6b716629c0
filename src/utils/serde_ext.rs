use serde::{Deserialize, Deserializer};

/// Accepts an identifier sent either as a JSON string or a JSON integer.
pub fn deserialize_id_flexible<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    Ok(
        Option::<StringOrInt>::deserialize(deserializer)?.and_then(|value| match value {
            StringOrInt::String(s) if s.trim().is_empty() => None,
            StringOrInt::String(s) => Some(s),
            StringOrInt::Int(i) => Some(i.to_string()),
        }),
    )
}

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "deserialize_id_flexible")]
        id: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn id_accepts_string_and_integer() {
        let a: Sample = serde_json::from_str(r#"{"id": "93512"}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"id": 93512}"#).unwrap();
        assert_eq!(a.id.as_deref(), Some("93512"));
        assert_eq!(b.id.as_deref(), Some("93512"));
    }

    #[test]
    fn id_missing_null_or_blank_is_none() {
        for raw in [r#"{}"#, r#"{"id": null}"#, r#"{"id": "  "}"#] {
            let sample: Sample = serde_json::from_str(raw).unwrap();
            assert!(sample.id.is_none(), "expected no id for {}", raw);
        }
    }

    #[test]
    fn null_list_becomes_empty() {
        let sample: Sample = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(sample.tags.is_empty());
    }
}
