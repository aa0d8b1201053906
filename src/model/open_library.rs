use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// `GET /subjects/{subject}.json`. Works are kept raw so a single bad
/// record can be dropped without failing the whole subject.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SubjectResponse {
    #[serde(default)]
    pub works: Vec<serde_json::Value>,
}

/// Decodes an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Only `title` is required. Every other field falls back to `None` when
/// it is missing, null or of an unexpected type.
#[derive(Serialize, Deserialize, Debug)]
pub struct Work {
    pub title: String,

    #[serde(default, deserialize_with = "lenient")]
    pub authors: Option<Vec<WorkAuthor>>,

    #[serde(default, deserialize_with = "lenient")]
    pub cover_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<Description>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkAuthor {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Open Library serves descriptions either as a bare string or as a typed
/// text object (`{"type": "/type/text", "value": "..."}`).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Description {
    Plain(String),
    Typed { value: String },
    Other(serde_json::Value),
}

impl Description {
    pub fn text(&self) -> Option<&str> {
        match self {
            Description::Plain(text) => Some(text),
            Description::Typed { value } => Some(value),
            Description::Other(_) => None,
        }
    }
}

impl Work {
    pub fn first_author(&self) -> Option<&str> {
        self.authors
            .as_deref()
            .and_then(<[WorkAuthor]>::first)
            .and_then(|author| author.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(Description::text)
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn description_accepts_both_shapes() {
        let plain: Work = serde_json::from_value(json!({
            "title": "A", "description": "plain text"
        }))
        .unwrap();
        assert_eq!(plain.description_text(), Some("plain text"));

        let typed: Work = serde_json::from_value(json!({
            "title": "B", "description": { "type": "/type/text", "value": "typed text" }
        }))
        .unwrap();
        assert_eq!(typed.description_text(), Some("typed text"));
    }

    #[test]
    fn sparse_work_decodes() {
        let work: Work = serde_json::from_value(json!({ "title": "Only a title" })).unwrap();
        assert!(work.first_author().is_none());
        assert!(work.cover_id.is_none());
        assert!(work.description_text().is_none());
    }

    #[test]
    fn null_authors_decode_as_missing() {
        let work: Work =
            serde_json::from_value(json!({ "title": "T", "authors": null, "cover_id": null }))
                .unwrap();
        assert!(work.first_author().is_none());
    }

    #[test]
    fn work_without_title_is_rejected() {
        let work = serde_json::from_value::<Work>(json!({ "cover_id": 12 }));
        assert!(work.is_err());
    }

    #[test]
    fn string_cover_id_is_treated_as_missing() {
        let work: Work =
            serde_json::from_value(json!({ "title": "A", "cover_id": "12345" })).unwrap();
        assert_eq!(work.title, "A");
        assert!(work.cover_id.is_none());
    }

    #[test]
    fn typed_description_without_value_has_no_text() {
        let work: Work = serde_json::from_value(json!({
            "title": "B", "description": { "type": "/type/text" }
        }))
        .unwrap();
        assert!(matches!(work.description, Some(Description::Other(_))));
        assert!(work.description_text().is_none());
    }

    #[test]
    fn numeric_description_has_no_text() {
        let work: Work =
            serde_json::from_value(json!({ "title": "D", "description": 7 })).unwrap();
        assert!(work.description_text().is_none());
    }

    #[test]
    fn non_string_author_name_is_treated_as_missing() {
        let work: Work =
            serde_json::from_value(json!({ "title": "C", "authors": [{ "name": 42 }] })).unwrap();
        assert_eq!(work.authors.as_ref().map(Vec::len), Some(1));
        assert!(work.first_author().is_none());

        let work: Work =
            serde_json::from_value(json!({ "title": "C", "authors": "Ada Lovelace" })).unwrap();
        assert!(work.authors.is_none());
    }
}
