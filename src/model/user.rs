use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::course::Lesson;

/// Demo account; nothing about it is verified.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub enrolled_courses: Vec<u32>,
    /// Per-course lesson snapshot, keyed by course id.
    #[serde(default)]
    pub progress: BTreeMap<u32, Vec<Lesson>>,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        User {
            name: name.to_string(),
            email: email.to_string(),
            enrolled_courses: Vec::new(),
            progress: BTreeMap::new(),
        }
    }

    pub fn is_enrolled(&self, course_id: u32) -> bool {
        self.enrolled_courses.contains(&course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_stored_record_with_string_keys() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "enrolledCourses": [3],
            "progress": { "3": [ { "id": 1, "title": "Intro", "completed": true } ] }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_enrolled(3));
        assert!(user.progress[&3][0].completed);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"name":"A","email":"a@b"}"#).unwrap();
        assert!(user.enrolled_courses.is_empty());
        assert!(user.progress.is_empty());
    }
}
