use serde::{Deserialize, Serialize};

use crate::model::course::Course;

/// Which link of the fallback chain produced a catalog.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourseSource {
    Primary,
    Secondary,
    Fallback,
    Error,
}

impl CourseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseSource::Primary => "primary",
            CourseSource::Secondary => "secondary",
            CourseSource::Fallback => "fallback",
            CourseSource::Error => "error",
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub source: CourseSource,
    pub data: Vec<Course>,
    #[serde(default)]
    pub is_demo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogResponse {
    pub fn live(source: CourseSource, data: Vec<Course>) -> Self {
        CatalogResponse {
            source,
            data,
            is_demo: false,
            error: None,
        }
    }

    pub fn demo(data: Vec<Course>) -> Self {
        CatalogResponse {
            source: CourseSource::Fallback,
            data,
            is_demo: true,
            error: None,
        }
    }

    pub fn exhausted(message: &str) -> Self {
        CatalogResponse {
            source: CourseSource::Error,
            data: Vec::new(),
            is_demo: true,
            error: Some(message.to_string()),
        }
    }
}
