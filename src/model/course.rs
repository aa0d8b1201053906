use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown level: {}", s))
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Lesson {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Lesson {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub level: Level,
    /// One fractional digit, e.g. "4.7".
    pub rating: String,
    pub image: String,
    pub description: String,
    pub duration: String,
    pub topics: Vec<String>,
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Rating as a number; unparsable ratings sort last.
    pub fn rating_value(&self) -> f64 {
        self.rating.parse().unwrap_or(0.0)
    }

    /// Fresh copy of the lesson list with every lesson incomplete.
    pub fn blank_lessons(&self) -> Vec<Lesson> {
        self.lessons
            .iter()
            .map(|lesson| Lesson {
                completed: false,
                ..lesson.clone()
            })
            .collect()
    }
}
