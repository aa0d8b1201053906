use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

pub const DEFAULT_OPEN_LIBRARY_URL: &str = "https://openlibrary.org/subjects";
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_FILE: &str = "data/edulearn_user.json";

pub const DEFAULT_SUBJECTS: [&str; 6] = [
    "programming",
    "computer_science",
    "data_science",
    "web_development",
    "machine_learning",
    "design",
];

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub open_library_url: String,
    pub covers_url: String,
    pub placeholder_url: String,
    pub subjects: Vec<String>,
    pub subjects_per_fetch: usize,
    pub works_per_subject: usize,
    pub posts_limit: usize,
    pub lessons_per_course: u32,
    pub page_size: usize,
    pub featured_count: usize,
    pub user_file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            open_library_url: DEFAULT_OPEN_LIBRARY_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            subjects_per_fetch: 3,
            works_per_subject: 5,
            posts_limit: 12,
            lessons_per_course: 5,
            page_size: 3,
            featured_count: 6,
            user_file: PathBuf::from(DEFAULT_USER_FILE),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `EDULEARN_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = CatalogConfig::default();

        if let Ok(url) = env::var("EDULEARN_OPEN_LIBRARY_URL") {
            config.open_library_url = url;
        }
        if let Ok(url) = env::var("EDULEARN_COVERS_URL") {
            config.covers_url = url;
        }
        if let Ok(url) = env::var("EDULEARN_PLACEHOLDER_URL") {
            config.placeholder_url = url;
        }
        if let Ok(path) = env::var("EDULEARN_USER_FILE") {
            config.user_file = PathBuf::from(path);
        }
        config.page_size = number_var("EDULEARN_PAGE_SIZE", config.page_size);
        config.subjects_per_fetch =
            number_var("EDULEARN_SUBJECTS_PER_FETCH", config.subjects_per_fetch);

        config
    }
}

fn number_var<T: FromStr + Copy + PartialOrd + Default>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) if value > T::default() => value,
            _ => {
                warn!("ignoring {}={:?}, keeping default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}
