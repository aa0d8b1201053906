use log::{error, info, warn};
use reqwest_middleware::ClientWithMiddleware;

use crate::config::CatalogConfig;
use crate::core::open_library::OpenLibraryFeed;
use crate::core::placeholder::PlaceholderFeed;
use crate::error::catalog::Result;
use crate::model::catalog_response::{CatalogResponse, CourseSource};
use crate::model::course::Course;

pub const NO_FALLBACK_MESSAGE: &str = "No fallback data provided";

/// A remote source of courses. One call is one attempt; an empty list
/// counts as a failure for the purposes of the fallback chain.
#[async_trait::async_trait]
pub trait CourseFeed: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<Course>>;
}

pub struct CourseProvider {
    primary: Box<dyn CourseFeed>,
    secondary: Box<dyn CourseFeed>,
}

impl CourseProvider {
    pub fn new(primary: Box<dyn CourseFeed>, secondary: Box<dyn CourseFeed>) -> Self {
        CourseProvider { primary, secondary }
    }

    /// Open Library first, JSONPlaceholder second, sharing one client.
    pub fn public_apis(client: ClientWithMiddleware, config: &CatalogConfig) -> Self {
        CourseProvider::new(
            Box::new(OpenLibraryFeed::new(client.clone(), config)),
            Box::new(PlaceholderFeed::new(client, config)),
        )
    }

    async fn attempt(feed: &dyn CourseFeed) -> Option<Vec<Course>> {
        info!("Attempting to fetch data from {}...", feed.name());
        match feed.fetch().await {
            Ok(courses) if !courses.is_empty() => {
                info!("Successfully fetched {} courses from {}.", courses.len(), feed.name());
                Some(courses)
            }
            Ok(_) => {
                warn!("{} returned no usable courses", feed.name());
                None
            }
            Err(err) => {
                warn!("{} failed: {}", feed.name(), err);
                None
            }
        }
    }

    /// Walks primary, secondary, then `fallback`, and reports which one
    /// supplied the data. Never fails; exhaustion yields a
    /// [`CourseSource::Error`] result with no courses.
    pub async fn get_courses_with_fallback(&self, fallback: Option<&[Course]>) -> CatalogResponse {
        if let Some(courses) = Self::attempt(self.primary.as_ref()).await {
            return CatalogResponse::live(CourseSource::Primary, courses);
        }

        if let Some(courses) = Self::attempt(self.secondary.as_ref()).await {
            return CatalogResponse::live(CourseSource::Secondary, courses);
        }

        match fallback {
            Some(courses) if !courses.is_empty() => {
                info!("All APIs failed, using {} demo courses", courses.len());
                CatalogResponse::demo(courses.to_vec())
            }
            _ => {
                error!("All APIs failed and no demo data is available");
                CatalogResponse::exhausted(NO_FALLBACK_MESSAGE)
            }
        }
    }
}
