use futures::future::join_all;
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use crate::config::CatalogConfig;
use crate::core::generator;
use crate::core::provider::CourseFeed;
use crate::error::catalog::{CatalogError, ErrorKind, Result};
use crate::model::course::Course;
use crate::model::open_library::{SubjectResponse, Work};

pub const DEFAULT_INSTRUCTOR: &str = "Expert Instructor";

pub fn default_description(title: &str) -> String {
    format!(
        "Learn all about {} in this comprehensive course designed for all skill levels. Master key concepts and practical applications.",
        title
    )
}

pub fn placeholder_image(subject: &str) -> String {
    format!("https://source.unsplash.com/random/800x600/?{}", subject)
}

/// Primary feed: a few random Open Library subjects, fetched concurrently.
pub struct OpenLibraryFeed {
    client: ClientWithMiddleware,
    base_url: String,
    covers_url: String,
    subjects: Vec<String>,
    subjects_per_fetch: usize,
    works_per_subject: usize,
    lessons_per_course: u32,
}

impl OpenLibraryFeed {
    pub fn new(client: ClientWithMiddleware, config: &CatalogConfig) -> Self {
        OpenLibraryFeed {
            client,
            base_url: config.open_library_url.trim_end_matches('/').to_string(),
            covers_url: config.covers_url.trim_end_matches('/').to_string(),
            subjects: config.subjects.clone(),
            subjects_per_fetch: config.subjects_per_fetch,
            works_per_subject: config.works_per_subject,
            lessons_per_course: config.lessons_per_course,
        }
    }

    fn subject_url(&self, subject: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}.json", self.base_url, subject)).map_err(|e| {
            CatalogError::new(ErrorKind::Network, &format!("bad subject url: {}", e))
        })?;
        url.query_pairs_mut()
            .append_pair("limit", &self.works_per_subject.to_string());
        Ok(url)
    }

    async fn fetch_subject(&self, subject: &str) -> Result<SubjectResponse> {
        let url = self.subject_url(subject)?;
        let response = self.client.get(url).send().await?;
        let data: SubjectResponse = response.json().await?;
        Ok(data)
    }

    fn pick_subjects(&self) -> Vec<String> {
        let mut subjects = self.subjects.clone();
        subjects.shuffle(&mut rand::rng());
        subjects.truncate(self.subjects_per_fetch);
        subjects
    }
}

#[async_trait::async_trait]
impl CourseFeed for OpenLibraryFeed {
    fn name(&self) -> &str {
        "Open Library"
    }

    async fn fetch(&self) -> Result<Vec<Course>> {
        let subjects = self.pick_subjects();
        debug!("fetching subjects {:?}", subjects);

        let results = join_all(subjects.iter().map(|subject| self.fetch_subject(subject))).await;

        let mut batches = Vec::new();
        for (subject, result) in subjects.into_iter().zip(results) {
            match result {
                Ok(response) => batches.push((subject, response.works)),
                Err(err) => warn!("subject {} failed: {}", subject, err),
            }
        }

        let mut rng = rand::rng();
        let courses = normalize_subjects(
            &mut rng,
            &batches,
            &self.covers_url,
            self.lessons_per_course,
        );
        info!("Open Library produced {} courses", courses.len());
        Ok(courses)
    }
}

/// Turns raw subject payloads into courses with ids counting from 1.
/// Records without a usable title are skipped. Other fields of the wrong
/// shape get the same defaults as missing ones.
pub fn normalize_subjects<R: Rng + ?Sized>(
    rng: &mut R,
    batches: &[(String, Vec<serde_json::Value>)],
    covers_url: &str,
    lessons_per_course: u32,
) -> Vec<Course> {
    let mut courses = Vec::new();
    let mut next_id = 1;

    for (subject, works) in batches {
        for raw in works {
            let work: Work = match serde_json::from_value(raw.clone()) {
                Ok(work) => work,
                Err(err) => {
                    warn!("dropping malformed {} work: {}", subject, err);
                    continue;
                }
            };
            courses.push(work_to_course(rng, next_id, subject, &work, covers_url, lessons_per_course));
            next_id += 1;
        }
    }

    courses
}

pub fn work_to_course<R: Rng + ?Sized>(
    rng: &mut R,
    id: u32,
    subject: &str,
    work: &Work,
    covers_url: &str,
    lessons_per_course: u32,
) -> Course {
    let image = match work.cover_id {
        Some(cover_id) => format!("{}/b/id/{}-L.jpg", covers_url, cover_id),
        None => placeholder_image(subject),
    };

    Course {
        id,
        title: work.title.clone(),
        instructor: work.first_author().unwrap_or(DEFAULT_INSTRUCTOR).to_string(),
        level: generator::random_level(rng),
        rating: generator::random_rating(rng),
        image,
        description: work
            .description_text()
            .map(str::to_string)
            .unwrap_or_else(|| default_description(&work.title)),
        duration: generator::random_duration(rng),
        lessons: generator::generate_lessons(rng, &work.title, lessons_per_course),
        topics: generator::generate_topics(rng, subject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::topics_for_category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    const COVERS: &str = "https://covers.openlibrary.org";

    #[test]
    fn sparse_work_gets_every_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let batches = vec![("design".to_string(), vec![json!({ "title": "Color" })])];
        let courses = normalize_subjects(&mut rng, &batches, COVERS, 5);

        assert_eq!(courses.len(), 1);
        let course = &courses[0];
        assert_eq!(course.instructor, DEFAULT_INSTRUCTOR);
        assert_eq!(course.description, default_description("Color"));
        assert_eq!(course.image, placeholder_image("design"));
        assert_eq!(course.lessons.len(), 5);
        assert!(!course.topics.is_empty());
        assert!(course.topics.iter().all(|t| topics_for_category("design").contains(&t.as_str())));
    }

    #[test]
    fn full_work_keeps_its_fields() {
        let mut rng = StdRng::seed_from_u64(2);
        let batches = vec![(
            "programming".to_string(),
            vec![json!({
                "title": "Structure and Interpretation",
                "authors": [{ "key": "/authors/OL1A", "name": "Harold Abelson" }],
                "cover_id": 240727,
                "description": { "type": "/type/text", "value": "A classic." }
            })],
        )];
        let course = &normalize_subjects(&mut rng, &batches, COVERS, 5)[0];

        assert_eq!(course.instructor, "Harold Abelson");
        assert_eq!(course.description, "A classic.");
        assert_eq!(course.image, "https://covers.openlibrary.org/b/id/240727-L.jpg");
    }

    #[test]
    fn malformed_records_are_dropped_and_ids_stay_dense() {
        let mut rng = StdRng::seed_from_u64(3);
        let batches = vec![
            (
                "design".to_string(),
                vec![json!({ "title": "One" }), json!({ "cover_id": 5 }), json!("junk")],
            ),
            ("programming".to_string(), vec![json!({ "title": "Two" })]),
        ];
        let courses = normalize_subjects(&mut rng, &batches, COVERS, 3);

        let ids: Vec<u32> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(courses[1].title, "Two");
        assert_eq!(courses[1].lessons.len(), 3);
    }

    #[test]
    fn mistyped_optional_fields_get_defaults() {
        let mut rng = StdRng::seed_from_u64(5);
        let batches = vec![(
            "business".to_string(),
            vec![
                json!({ "title": "A", "cover_id": "12345" }),
                json!({ "title": "B", "description": { "type": "/type/text" } }),
                json!({ "title": "C", "authors": [{ "name": 42 }] }),
                json!({ "title": "D", "description": 7 }),
            ],
        )];
        let courses = normalize_subjects(&mut rng, &batches, COVERS, 2);

        let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
        let ids: Vec<u32> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        for course in &courses {
            assert_eq!(course.instructor, DEFAULT_INSTRUCTOR);
            assert_eq!(course.description, default_description(&course.title));
            assert_eq!(course.image, placeholder_image("business"));
        }
    }

    #[test]
    fn empty_author_name_falls_back() {
        let mut rng = StdRng::seed_from_u64(4);
        let work: Work =
            serde_json::from_value(json!({ "title": "T", "authors": [{ "name": "  " }] })).unwrap();
        let course = work_to_course(&mut rng, 1, "design", &work, COVERS, 1);
        assert_eq!(course.instructor, DEFAULT_INSTRUCTOR);
    }

    #[test]
    fn subject_url_carries_limit() {
        let client = crate::http::client::build_client().unwrap();
        let feed = OpenLibraryFeed::new(client, &CatalogConfig::default());
        let url = feed.subject_url("design").unwrap();
        assert_eq!(url.as_str(), "https://openlibrary.org/subjects/design.json?limit=5");
    }
}
