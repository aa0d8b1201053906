use log::{info, warn};
use rand::Rng;
use reqwest_middleware::ClientWithMiddleware;

use crate::config::CatalogConfig;
use crate::core::generator;
use crate::core::provider::CourseFeed;
use crate::error::catalog::Result;
use crate::model::course::Course;
use crate::model::placeholder_post::PlaceholderPost;

const TITLE_CHARS: usize = 30;

/// Secondary feed: JSONPlaceholder posts dressed up as courses.
pub struct PlaceholderFeed {
    client: ClientWithMiddleware,
    posts_url: String,
    posts_limit: usize,
    lessons_per_course: u32,
}

impl PlaceholderFeed {
    pub fn new(client: ClientWithMiddleware, config: &CatalogConfig) -> Self {
        PlaceholderFeed {
            client,
            posts_url: format!("{}/posts", config.placeholder_url.trim_end_matches('/')),
            posts_limit: config.posts_limit,
            lessons_per_course: config.lessons_per_course,
        }
    }
}

#[async_trait::async_trait]
impl CourseFeed for PlaceholderFeed {
    fn name(&self) -> &str {
        "JSONPlaceholder"
    }

    async fn fetch(&self) -> Result<Vec<Course>> {
        let response = self.client.get(&self.posts_url).send().await?;
        let raw: Vec<serde_json::Value> = response.json().await?;

        let mut rng = rand::rng();
        let courses = normalize_posts(&mut rng, &raw, self.posts_limit, self.lessons_per_course);
        info!("JSONPlaceholder produced {} courses", courses.len());
        Ok(courses)
    }
}

/// Category used to pick topics for the post at `index`.
pub fn category_for_index(index: usize) -> &'static str {
    if index % 5 == 0 {
        "Programming"
    } else if index % 4 == 0 {
        "Data"
    } else if index % 3 == 0 {
        "Education"
    } else if index % 2 == 0 {
        "Development"
    } else {
        "Design"
    }
}

pub fn course_title(post_title: &str) -> String {
    let head: String = post_title.chars().take(TITLE_CHARS).collect();
    format!("Course: {}...", head)
}

pub fn normalize_posts<R: Rng + ?Sized>(
    rng: &mut R,
    raw: &[serde_json::Value],
    limit: usize,
    lessons_per_course: u32,
) -> Vec<Course> {
    raw.iter()
        .filter_map(|value| match serde_json::from_value::<PlaceholderPost>(value.clone()) {
            Ok(post) => Some(post),
            Err(err) => {
                warn!("dropping malformed post: {}", err);
                None
            }
        })
        .take(limit)
        .enumerate()
        .map(|(index, post)| post_to_course(&mut *rng, index, &post, lessons_per_course))
        .collect()
}

pub fn post_to_course<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    post: &PlaceholderPost,
    lessons_per_course: u32,
) -> Course {
    Course {
        id: index as u32 + 1,
        title: course_title(&post.title),
        instructor: format!("Instructor {}", post.user_id),
        level: generator::random_level(rng),
        rating: generator::random_rating(rng),
        image: format!("https://source.unsplash.com/random/800x600/?education,{}", index),
        description: post.body.clone(),
        duration: generator::random_duration(rng),
        lessons: generator::generate_lessons(rng, &format!("Module {}", index + 1), lessons_per_course),
        topics: generator::generate_topics(rng, category_for_index(index)),
    }
}
