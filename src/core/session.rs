use log::{info, warn};

use crate::core::provider::CourseProvider;
use crate::core::user_store::UserStore;
use crate::error::catalog::{CatalogError, ErrorKind, Result};
use crate::model::catalog_response::{CatalogResponse, CourseSource};
use crate::model::course::{Course, Lesson};
use crate::model::user::User;

pub const DEMO_NOTICE: &str = "Using demo data: the course APIs could not be reached.";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load courses.";

/// Everything the views read: the catalog of one session and the demo user.
pub struct AppState {
    courses: Vec<Course>,
    source: CourseSource,
    notice: Option<String>,
    user: Option<User>,
    store: UserStore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseProgress {
    pub course: Course,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    pub percent: u32,
}

impl CourseProgress {
    pub fn is_complete(&self) -> bool {
        self.total_lessons > 0 && self.completed_lessons == self.total_lessons
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub courses: Vec<CourseProgress>,
    pub overall_percent: u32,
    pub completed_courses: usize,
}

pub fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}

impl AppState {
    pub fn new(catalog: CatalogResponse, store: UserStore) -> Self {
        let notice = match (&catalog.source, &catalog.error) {
            (CourseSource::Error, Some(message)) => Some(format!("{} {}", LOAD_FAILED_NOTICE, message)),
            (CourseSource::Error, None) => Some(LOAD_FAILED_NOTICE.to_string()),
            _ if catalog.is_demo => Some(DEMO_NOTICE.to_string()),
            _ => None,
        };
        let user = store.load();
        if let Some(user) = &user {
            info!("restored session for {}", user.email);
        }
        AppState {
            courses: catalog.data,
            source: catalog.source,
            notice,
            user,
            store,
        }
    }

    /// Fetches the catalog through the fallback chain and restores the
    /// saved user.
    pub async fn load(provider: &CourseProvider, store: UserStore, fallback: Option<&[Course]>) -> Self {
        let catalog = provider.get_courses_with_fallback(fallback).await;
        info!("catalog source: {} ({} courses)", catalog.source.as_str(), catalog.data.len());
        AppState::new(catalog, store)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn source(&self) -> CourseSource {
        self.source
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn is_enrolled(&self, course_id: u32) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_enrolled(course_id))
    }

    /// The user's snapshot when enrolled, the course's own lessons otherwise.
    pub fn lessons_for(&self, course_id: u32) -> Option<&[Lesson]> {
        let course = self.course(course_id)?;
        let snapshot = self
            .user
            .as_ref()
            .filter(|user| user.is_enrolled(course_id))
            .and_then(|user| user.progress.get(&course_id));
        Some(snapshot.map(Vec::as_slice).unwrap_or(&course.lessons))
    }

    pub fn login(&mut self, name: &str, email: &str) -> Result<&User> {
        let user = User::new(name.trim(), email.trim());
        self.store.save(&user)?;
        info!("logged in as {}", user.email);
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            info!("logged out {}", user.email);
        }
        self.store.clear()
    }

    /// Changes are saved before they replace the in-memory user, so a failed
    /// save leaves the session untouched.
    pub fn enroll(&mut self, course_id: u32) -> Result<()> {
        let lessons = self
            .course(course_id)
            .ok_or_else(|| CatalogError::not_found("course", course_id))?
            .blank_lessons();
        let user = self
            .user
            .as_ref()
            .ok_or_else(|| CatalogError::new(ErrorKind::NotLoggedIn, "log in to enroll"))?;

        if user.is_enrolled(course_id) {
            return Ok(());
        }
        let mut updated = user.clone();
        updated.enrolled_courses.push(course_id);
        updated.progress.insert(course_id, lessons);
        self.store.save(&updated)?;
        info!("{} enrolled in course {}", updated.email, course_id);
        self.user = Some(updated);
        Ok(())
    }

    /// Enrollment from a logged-out state: creates the account first.
    pub fn enroll_as(&mut self, name: &str, email: &str, course_id: u32) -> Result<()> {
        if self.course(course_id).is_none() {
            return Err(CatalogError::not_found("course", course_id));
        }
        if self.user.is_none() {
            self.login(name, email)?;
        }
        self.enroll(course_id)
    }

    /// Flips one lesson and returns its new state.
    pub fn toggle_lesson(&mut self, course_id: u32, lesson_id: u32) -> Result<bool> {
        let course_lessons = self
            .course(course_id)
            .ok_or_else(|| CatalogError::not_found("course", course_id))?
            .blank_lessons();
        let mut updated = self
            .user
            .as_ref()
            .filter(|user| user.is_enrolled(course_id))
            .ok_or_else(|| {
                CatalogError::new(
                    ErrorKind::NotEnrolled,
                    &format!("not enrolled in course {}", course_id),
                )
            })?
            .clone();

        let lessons = updated.progress.entry(course_id).or_insert_with(|| {
            warn!("missing progress for course {}, reseeding", course_id);
            course_lessons
        });
        let lesson = lessons
            .iter_mut()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| CatalogError::not_found("lesson", lesson_id))?;
        lesson.completed = !lesson.completed;
        let completed = lesson.completed;

        self.store.save(&updated)?;
        self.user = Some(updated);
        Ok(completed)
    }

    pub fn dashboard(&self) -> Dashboard {
        let Some(user) = &self.user else {
            return Dashboard {
                courses: Vec::new(),
                overall_percent: 0,
                completed_courses: 0,
            };
        };

        let courses: Vec<CourseProgress> = self
            .courses
            .iter()
            .filter(|course| user.is_enrolled(course.id))
            .map(|course| {
                let lessons = user
                    .progress
                    .get(&course.id)
                    .cloned()
                    .unwrap_or_else(|| course.lessons.clone());
                let completed_lessons = lessons.iter().filter(|l| l.completed).count();
                let total_lessons = lessons.len();
                CourseProgress {
                    course: Course { lessons, ..course.clone() },
                    completed_lessons,
                    total_lessons,
                    percent: percent(completed_lessons, total_lessons),
                }
            })
            .collect();

        let done: usize = courses.iter().map(|c| c.completed_lessons).sum();
        let total: usize = courses.iter().map(|c| c.total_lessons).sum();
        let completed_courses = courses.iter().filter(|c| c.is_complete()).count();

        Dashboard {
            overall_percent: percent(done, total),
            completed_courses,
            courses,
        }
    }
}
