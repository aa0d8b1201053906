use crate::core::catalog::{self, CourseFilter, PageItem};
use crate::core::session::{AppState, percent};
use crate::model::course::{Course, Lesson};
use crate::view::{pages, progress_bar};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTab {
    Overview,
    Curriculum,
    Instructor,
}

const LEARNING_OUTCOMES: [&str; 6] = [
    "In-depth understanding of core concepts",
    "Practical skills through hands-on exercises",
    "Industry best practices and techniques",
    "Problem-solving strategies",
    "Real-world implementation strategies",
    "Advanced topics for career advancement",
];

pub fn card(course: &Course) -> String {
    format!(
        "#{:<3} {}\n     {} | {} | {} stars | {} | {} lessons",
        course.id,
        course.title,
        course.instructor,
        course.level,
        course.rating,
        course.duration,
        course.lessons.len()
    )
}

pub fn home(state: &AppState, featured_count: usize) -> String {
    let mut lines = vec!["Welcome to EduLearn".to_string()];
    if let Some(user) = state.user() {
        lines.push(format!("Signed in as {}", user.name));
    }
    if let Some(notice) = state.notice() {
        lines.push(format!("! {}", notice));
    }
    lines.push(String::new());

    let featured = catalog::featured(state.courses(), featured_count);
    if featured.is_empty() {
        lines.push("No courses available right now.".to_string());
    } else {
        lines.push("Featured courses".to_string());
        lines.extend(featured.into_iter().map(card));
    }
    lines.join("\n")
}

pub fn pager(current: usize, total: usize) -> String {
    catalog::page_numbers(current, total)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(page) if page == current => format!("[{}]", page),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One page of the filtered course list, with the result count and pager.
pub fn list(courses: &[Course], filter: &CourseFilter, page: usize, per_page: usize) -> String {
    let filtered = catalog::filter_courses(courses, filter);
    let total_pages = catalog::total_pages(filtered.len(), per_page);
    let noun = if filtered.len() == 1 { "course" } else { "courses" };

    let mut lines = vec![format!("All Courses: {} {} found", filtered.len(), noun)];
    if filter.is_active() {
        let mut active = Vec::new();
        if !filter.search.trim().is_empty() {
            active.push(format!("search \"{}\"", filter.search.trim()));
        }
        if let Some(level) = filter.level {
            active.push(format!("level {}", level));
        }
        if let Some(topic) = &filter.topic {
            active.push(format!("topic {}", topic));
        }
        lines.push(format!("Filters: {}", active.join(", ")));
    }
    lines.push(String::new());

    if filtered.is_empty() || per_page == 0 {
        lines.push("No courses found. Try adjusting your search or filter criteria.".to_string());
        return lines.join("\n");
    }

    let page = page.clamp(1, total_pages);
    lines.extend(catalog::paginate(&filtered, page, per_page).iter().map(|c| card(c)));
    if total_pages > 1 {
        lines.push(String::new());
        lines.push(format!("Page {}", pager(page, total_pages)));
    }
    lines.join("\n")
}

fn lesson_line(lesson: &Lesson, enrolled: bool) -> String {
    let mark = match (enrolled, lesson.completed) {
        (false, _) => "   ",
        (true, true) => "[x]",
        (true, false) => "[ ]",
    };
    format!("  {} {}. {}", mark, lesson.id, lesson.title)
}

pub fn detail(state: &AppState, course_id: u32, tab: DetailTab) -> String {
    let Some(course) = state.course(course_id) else {
        return pages::not_found(&format!("course {}", course_id));
    };
    let enrolled = state.is_enrolled(course_id);
    let lessons = state.lessons_for(course_id).unwrap_or(&course.lessons);

    let mut lines = vec![
        course.title.clone(),
        format!(
            "{} | {} rating | {} | {}",
            course.level,
            course.rating,
            course.duration,
            if enrolled { "Enrolled" } else { "Not enrolled" }
        ),
        String::new(),
    ];

    match tab {
        DetailTab::Overview => {
            lines.push("Course Description".to_string());
            lines.push(course.description.clone());
            lines.push(String::new());
            lines.push("What you'll learn".to_string());
            lines.extend(LEARNING_OUTCOMES.iter().map(|item| format!("  - {}", item)));
            lines.push(String::new());
            lines.push(format!("Topics: {}", course.topics.join(", ")));
        }
        DetailTab::Curriculum => {
            lines.push(format!("Curriculum ({} lessons)", lessons.len()));
            lines.extend(lessons.iter().map(|lesson| lesson_line(lesson, enrolled)));
            if enrolled {
                let done = lessons.iter().filter(|l| l.completed).count();
                lines.push(String::new());
                lines.push(format!("Progress {}", progress_bar(percent(done, lessons.len()), 20)));
            } else {
                lines.push(String::new());
                lines.push("Enroll to track your progress.".to_string());
            }
        }
        DetailTab::Instructor => {
            lines.push(format!("Instructor: {}", course.instructor));
            lines.push(format!(
                "{} teaches {} and is rated {} by learners.",
                course.instructor,
                course.topics.join(", "),
                course.rating
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::demo_data::demo_courses;
    use crate::core::user_store::UserStore;
    use crate::model::catalog_response::CatalogResponse;

    #[test]
    fn list_shows_one_page_and_pager() {
        let courses = demo_courses();
        let text = list(&courses, &CourseFilter::default(), 2, 3);
        assert!(text.starts_with("All Courses: 6 courses found"));
        assert!(text.contains("#4"));
        assert!(!text.contains("#1 "));
        assert!(text.contains("Page 1 [2]"));
    }

    #[test]
    fn empty_result_suggests_reset() {
        let courses = demo_courses();
        let filter = CourseFilter { search: "quantum basket weaving".into(), ..Default::default() };
        assert!(list(&courses, &filter, 1, 3).contains("No courses found"));
    }

    #[test]
    fn zero_page_size_lists_nothing() {
        let courses = demo_courses();
        let text = list(&courses, &CourseFilter::default(), 1, 0);
        assert!(text.starts_with("All Courses: 6 courses found"));
        assert!(!text.contains("#1 "));
        assert!(!text.contains("Page "));
    }

    #[test]
    fn unknown_course_renders_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(
            CatalogResponse::demo(demo_courses()),
            UserStore::new(dir.path().join("user.json")),
        );
        assert!(detail(&state, 77, DetailTab::Overview).starts_with("404"));
        assert!(detail(&state, 1, DetailTab::Curriculum).contains("Enroll to track"));
    }
}
