use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::course::{Course, Level};

const MAX_PAGE_BUTTONS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseFilter {
    pub search: String,
    pub level: Option<Level>,
    pub topic: Option<String>,
}

impl CourseFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.level.is_some() || self.topic.is_some()
    }

    pub fn clear(&mut self) {
        *self = CourseFilter::default();
    }

    pub fn matches(&self, course: &Course) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() && !matches_search(course, &search) {
            return false;
        }
        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }
        if let Some(topic) = &self.topic {
            if !course.topics.iter().any(|t| t == topic) {
                return false;
            }
        }
        true
    }
}

/// `needle` must already be lowercase.
fn matches_search(course: &Course, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
        || course.instructor.to_lowercase().contains(needle)
        || course.topics.iter().any(|t| t.to_lowercase().contains(needle))
}

pub fn filter_courses<'a>(courses: &'a [Course], filter: &CourseFilter) -> Vec<&'a Course> {
    courses.iter().filter(|course| filter.matches(course)).collect()
}

pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}

/// 1-based page slice; out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Buttons for a pager: every page when there are few, otherwise the first
/// and last page around a window of up to nine near `current`.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_PAGE_BUTTONS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut start = current.saturating_sub(4).max(2);
    let mut end = (current + 4).min(total - 1);
    if current <= 5 {
        end = (total - 1).min(9);
    } else if current >= total - 4 {
        start = total.saturating_sub(8).max(2);
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Distinct topics in first-seen order.
pub fn all_topics(courses: &[Course]) -> Vec<String> {
    let mut seen = HashSet::new();
    courses
        .iter()
        .flat_map(|course| course.topics.iter())
        .filter(|topic| seen.insert(topic.as_str()))
        .cloned()
        .collect()
}

/// Highest rated first; ties keep catalog order.
pub fn featured(courses: &[Course], count: usize) -> Vec<&Course> {
    let mut sorted: Vec<&Course> = courses.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating_value()
            .partial_cmp(&a.rating_value())
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(count);
    sorted
}
