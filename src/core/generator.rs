use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::model::course::{Lesson, Level};

const LESSON_PREFIXES: [&str; 8] = [
    "Introduction to",
    "Fundamentals of",
    "Advanced",
    "Mastering",
    "Practical",
    "Essential",
    "Deep Dive into",
    "Understanding",
];

const GENERIC_TOPICS: [&str; 4] = [
    "Course Fundamentals",
    "Practical Skills",
    "Industry Applications",
    "Career Development",
];

/// Topic table per subject (primary feed) or category (secondary feed).
pub fn topics_for_category(category: &str) -> &'static [&'static str] {
    match category {
        "programming" => &["JavaScript", "Python", "Algorithms", "Software Engineering"],
        "computer_science" => &["Data Structures", "Algorithms", "System Design", "Theory"],
        "web_development" => &["HTML/CSS", "JavaScript", "React", "Backend Development"],
        "data_science" => &["Data Analysis", "Visualization", "Big Data", "Machine Learning"],
        "machine_learning" => &["Neural Networks", "Deep Learning", "NLP", "Computer Vision"],
        "design" => &["UI Design", "UX Design", "Design Thinking", "Prototyping"],
        "Development" => &["Programming", "Web Development", "API Integration", "Cloud Services"],
        "Data" => &["Data Analysis", "Visualization", "Big Data", "Machine Learning"],
        "Education" => &["Learning", "Teaching", "Assessment", "Curriculum Design"],
        "Science" => &["Research", "Experimentation", "Scientific Method", "Analysis"],
        "Programming" => &["Coding", "Algorithms", "Data Structures", "Software Engineering"],
        _ => &GENERIC_TOPICS,
    }
}

pub fn random_level<R: Rng + ?Sized>(rng: &mut R) -> Level {
    Level::ALL[rng.random_range(0..Level::ALL.len())]
}

/// 4.0 to 5.0, one decimal.
pub fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:.1}", 4.0 + rng.random::<f64>())
}

pub fn random_duration<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} weeks", rng.random_range(4..=13))
}

pub fn generate_lessons<R: Rng + ?Sized>(rng: &mut R, course_title: &str, count: u32) -> Vec<Lesson> {
    (1..=count)
        .map(|part| {
            let prefix = LESSON_PREFIXES.choose(&mut *rng).copied().unwrap_or("Understanding");
            Lesson::new(part, format!("{} {} - Part {}", prefix, course_title, part))
        })
        .collect()
}

/// Two to four distinct topics from the category's table.
pub fn generate_topics<R: Rng + ?Sized>(rng: &mut R, category: &str) -> Vec<String> {
    let mut topics: Vec<&str> = topics_for_category(category).to_vec();
    topics.shuffle(rng);
    let count = rng.random_range(2..=4).min(topics.len());
    topics.into_iter().take(count).map(str::to_string).collect()
}
