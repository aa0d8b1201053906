use crate::model::course::{Course, Lesson, Level};

#[allow(clippy::too_many_arguments)]
fn demo_course(
    id: u32,
    title: &str,
    instructor: &str,
    level: Level,
    rating: &str,
    description: &str,
    duration: &str,
    topics: &[&str],
    lessons: &[&str],
) -> Course {
    Course {
        id,
        title: title.to_string(),
        instructor: instructor.to_string(),
        level,
        rating: rating.to_string(),
        image: format!("https://source.unsplash.com/random/800x600/?education,{}", id),
        description: description.to_string(),
        duration: duration.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        lessons: lessons
            .iter()
            .enumerate()
            .map(|(index, title)| Lesson::new(index as u32 + 1, *title))
            .collect(),
    }
}

/// Catalog shown when neither public API answers.
pub fn demo_courses() -> Vec<Course> {
    vec![
        demo_course(
            1,
            "Web Development Bootcamp",
            "Sarah Johnson",
            Level::Beginner,
            "4.8",
            "Build responsive websites from scratch with HTML, CSS and JavaScript.",
            "8 weeks",
            &["HTML/CSS", "JavaScript", "React"],
            &[
                "Introduction to HTML",
                "Styling with CSS",
                "JavaScript Basics",
                "DOM Manipulation",
                "Your First React App",
            ],
        ),
        demo_course(
            2,
            "Data Science Fundamentals",
            "Michael Chen",
            Level::Intermediate,
            "4.6",
            "Analyze real datasets and communicate results with clear visualizations.",
            "10 weeks",
            &["Data Analysis", "Visualization", "Python"],
            &[
                "Working with DataFrames",
                "Cleaning Messy Data",
                "Exploratory Analysis",
                "Plotting and Charts",
                "Telling Stories with Data",
            ],
        ),
        demo_course(
            3,
            "Machine Learning in Practice",
            "Priya Patel",
            Level::Advanced,
            "4.9",
            "Train, evaluate and deploy models for classification and regression.",
            "12 weeks",
            &["Machine Learning", "Neural Networks", "Python"],
            &[
                "Supervised Learning",
                "Model Evaluation",
                "Feature Engineering",
                "Neural Network Basics",
                "Deploying Models",
            ],
        ),
        demo_course(
            4,
            "UI/UX Design Essentials",
            "Emma Rodriguez",
            Level::Beginner,
            "4.5",
            "Design interfaces people enjoy using, from research to prototype.",
            "6 weeks",
            &["UI Design", "UX Design", "Prototyping"],
            &[
                "Design Thinking",
                "User Research",
                "Wireframing",
                "Visual Hierarchy",
                "Interactive Prototypes",
            ],
        ),
        demo_course(
            5,
            "Backend APIs with Node.js",
            "David Kim",
            Level::Intermediate,
            "4.7",
            "Design and build REST APIs with authentication and persistence.",
            "9 weeks",
            &["Backend Development", "JavaScript", "API Integration"],
            &[
                "HTTP and REST",
                "Routing and Middleware",
                "Working with Databases",
                "Authentication",
                "Testing APIs",
            ],
        ),
        demo_course(
            6,
            "Algorithms and Data Structures",
            "Laura Martinez",
            Level::Advanced,
            "4.4",
            "Reason about complexity and implement the classic structures and algorithms.",
            "11 weeks",
            &["Algorithms", "Data Structures", "Software Engineering"],
            &[
                "Big-O Analysis",
                "Arrays and Linked Lists",
                "Trees and Graphs",
                "Sorting and Searching",
                "Dynamic Programming",
            ],
        ),
    ]
}
