use crate::core::session::Dashboard;
use crate::model::user::User;
use crate::view::progress_bar;

pub fn render(user: &User, dashboard: &Dashboard) -> String {
    let mut lines = vec![
        format!("Welcome back, {}!", user.name),
        format!("Email: {}", user.email),
        String::new(),
        format!("Enrolled courses:  {}", dashboard.courses.len()),
        format!("Completed courses: {}", dashboard.completed_courses),
        format!("Overall progress:  {}", progress_bar(dashboard.overall_percent, 20)),
        String::new(),
    ];

    if dashboard.courses.is_empty() {
        lines.push("You haven't enrolled in any courses yet.".to_string());
        return lines.join("\n");
    }

    for progress in &dashboard.courses {
        let status = if progress.is_complete() { " (completed)" } else { "" };
        lines.push(format!(
            "#{} {}{}\n    {} {}/{} lessons",
            progress.course.id,
            progress.course.title,
            status,
            progress_bar(progress.percent, 20),
            progress.completed_lessons,
            progress.total_lessons
        ));
    }
    lines.join("\n")
}
