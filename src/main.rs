use anyhow::Context;
use log::error;

use edulearn::config::CatalogConfig;
use edulearn::core::catalog::{self, CourseFilter};
use edulearn::core::demo_data::demo_courses;
use edulearn::core::provider::CourseProvider;
use edulearn::core::session::AppState;
use edulearn::core::user_store::UserStore;
use edulearn::error::catalog::ErrorKind;
use edulearn::http::client::build_client;
use edulearn::model::course::Level;
use edulearn::utils::input::{input, input_number, input_optional};
use edulearn::view::courses::{self, DetailTab};
use edulearn::view::{dashboard, pages};

const MENU: &str = "\
[h] home  [c] courses  [f] filter  [n] next page  [p] previous page
[d] course detail  [e] enroll  [t] toggle lesson  [b] dashboard
[l] login  [o] logout  [a] about  [m] contact  [q] quit";

struct Browser {
    filter: CourseFilter,
    page: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = CatalogConfig::from_env();
    let client = build_client().context("building HTTP client")?;
    let provider = CourseProvider::public_apis(client, &config);
    let fallback = demo_courses();

    println!("Loading courses...");
    let mut state = AppState::load(&provider, UserStore::new(&config.user_file), Some(fallback.as_slice())).await;
    println!("{}\n", courses::home(&state, config.featured_count));

    let mut browser = Browser {
        filter: CourseFilter::default(),
        page: 1,
    };

    loop {
        println!("\n{}", MENU);
        let choice = input(">")?;
        let output = match choice.as_str() {
            "h" => courses::home(&state, config.featured_count),
            "c" => {
                browser.page = 1;
                courses::list(state.courses(), &browser.filter, browser.page, config.page_size)
            }
            "f" => {
                browser.filter = read_filter(&state)?;
                browser.page = 1;
                courses::list(state.courses(), &browser.filter, browser.page, config.page_size)
            }
            "n" | "p" => {
                let count = catalog::filter_courses(state.courses(), &browser.filter).len();
                let page_count = catalog::total_pages(count, config.page_size).max(1);
                browser.page = if choice == "n" {
                    (browser.page + 1).min(page_count)
                } else {
                    browser.page.saturating_sub(1).max(1)
                };
                courses::list(state.courses(), &browser.filter, browser.page, config.page_size)
            }
            "d" => match input_number("Course id:")? {
                Some(id) => courses::detail(&state, id, read_tab()?),
                None => pages::not_found("course"),
            },
            "e" => enroll(&mut state)?,
            "t" => toggle(&mut state)?,
            "b" => match state.user() {
                Some(user) => dashboard::render(user, &state.dashboard()),
                None => "Log in to see your dashboard.".to_string(),
            },
            "l" => {
                let name = input("Name:")?;
                let email = input("Email:")?;
                match state.login(&name, &email) {
                    Ok(user) => format!("Welcome, {}!", user.name),
                    Err(err) => failure(err),
                }
            }
            "o" => match state.logout() {
                Ok(()) => "Logged out.".to_string(),
                Err(err) => failure(err),
            },
            "a" => pages::about(),
            "m" => pages::contact(),
            "q" | "" => break,
            other => format!("Unknown command: {}", other),
        };
        println!("\n{}", output);
    }

    Ok(())
}

fn failure(err: edulearn::error::catalog::CatalogError) -> String {
    error!("{}", err);
    format!("Error: {}", err.message)
}

fn read_filter(state: &AppState) -> anyhow::Result<CourseFilter> {
    let search = input("Search (title, description, instructor, topic):")?;
    let level = match input_optional("Level (Beginner/Intermediate/Advanced, empty for all):")? {
        Some(raw) => match raw.parse::<Level>() {
            Ok(level) => Some(level),
            Err(err) => {
                println!("{}, showing all levels", err);
                None
            }
        },
        None => None,
    };
    println!("Topics: {}", catalog::all_topics(state.courses()).join(", "));
    let topic = input_optional("Topic (empty for all):")?;
    Ok(CourseFilter { search, level, topic })
}

fn read_tab() -> anyhow::Result<DetailTab> {
    Ok(match input("Tab ([o]verview, [c]urriculum, [i]nstructor):")?.as_str() {
        "c" => DetailTab::Curriculum,
        "i" => DetailTab::Instructor,
        _ => DetailTab::Overview,
    })
}

fn enroll(state: &mut AppState) -> anyhow::Result<String> {
    let Some(id) = input_number("Course id:")? else {
        return Ok(pages::not_found("course"));
    };
    let result = if state.user().is_some() {
        state.enroll(id)
    } else {
        println!("Enroll in this course: tell us who you are.");
        let name = input("Name:")?;
        let email = input("Email:")?;
        state.enroll_as(&name, &email, id)
    };
    Ok(match result {
        Ok(()) => courses::detail(state, id, DetailTab::Curriculum),
        Err(err) if err.kind == ErrorKind::NotFound => pages::not_found(&format!("course {}", id)),
        Err(err) => failure(err),
    })
}

fn toggle(state: &mut AppState) -> anyhow::Result<String> {
    let (Some(course_id), Some(lesson_id)) = (input_number("Course id:")?, input_number("Lesson id:")?) else {
        return Ok("Both a course id and a lesson id are needed.".to_string());
    };
    Ok(match state.toggle_lesson(course_id, lesson_id) {
        Ok(completed) => format!(
            "Lesson {} marked {}.\n\n{}",
            lesson_id,
            if completed { "complete" } else { "incomplete" },
            courses::detail(state, course_id, DetailTab::Curriculum)
        ),
        Err(err) => failure(err),
    })
}
