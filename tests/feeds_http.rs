use std::net::SocketAddr;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use edulearn::config::CatalogConfig;
use edulearn::core::generator::topics_for_category;
use edulearn::core::open_library::{OpenLibraryFeed, placeholder_image};
use edulearn::core::placeholder::PlaceholderFeed;
use edulearn::core::provider::{CourseFeed, CourseProvider};
use edulearn::http::client::build_client;
use edulearn::model::catalog_response::CourseSource;

const COVERS: &str = "https://covers.example.org";

fn route(path: &str) -> (&'static str, &'static str, String) {
    match path {
        "/subjects/broken.json" => (
            "500 Internal Server Error",
            "text/plain",
            "upstream exploded".to_string(),
        ),
        "/subjects/web_page.json" | "/html/posts" => (
            "200 OK",
            "text/html; charset=utf-8",
            "<html><body>maintenance</body></html>".to_string(),
        ),
        "/subjects/empty.json" => (
            "200 OK",
            "application/json",
            json!({ "name": "empty", "work_count": 0 }).to_string(),
        ),
        "/subjects/design.json" => (
            "200 OK",
            "application/json",
            json!({
                "name": "design",
                "works": [
                    {
                        "title": "Don't Make Me Think",
                        "authors": [{ "key": "/authors/OL1A", "name": "Steve Krug" }],
                        "cover_id": 123
                    },
                    { "cover_id": 9 },
                    { "title": "Color Basics", "cover_id": "n/a" }
                ]
            })
            .to_string(),
        ),
        "/posts" => (
            "200 OK",
            "application/json; charset=utf-8",
            json!([
                { "userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit" },
                { "id": 2 },
                { "userId": 2, "id": 3, "title": "qui est esse", "body": "est rerum tempore" }
            ])
            .to_string(),
        ),
        _ => ("404 Not Found", "text/plain", "not found".to_string()),
    }
}

/// Minimal HTTP/1.1 server answering one request per connection.
async fn serve() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let head = String::from_utf8_lossy(&buf[..read]);
                let target = head.split_whitespace().nth(1).unwrap_or("/");
                let path = target.split('?').next().unwrap_or("/");
                let (status, content_type, body) = route(path);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    content_type,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn config(addr: SocketAddr, subjects: &[&str]) -> CatalogConfig {
    CatalogConfig {
        open_library_url: format!("http://{}/subjects", addr),
        covers_url: COVERS.to_string(),
        placeholder_url: format!("http://{}", addr),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        subjects_per_fetch: subjects.len(),
        ..CatalogConfig::default()
    }
}

#[tokio::test]
async fn only_healthy_subjects_become_courses() {
    let addr = serve().await;
    let config = config(addr, &["broken", "design", "web_page", "empty"]);
    let feed = OpenLibraryFeed::new(build_client().unwrap(), &config);

    let courses = feed.fetch().await.unwrap();

    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Don't Make Me Think", "Color Basics"]);
    let ids: Vec<u32> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);

    assert_eq!(courses[0].instructor, "Steve Krug");
    assert_eq!(courses[0].image, format!("{}/b/id/123-L.jpg", COVERS));
    assert_eq!(courses[1].image, placeholder_image("design"));
    for course in &courses {
        assert_eq!(course.lessons.len(), config.lessons_per_course as usize);
        assert!(course.topics.iter().all(|t| topics_for_category("design").contains(&t.as_str())));
    }
}

#[tokio::test]
async fn placeholder_posts_become_courses() {
    let addr = serve().await;
    let feed = PlaceholderFeed::new(build_client().unwrap(), &config(addr, &[]));

    let courses = feed.fetch().await.unwrap();

    let ids: Vec<u32> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(courses[0].title, "Course: sunt aut facere...");
    assert_eq!(courses[1].instructor, "Instructor 2");
}

#[tokio::test]
async fn html_posts_page_is_a_feed_error() {
    let addr = serve().await;
    let config = CatalogConfig {
        placeholder_url: format!("http://{}/html", addr),
        ..config(addr, &[])
    };
    let feed = PlaceholderFeed::new(build_client().unwrap(), &config);

    assert!(feed.fetch().await.is_err());
}

#[tokio::test]
async fn unusable_subjects_fall_through_to_posts() {
    let addr = serve().await;
    let config = config(addr, &["broken", "web_page", "empty"]);
    let provider = CourseProvider::public_apis(build_client().unwrap(), &config);

    let response = provider.get_courses_with_fallback(None).await;

    assert_eq!(response.source, CourseSource::Secondary);
    assert!(!response.is_demo);
    assert_eq!(response.data.len(), 2);
}
