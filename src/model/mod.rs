pub mod catalog_response;
pub mod course;
pub mod open_library;
pub mod placeholder_post;
pub mod user;
