pub mod client;
pub mod json_middleware;
pub mod logging_middleware;
