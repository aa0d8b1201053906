pub mod catalog;
pub mod demo_data;
pub mod generator;
pub mod open_library;
pub mod placeholder;
pub mod provider;
pub mod session;
pub mod user_store;
