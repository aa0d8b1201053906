//! Text rendering of the application's pages. Every view is a pure
//! function returning the text to print.

pub mod courses;
pub mod dashboard;
pub mod pages;

pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}] {:>3}%", "#".repeat(filled), "-".repeat(width - filled), percent)
}
