/// State management module
///
/// This module handles all application state, including:
/// - The book record and image buffer types (data.rs)
/// - The fixed catalog (catalog.rs)
/// - Selection and cover refresh for the detail pane (browser.rs)

pub mod data;
pub mod catalog;
pub mod browser;
