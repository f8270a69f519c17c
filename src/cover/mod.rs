/// Cover image module
///
/// Fetches book covers over HTTP and decodes them for display.

pub mod loader;
