/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the view-model and the UI layer.

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Full title as shown in the list and detail panes
    pub title: String,
    /// Author line, verbatim
    pub author: String,
    /// ISBN-10 as printed on the book (not validated)
    pub isbn: String,
    /// Where the cover image is downloaded from
    pub img_url: String,
    /// Store link. Carried with the record but never rendered.
    #[allow(dead_code)]
    pub purchase_link: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        img_url: impl Into<String>,
        purchase_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            img_url: img_url.into(),
            purchase_link: purchase_link.into(),
        }
    }
}

/// A decoded RGBA8 image held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Fully transparent square shown until a cover arrives
    pub fn blank(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            pixels: vec![0; (size as usize) * (size as usize) * 4],
        }
    }
}
