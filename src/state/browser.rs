/// View-model for the two-pane browser
///
/// Owns the catalog, the current selection, and the cover shown in the
/// detail pane. Cover fetches are tagged with the generation they were
/// issued under; a completion is applied only while its generation is
/// still current, so a slow fetch for an older selection can never
/// overwrite the cover of a newer one.

use iced::widget::image::Handle;
use tracing::{debug, info};

use super::catalog::list_books;
use super::data::{Bitmap, Book};
use crate::cover::loader::CoverError;

/// Monotonic tag identifying one selection change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

/// Everything needed to launch the fetch for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub url: String,
}

/// Where the cover of the current selection stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing requested yet, placeholder on screen
    Idle,
    /// Request in flight for this generation
    Fetching(Generation),
    /// Cover of the current selection is on screen
    Loaded,
    /// Fetch for the current selection failed; previous image kept
    Failed(CoverError),
}

/// What happened to a finished fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Issued for an older selection, dropped
    Stale,
    Failed(CoverError),
}

/// The image buffer plus the renderer handle built from it
///
/// The handle is built once per cover so the renderer can keep the
/// uploaded texture across frames.
#[derive(Debug, Clone)]
struct Cover {
    bitmap: Bitmap,
    handle: Handle,
}

impl Cover {
    fn new(bitmap: Bitmap) -> Self {
        let handle = Handle::from_rgba(bitmap.width, bitmap.height, bitmap.pixels.clone());
        Self { bitmap, handle }
    }
}

/// Read-only projection of the detail pane
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub isbn: &'a str,
    pub cover: &'a Handle,
    pub phase: &'a FetchPhase,
}

pub struct Browser {
    books: Vec<Book>,
    current: Book,
    generation: Generation,
    phase: FetchPhase,
    cover: Cover,
}

impl Browser {
    /// Start on the first catalog entry with `placeholder` as its cover
    pub fn new(placeholder: Bitmap) -> Self {
        let books = list_books();
        let current = books[0].clone();

        Self {
            books,
            current,
            generation: Generation::default(),
            phase: FetchPhase::Idle,
            cover: Cover::new(placeholder),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn current(&self) -> &Book {
        &self.current
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    /// The bitmap currently shown in the detail pane
    pub fn cover(&self) -> &Bitmap {
        &self.cover.bitmap
    }

    /// Make `book` the selection and open a new fetch generation
    ///
    /// The text of the detail pane switches immediately. The returned ticket
    /// must be used to fetch the cover; re-selecting the current book still
    /// issues a fresh ticket.
    pub fn select_book(&mut self, book: Book) -> FetchTicket {
        info!(title = %book.title, "book selected");

        self.generation = self.generation.next();
        self.phase = FetchPhase::Fetching(self.generation);

        let ticket = FetchTicket {
            generation: self.generation,
            url: book.img_url.clone(),
        };
        self.current = book;
        ticket
    }

    /// Apply the outcome of the fetch issued under `generation`
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<Bitmap, CoverError>,
    ) -> Completion {
        if generation != self.generation {
            debug!(?generation, current = ?self.generation, "discarding stale cover");
            return Completion::Stale;
        }

        match result {
            Ok(bitmap) => {
                debug!(width = bitmap.width, height = bitmap.height, "cover loaded");
                self.cover = Cover::new(bitmap);
                self.phase = FetchPhase::Loaded;
                Completion::Applied
            }
            Err(err) => {
                self.phase = FetchPhase::Failed(err.clone());
                Completion::Failed(err)
            }
        }
    }

    pub fn detail(&self) -> DetailView<'_> {
        DetailView {
            title: &self.current.title,
            author: &self.current.author,
            isbn: &self.current.isbn,
            cover: &self.cover.handle,
            phase: &self.phase,
        }
    }
}
