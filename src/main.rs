use iced::widget::{container, row};
use iced::{Element, Length, Size, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod cover;
mod state;
mod ui;

use config::Settings;
use cover::loader::{load_cover, CoverError};
use state::browser::{Browser, Completion, FetchTicket, Generation};
use state::data::{Bitmap, Book};

/// Main application state
struct BookBrowser {
    /// Catalog, selection and cover of the detail pane
    browser: Browser,
    /// Shared client for cover downloads
    client: reqwest::Client,
    settings: Settings,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User pressed "View Book" on a list entry
    SelectBook(Book),
    /// Background cover fetch finished for the given generation
    CoverLoaded(Generation, Result<Bitmap, CoverError>),
}

impl BookBrowser {
    /// Create the app on the first book and start fetching its cover
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let client = settings.http_client().unwrap_or_else(|err| {
            warn!("Falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        });

        let mut browser = Browser::new(Bitmap::blank(settings.placeholder_size));
        info!(books = browser.books().len(), "Book browser initialized");

        let first = browser.current().clone();
        let ticket = browser.select_book(first);

        let app = BookBrowser {
            browser,
            client,
            settings,
        };
        let task = app.fetch_cover(ticket);

        (app, task)
    }

    /// Launch the cover download for `ticket` in the background
    fn fetch_cover(&self, ticket: FetchTicket) -> Task<Message> {
        let FetchTicket { generation, url } = ticket;
        debug!(?generation, %url, "Loading cover");

        Task::perform(load_cover(self.client.clone(), url), move |result| {
            Message::CoverLoaded(generation, result)
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectBook(book) => {
                let ticket = self.browser.select_book(book);
                debug!(phase = ?self.browser.phase(), "Selection changed");
                self.fetch_cover(ticket)
            }
            Message::CoverLoaded(generation, result) => {
                match self.browser.complete(generation, result) {
                    Completion::Applied => {
                        let cover = self.browser.cover();
                        info!(
                            title = %self.browser.current().title,
                            "Cover ready ({}x{})", cover.width, cover.height
                        );
                    }
                    Completion::Stale => {}
                    // The pane keeps whatever image it had
                    Completion::Failed(err) => {
                        let book = self.browser.current();
                        warn!(title = %book.title, url = %book.img_url, "Cover unavailable: {}", err);
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let list = container(ui::list::book_list(self.browser.books()))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(ui::pane);

        let detail = container(ui::detail::book_detail(self.browser.detail()))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(ui::pane);

        container(row![list, detail])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::backdrop)
            .into()
    }

    fn title(&self) -> String {
        self.settings.window_title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default of info-level output for this crate.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=info")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let settings = Settings::default();
    let (width, height) = settings.window_size;

    iced::application(BookBrowser::title, BookBrowser::update, BookBrowser::view)
        .theme(BookBrowser::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || BookBrowser::new(settings))
}
