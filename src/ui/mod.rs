/// UI widgets for the two panes
///
/// - list.rs: one card per catalog entry with a "View Book" button
/// - detail.rs: cover, title, author and ISBN of the selection

pub mod list;
pub mod detail;

use iced::widget::container;
use iced::{Border, Color, Theme};

/// Plain white pane background
pub fn pane(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        ..container::Style::default()
    }
}

/// Backdrop behind both panes
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb(0.0, 1.0, 1.0).into()),
        ..container::Style::default()
    }
}

/// White card with a thin gray outline
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: Border {
            color: ISBN_COLOR,
            width: 1.0,
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Text colors for the title / author / ISBN hierarchy
pub const TITLE_COLOR: Color = Color::BLACK;
pub const AUTHOR_COLOR: Color = Color { r: 0.27, g: 0.27, b: 0.27, a: 1.0 };
pub const ISBN_COLOR: Color = Color { r: 0.53, g: 0.53, b: 0.53, a: 1.0 };
