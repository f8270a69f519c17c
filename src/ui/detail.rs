use iced::widget::image::Handle;
use iced::widget::{column, container, text, Image};
use iced::{Alignment, Element, Length};

use super::{AUTHOR_COLOR, ISBN_COLOR, TITLE_COLOR};
use crate::state::browser::{DetailView, FetchPhase};
use crate::Message;

/// Detail pane for the current selection
///
/// Text comes straight from the selection, so it is correct even while the
/// cover is still downloading.
pub fn book_detail(view: DetailView<'_>) -> Element<'_, Message> {
    let cover = Image::<Handle>::new(view.cover.clone())
        .width(Length::Fill)
        .height(Length::Fill);

    let info = column![
        text(view.title).size(16).color(TITLE_COLOR),
        text(view.author).size(13).color(AUTHOR_COLOR),
        text(view.isbn).size(9).color(ISBN_COLOR),
    ]
    .spacing(10)
    .padding(5);

    column![container(cover).center_x(Length::Fill).height(Length::FillPortion(2))]
        .push_maybe(status_caption(view.phase))
        .push(container(info).height(Length::FillPortion(3)))
        .align_x(Alignment::Start)
        .into()
}

/// Small note under the cover while it is loading or after it failed
fn status_caption(phase: &FetchPhase) -> Option<Element<'_, Message>> {
    let caption = match phase {
        FetchPhase::Fetching(_) => "Loading cover...",
        FetchPhase::Failed(_) => "Cover unavailable",
        FetchPhase::Idle | FetchPhase::Loaded => return None,
    };

    Some(
        container(text(caption).size(11).color(ISBN_COLOR))
            .center_x(Length::Fill)
            .into(),
    )
}
