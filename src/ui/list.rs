use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Element, Length};

use super::{card, AUTHOR_COLOR, ISBN_COLOR, TITLE_COLOR};
use crate::state::data::Book;
use crate::Message;

/// One catalog entry: title, author, ISBN and a button that selects it
pub fn book_row(book: &Book) -> Element<'_, Message> {
    let content = column![
        text(&book.title).size(16).color(TITLE_COLOR),
        text(&book.author).size(13).color(AUTHOR_COLOR),
        text(&book.isbn).size(9).color(ISBN_COLOR),
        button("View Book").on_press(Message::SelectBook(book.clone())),
    ]
    .spacing(10);

    container(content)
        .padding([8, 4])
        .width(Length::Fill)
        .style(card)
        .into()
}

/// Scrollable list of every book, in catalog order
pub fn book_list(books: &[Book]) -> Element<'_, Message> {
    let rows = Column::with_children(books.iter().map(book_row))
        .spacing(8)
        .padding([4, 10]);

    scrollable(rows).height(Length::Fill).into()
}
