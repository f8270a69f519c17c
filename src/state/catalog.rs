/// The fixed book catalog
///
/// Five records, built from a literal table every time they are requested.
/// Nothing is loaded from disk or network.
use super::data::Book;

/// (title, author, isbn, cover url, purchase link)
const CATALOG: [(&str, &str, &str, &str, &str); 5] = [
    (
        "The Clean Code",
        "Robert C Martin",
        "813178696X",
        "https://images-na.ssl-images-amazon.com/images/I/81VctvTDc6L.jpg",
        "",
    ),
    (
        "PYTHON CRASH COURSE E02: A Hands-On, Project-Based Introduction to Programming",
        "Eric Matthes",
        "1593279280",
        "https://images-na.ssl-images-amazon.com/images/I/71NUZ+rHN2L.jpg",
        "",
    ),
    (
        "Head First Design Patterns: Building Extensible and Maintainable Object-Oriented Software, Second Edition",
        " Eric Freeman and Elisabeth Robson",
        "9385889753",
        "https://images-na.ssl-images-amazon.com/images/I/71SdDjMglAL.jpg",
        "",
    ),
    (
        "Design Patterns",
        "Erich Gamma",
        "9332555400",
        "https://images-na.ssl-images-amazon.com/images/I/81snQYegu6L.jpg",
        "",
    ),
    (
        "Node.js Design Patterns: Design and implement production-grade Node.js applications using proven patterns and techniques, 3rd Edition",
        "Mario Casciaro and Luciano Mammino",
        "1785885588",
        "https://images-na.ssl-images-amazon.com/images/I/61hYzdT5WtL.jpg",
        "",
    ),
];

/// Get every book in the catalog, in catalog order
pub fn list_books() -> Vec<Book> {
    CATALOG
        .iter()
        .map(|&(title, author, isbn, img_url, purchase_link)| {
            Book::new(title, author, isbn, img_url, purchase_link)
        })
        .collect()
}
