//! Markup listings for the current state of a preview
//!
//! Field values are inserted verbatim; user input is not escaped.

use std::fmt::Write;

use crate::preview::{table_cells, Choice, Preview};

impl Preview {
    /// HTML source equivalent to what the live preview renders
    pub fn markup(&self) -> String {
        match self {
            Preview::Heading { level, text } => {
                let tag = level.tag();
                format!("<{tag}>{text}</{tag}>")
            }
            Preview::Paragraph { text } => format!("<p>{text}</p>"),
            Preview::Table { rows, cols, border } => {
                let mut out = format!("<table border=\"{border}\">\n");
                for row in table_cells(*rows, *cols) {
                    out.push_str("  <tr>\n");
                    for cell in row {
                        let _ = writeln!(out, "    <td>{cell}</td>");
                    }
                    out.push_str("  </tr>\n");
                }
                out.push_str("</table>");
                out
            }
            Preview::Image {
                src,
                alt,
                width,
                height,
            } => format!(
                "<img src=\"{src}\" alt=\"{alt}\" width=\"{width}\" height=\"{height}\">"
            ),
            Preview::Link { href, target, text } => format!(
                "<a href=\"{href}\" target=\"{}\">{text}</a>",
                target.as_str()
            ),
            Preview::List { items, marker } => format!(
                "<ul style=\"list-style-type: {}\">\n{}</ul>",
                marker.as_str(),
                plain_items(items, "  ")
            ),
            Preview::Form {
                action,
                method,
                input_type,
                input_name,
                button_text,
            } => format!(
                "<form action=\"{action}\" method=\"{}\">\n  <input type=\"{}\" name=\"{input_name}\">\n  <button type=\"submit\">{button_text}</button>\n</form>",
                method.as_str(),
                input_type.as_str()
            ),
            Preview::Header { title, nav_items } => format!(
                "<header>\n  <h1>{title}</h1>\n  <nav>\n    <ul>\n{}    </ul>\n  </nav>\n</header>",
                link_items(nav_items, "      ")
            ),
            Preview::Nav { items } => format!(
                "<nav>\n  <ul>\n{}  </ul>\n</nav>",
                link_items(items, "    ")
            ),
            Preview::Main { heading, content } => {
                format!("<main>\n  <h1>{heading}</h1>\n  <p>{content}</p>\n</main>")
            }
            Preview::Section { heading, content } => {
                format!("<section>\n  <h2>{heading}</h2>\n  <p>{content}</p>\n</section>")
            }
            Preview::Article { title, content } => {
                format!("<article>\n  <h2>{title}</h2>\n  <p>{content}</p>\n</article>")
            }
            Preview::Aside { title, links } => format!(
                "<aside>\n  <h3>{title}</h3>\n  <ul>\n{}  </ul>\n</aside>",
                link_items(links, "    ")
            ),
            Preview::Footer { copyright, contact } => {
                format!("<footer>\n  <p>{copyright}</p>\n  <p>{contact}</p>\n</footer>")
            }
            Preview::Practice {
                title,
                heading,
                paragraph,
            } => format!(
                "<!DOCTYPE html>\n<html>\n<head>\n  <title>{title}</title>\n</head>\n<body>\n  <h1>{heading}</h1>\n  <p>{paragraph}</p>\n</body>\n</html>"
            ),
        }
    }
}

fn plain_items(items: &[String], indent: &str) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "{indent}<li>{item}</li>");
        out
    })
}

fn link_items(items: &[String], indent: &str) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "{indent}<li><a href=\"#\">{item}</a></li>");
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{FieldValue, HeadingLevel, ListMarker};

    #[test]
    fn test_heading_uses_level_tag() {
        let preview = Preview::Heading {
            level: HeadingLevel::H2,
            text: "Раздел".into(),
        };
        assert_eq!(preview.markup(), "<h2>Раздел</h2>");
    }

    #[test]
    fn test_table_markup_follows_counts() {
        let mut preview = Preview::Table {
            rows: 1,
            cols: 2,
            border: 1,
        };
        assert_eq!(
            preview.markup(),
            "<table border=\"1\">\n  <tr>\n    <td>Ячейка 1-1</td>\n    <td>Ячейка 1-2</td>\n  </tr>\n</table>"
        );

        preview.set("rows", FieldValue::Number(0)).unwrap();
        assert_eq!(preview.markup(), "<table border=\"1\">\n</table>");
    }

    #[test]
    fn test_list_markup_includes_marker() {
        let preview = Preview::List {
            items: vec!["Пункт 1".into(), "Пункт 2".into()],
            marker: ListMarker::Square,
        };
        assert_eq!(
            preview.markup(),
            "<ul style=\"list-style-type: square\">\n  <li>Пункт 1</li>\n  <li>Пункт 2</li>\n</ul>"
        );
    }

    #[test]
    fn test_practice_listing_tracks_fields() {
        let mut preview = Preview::Practice {
            title: "Моя первая страница".into(),
            heading: "Привет, мир!".into(),
            paragraph: "Это моя первая веб-страница.".into(),
        };
        preview.set("heading", "Здравствуйте".into()).unwrap();
        let markup = preview.markup();
        assert!(markup.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(markup.contains("  <title>Моя первая страница</title>\n"));
        assert!(markup.contains("  <h1>Здравствуйте</h1>\n"));
        assert!(markup.contains("  <p>Это моя первая веб-страница.</p>\n"));
    }

    #[test]
    fn test_header_markup_lists_nav_items() {
        let preview = Preview::Header {
            title: "Сайт".into(),
            nav_items: vec!["Главная".into(), "О нас".into()],
        };
        assert_eq!(
            preview.markup(),
            "<header>\n  <h1>Сайт</h1>\n  <nav>\n    <ul>\n      <li><a href=\"#\">Главная</a></li>\n      <li><a href=\"#\">О нас</a></li>\n    </ul>\n  </nav>\n</header>"
        );
    }

    #[test]
    fn test_nav_markup_wraps_links_in_items() {
        let preview = Preview::Nav {
            items: vec!["Главная".into(), "".into()],
        };
        assert_eq!(
            preview.markup(),
            "<nav>\n  <ul>\n    <li><a href=\"#\">Главная</a></li>\n    <li><a href=\"#\"></a></li>\n  </ul>\n</nav>"
        );
    }
}
