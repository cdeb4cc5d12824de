//! Typed preview state, one variant per preview shape
//!
//! Each catalog record carries a `Preview` holding its default field values.
//! The detail view clones it and edits the clone through [`Preview::set`],
//! which speaks the string-keyed `(key, value)` protocol the form controls
//! use while keeping every field statically typed underneath.

use std::collections::BTreeMap;

use crate::error::FieldError;

/// Upper bound on generated table rows/columns and list items
pub const MAX_GENERATED: u32 = 100;

/// Value carried by a single form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
    List(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// A closed set of options rendered as a `<select>`
pub trait Choice: Copy + PartialEq + 'static {
    const OPTIONS: &'static [Self];

    /// Attribute value as written in markup
    fn as_str(self) -> &'static str;

    /// Label shown in the option list
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn parse(value: &str) -> Option<Self> {
        Self::OPTIONS.iter().copied().find(|o| o.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

/// Where a link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    SelfFrame,
    Blank,
}

impl Choice for LinkTarget {
    const OPTIONS: &'static [Self] = &[LinkTarget::SelfFrame, LinkTarget::Blank];

    fn as_str(self) -> &'static str {
        match self {
            LinkTarget::SelfFrame => "_self",
            LinkTarget::Blank => "_blank",
        }
    }
}

/// Bullet style of an unordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Disc,
    Circle,
    Square,
}

impl Choice for ListMarker {
    const OPTIONS: &'static [Self] = &[ListMarker::Disc, ListMarker::Circle, ListMarker::Square];

    fn as_str(self) -> &'static str {
        match self {
            ListMarker::Disc => "disc",
            ListMarker::Circle => "circle",
            ListMarker::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl Choice for FormMethod {
    const OPTIONS: &'static [Self] = &[FormMethod::Get, FormMethod::Post];

    fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormMethod::Get => "GET",
            FormMethod::Post => "POST",
        }
    }
}

/// Type of the single input inside the form preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl Choice for InputType {
    const OPTIONS: &'static [Self] = &[InputType::Text, InputType::Email, InputType::Password];

    fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

/// Editable state of one interactive example
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Table {
        rows: u32,
        cols: u32,
        border: u32,
    },
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
    },
    Link {
        href: String,
        target: LinkTarget,
        text: String,
    },
    List {
        items: Vec<String>,
        marker: ListMarker,
    },
    Form {
        action: String,
        method: FormMethod,
        input_type: InputType,
        input_name: String,
        button_text: String,
    },
    Header {
        title: String,
        nav_items: Vec<String>,
    },
    Nav {
        items: Vec<String>,
    },
    Main {
        heading: String,
        content: String,
    },
    Section {
        heading: String,
        content: String,
    },
    Article {
        title: String,
        content: String,
    },
    Aside {
        title: String,
        links: Vec<String>,
    },
    Footer {
        copyright: String,
        contact: String,
    },
    Practice {
        title: String,
        heading: String,
        paragraph: String,
    },
}

impl Preview {
    /// Short name of the variant, used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Preview::Heading { .. } => "heading",
            Preview::Paragraph { .. } => "paragraph",
            Preview::Table { .. } => "table",
            Preview::Image { .. } => "image",
            Preview::Link { .. } => "link",
            Preview::List { .. } => "list",
            Preview::Form { .. } => "form",
            Preview::Header { .. } => "header",
            Preview::Nav { .. } => "nav",
            Preview::Main { .. } => "main",
            Preview::Section { .. } => "section",
            Preview::Article { .. } => "article",
            Preview::Aside { .. } => "aside",
            Preview::Footer { .. } => "footer",
            Preview::Practice { .. } => "practice",
        }
    }

    /// Current field values keyed the way the form controls address them
    pub fn fields(&self) -> BTreeMap<&'static str, FieldValue> {
        let text = |s: &String| FieldValue::Text(s.clone());
        let list = |v: &Vec<String>| FieldValue::List(v.clone());

        let pairs: Vec<(&'static str, FieldValue)> = match self {
            Preview::Heading { text: t, .. } | Preview::Paragraph { text: t } => {
                vec![("text", text(t))]
            }
            Preview::Table { rows, cols, border } => vec![
                ("rows", FieldValue::Number(*rows)),
                ("cols", FieldValue::Number(*cols)),
                ("border", FieldValue::Number(*border)),
            ],
            Preview::Image {
                src,
                alt,
                width,
                height,
            } => vec![
                ("src", text(src)),
                ("alt", text(alt)),
                ("width", FieldValue::Number(*width)),
                ("height", FieldValue::Number(*height)),
            ],
            Preview::Link {
                href,
                target,
                text: t,
            } => vec![
                ("href", text(href)),
                ("target", target.as_str().into()),
                ("text", text(t)),
            ],
            Preview::List { items, marker } => {
                vec![("items", list(items)), ("type", marker.as_str().into())]
            }
            Preview::Form {
                action,
                method,
                input_type,
                input_name,
                button_text,
            } => vec![
                ("action", text(action)),
                ("method", method.as_str().into()),
                ("inputType", input_type.as_str().into()),
                ("inputName", text(input_name)),
                ("buttonText", text(button_text)),
            ],
            Preview::Header { title, nav_items } => {
                vec![("title", text(title)), ("navItems", list(nav_items))]
            }
            Preview::Nav { items } => vec![("items", list(items))],
            Preview::Main { heading, content } | Preview::Section { heading, content } => {
                vec![("heading", text(heading)), ("content", text(content))]
            }
            Preview::Article { title, content } => {
                vec![("title", text(title)), ("content", text(content))]
            }
            Preview::Aside { title, links } => {
                vec![("title", text(title)), ("links", list(links))]
            }
            Preview::Footer { copyright, contact } => {
                vec![("copyright", text(copyright)), ("contact", text(contact))]
            }
            Preview::Practice {
                title,
                heading,
                paragraph,
            } => vec![
                ("title", text(title)),
                ("heading", text(heading)),
                ("paragraph", text(paragraph)),
            ],
        };

        pairs.into_iter().collect()
    }

    /// Replace the value of one field, leaving every other field untouched
    pub fn set(&mut self, key: &str, value: FieldValue) -> Result<(), FieldError> {
        match (self, key) {
            (Preview::Heading { text, .. }, "text") | (Preview::Paragraph { text }, "text") => {
                *text = expect_text("text", value)?
            }
            (Preview::Table { rows, .. }, "rows") => *rows = expect_number("rows", value)?,
            (Preview::Table { cols, .. }, "cols") => *cols = expect_number("cols", value)?,
            (Preview::Table { border, .. }, "border") => {
                *border = expect_number("border", value)?
            }
            (Preview::Image { src, .. }, "src") => *src = expect_text("src", value)?,
            (Preview::Image { alt, .. }, "alt") => *alt = expect_text("alt", value)?,
            (Preview::Image { width, .. }, "width") => *width = expect_number("width", value)?,
            (Preview::Image { height, .. }, "height") => {
                *height = expect_number("height", value)?
            }
            (Preview::Link { href, .. }, "href") => *href = expect_text("href", value)?,
            (Preview::Link { target, .. }, "target") => *target = expect_choice("target", value)?,
            (Preview::Link { text, .. }, "text") => *text = expect_text("text", value)?,
            (Preview::List { items, .. }, "items") => *items = expect_list("items", value)?,
            (Preview::List { marker, .. }, "type") => *marker = expect_choice("type", value)?,
            (Preview::Form { action, .. }, "action") => *action = expect_text("action", value)?,
            (Preview::Form { method, .. }, "method") => *method = expect_choice("method", value)?,
            (Preview::Form { input_type, .. }, "inputType") => {
                *input_type = expect_choice("inputType", value)?
            }
            (Preview::Form { input_name, .. }, "inputName") => {
                *input_name = expect_text("inputName", value)?
            }
            (Preview::Form { button_text, .. }, "buttonText") => {
                *button_text = expect_text("buttonText", value)?
            }
            (Preview::Header { title, .. }, "title")
            | (Preview::Article { title, .. }, "title")
            | (Preview::Aside { title, .. }, "title")
            | (Preview::Practice { title, .. }, "title") => *title = expect_text("title", value)?,
            (Preview::Header { nav_items, .. }, "navItems") => {
                *nav_items = expect_list("navItems", value)?
            }
            (Preview::Nav { items }, "items") => *items = expect_list("items", value)?,
            (Preview::Main { heading, .. }, "heading")
            | (Preview::Section { heading, .. }, "heading")
            | (Preview::Practice { heading, .. }, "heading") => {
                *heading = expect_text("heading", value)?
            }
            (Preview::Main { content, .. }, "content")
            | (Preview::Section { content, .. }, "content")
            | (Preview::Article { content, .. }, "content") => {
                *content = expect_text("content", value)?
            }
            (Preview::Aside { links, .. }, "links") => *links = expect_list("links", value)?,
            (Preview::Footer { copyright, .. }, "copyright") => {
                *copyright = expect_text("copyright", value)?
            }
            (Preview::Footer { contact, .. }, "contact") => {
                *contact = expect_text("contact", value)?
            }
            (Preview::Practice { paragraph, .. }, "paragraph") => {
                *paragraph = expect_text("paragraph", value)?
            }
            (preview, _) => {
                return Err(FieldError::UnknownField {
                    variant: preview.kind(),
                    field: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn expect_text(field: &'static str, value: FieldValue) -> Result<String, FieldError> {
    match value {
        FieldValue::Text(s) => Ok(s),
        _ => Err(FieldError::WrongShape {
            field,
            expected: "text",
        }),
    }
}

fn expect_number(field: &'static str, value: FieldValue) -> Result<u32, FieldError> {
    match value {
        FieldValue::Number(n) => Ok(n),
        _ => Err(FieldError::WrongShape {
            field,
            expected: "a number",
        }),
    }
}

fn expect_list(field: &'static str, value: FieldValue) -> Result<Vec<String>, FieldError> {
    match value {
        FieldValue::List(items) => Ok(items),
        _ => Err(FieldError::WrongShape {
            field,
            expected: "a list",
        }),
    }
}

fn expect_choice<C: Choice>(field: &'static str, value: FieldValue) -> Result<C, FieldError> {
    let raw = expect_text(field, value)?;
    C::parse(&raw).ok_or(FieldError::InvalidChoice { field, value: raw })
}

/// Synthetic cell labels for a `rows` x `cols` table
pub fn table_cells(rows: u32, cols: u32) -> Vec<Vec<String>> {
    (1..=rows.min(MAX_GENERATED))
        .map(|r| {
            (1..=cols.min(MAX_GENERATED))
                .map(|c| format!("Ячейка {r}-{c}"))
                .collect()
        })
        .collect()
}

/// Placeholder list items `Пункт 1..=count`
pub fn numbered_items(count: u32) -> Vec<String> {
    (1..=count.min(MAX_GENERATED))
        .map(|i| format!("Пункт {i}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> Preview {
        Preview::Link {
            href: "https://example.com".into(),
            target: LinkTarget::Blank,
            text: "Перейти на сайт".into(),
        }
    }

    #[test]
    fn test_set_replaces_only_named_field() {
        let mut preview = link();
        preview.set("text", "Ещё ссылка".into()).unwrap();
        assert_eq!(
            preview,
            Preview::Link {
                href: "https://example.com".into(),
                target: LinkTarget::Blank,
                text: "Ещё ссылка".into(),
            }
        );
    }

    #[test]
    fn test_set_choice_parses_attribute_value() {
        let mut preview = link();
        preview.set("target", "_self".into()).unwrap();
        assert_eq!(preview.fields()["target"], FieldValue::Text("_self".into()));

        let err = preview.set("target", "_parent".into()).unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidChoice {
                field: "target",
                value: "_parent".into()
            }
        );
        assert_eq!(preview.fields()["target"], FieldValue::Text("_self".into()));
    }

    #[test]
    fn test_set_rejects_unknown_field() {
        let mut preview = Preview::Paragraph { text: "a".into() };
        let err = preview.set("level", FieldValue::Number(2)).unwrap_err();
        assert_eq!(
            err,
            FieldError::UnknownField {
                variant: "paragraph",
                field: "level".into()
            }
        );
    }

    #[test]
    fn test_set_rejects_wrong_shape() {
        let mut preview = Preview::Table {
            rows: 2,
            cols: 2,
            border: 1,
        };
        let err = preview.set("rows", "3".into()).unwrap_err();
        assert_eq!(
            err,
            FieldError::WrongShape {
                field: "rows",
                expected: "a number"
            }
        );
    }

    #[test]
    fn test_numbers_outside_declared_range_are_kept() {
        let mut preview = Preview::Table {
            rows: 2,
            cols: 2,
            border: 1,
        };
        preview.set("rows", FieldValue::Number(42)).unwrap();
        preview.set("border", FieldValue::Number(9)).unwrap();
        let fields = preview.fields();
        assert_eq!(fields["rows"], FieldValue::Number(42));
        assert_eq!(fields["border"], FieldValue::Number(9));
        assert_eq!(fields["cols"], FieldValue::Number(2));
    }

    #[test]
    fn test_shared_keys_dispatch_per_variant() {
        let mut practice = Preview::Practice {
            title: "t".into(),
            heading: "h".into(),
            paragraph: "p".into(),
        };
        practice.set("heading", "Привет".into()).unwrap();
        practice.set("title", "Страница".into()).unwrap();
        assert_eq!(
            practice,
            Preview::Practice {
                title: "Страница".into(),
                heading: "Привет".into(),
                paragraph: "p".into(),
            }
        );
    }

    #[test]
    fn test_table_cells_labels() {
        let cells = table_cells(2, 3);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], vec!["Ячейка 1-1", "Ячейка 1-2", "Ячейка 1-3"]);
        assert_eq!(cells[1][2], "Ячейка 2-3");
        assert!(table_cells(0, 4).is_empty());
    }

    #[test]
    fn test_generation_is_capped() {
        assert_eq!(numbered_items(10_000).len(), MAX_GENERATED as usize);
        assert_eq!(table_cells(1, 500)[0].len(), MAX_GENERATED as usize);
        assert_eq!(numbered_items(3), vec!["Пункт 1", "Пункт 2", "Пункт 3"]);
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(FormMethod::Post.label(), "POST");
        assert_eq!(FormMethod::Post.as_str(), "post");
        assert_eq!(ListMarker::parse("square"), Some(ListMarker::Square));
        assert_eq!(InputType::parse("number"), None);
    }
}
