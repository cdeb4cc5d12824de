//! Small text helpers used by the views and form controls

use std::borrow::Cow;

use crate::error::FieldError;

/// Cut `text` to at most `max_chars` characters, appending an ellipsis when
/// anything was dropped
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}…", text[..cut].trim_end())),
    }
}

/// Split a comma-separated input into trimmed entries.
///
/// Empty entries are kept, so `"a,,b"` yields three items.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn join_comma_list(items: &[String]) -> String {
    items.join(", ")
}

/// Parse a numeric form input.
///
/// Accepts anything `u32` accepts after trimming; bounds are not checked.
pub fn parse_count(input: &str) -> Result<u32, FieldError> {
    input
        .trim()
        .parse()
        .map_err(|_| FieldError::NotANumber(input.to_string()))
}

/// Label for the attribute counter on a listing card
pub fn attribute_count_label(count: usize) -> String {
    format!("{count} атрибутов")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_borrowed() {
        let out = truncate_chars("Заголовок", 20);
        assert!(matches!(out, Cow::Borrowed("Заголовок")));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("Тег для ссылок", 7), "Тег для…");
        assert_eq!(truncate_chars("abcdef", 6), "abcdef");
        assert_eq!(truncate_chars("abcdef", 0), "…");
    }

    #[test]
    fn test_split_keeps_empty_entries() {
        assert_eq!(
            split_comma_list("Главная, О нас,Контакты "),
            vec!["Главная", "О нас", "Контакты"]
        );
        assert_eq!(split_comma_list("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_comma_list(""), vec![""]);
    }

    #[test]
    fn test_join_round_trips_display() {
        let items = vec!["Ссылка 1".to_string(), "Ссылка 2".to_string()];
        assert_eq!(join_comma_list(&items), "Ссылка 1, Ссылка 2");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 7 "), Ok(7));
        assert_eq!(parse_count("500"), Ok(500));
        assert_eq!(parse_count(""), Err(FieldError::NotANumber(String::new())));
        assert_eq!(parse_count("-1"), Err(FieldError::NotANumber("-1".into())));
    }
}
