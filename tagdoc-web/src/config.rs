//! Application configuration
//!
//! Compiled-in defaults, provided to pages through Dioxus context. The only
//! runtime override is the listing's `?category=` query.

use tagdoc_common::CategoryFilter;
use tracing::warn;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub subtitle: String,
    pub footer_lines: Vec<String>,
    /// Characters of description shown on a listing card
    pub card_description_chars: usize,
    /// Filter applied when the listing opens without a query
    pub default_category: CategoryFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Изучаем HTML теги".to_string(),
            subtitle: "Интерактивная платформа для изучения HTML-тегов и их атрибутов. \
                       Практикуйтесь с визуальными примерами и сразу видите результат изменений."
                .to_string(),
            footer_lines: vec![
                "Интерактивная платформа для изучения HTML".to_string(),
                "Создано на Rust и Dioxus".to_string(),
            ],
            card_description_chars: 90,
            default_category: CategoryFilter::All,
        }
    }
}

impl AppConfig {
    /// Filter the listing opens with. A recognised `?category=` label wins;
    /// anything else falls back to the default.
    pub fn initial_filter(&self, query: Option<&str>) -> CategoryFilter {
        let Some(raw) = query.filter(|q| !q.is_empty()) else {
            return self.default_category;
        };
        let label = urlencoding::decode(raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        match label.parse() {
            Ok(filter) => filter,
            Err(e) => {
                warn!("{}; showing {}", e, self.default_category);
                self.default_category
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagdoc_common::Category;

    #[test]
    fn test_no_query_uses_default() {
        let config = AppConfig::default();
        assert_eq!(config.initial_filter(None), CategoryFilter::All);
        assert_eq!(config.initial_filter(Some("")), CategoryFilter::All);
    }

    #[test]
    fn test_query_selects_category() {
        let config = AppConfig::default();
        assert_eq!(
            config.initial_filter(Some("Семантика")),
            CategoryFilter::Only(Category::Semantic)
        );
    }

    #[test]
    fn test_percent_encoded_query() {
        let config = AppConfig::default();
        let encoded = urlencoding::encode("Практика");
        assert_eq!(
            config.initial_filter(Some(encoded.as_ref())),
            CategoryFilter::Only(Category::Practice)
        );
    }

    #[test]
    fn test_unknown_query_falls_back() {
        let config = AppConfig {
            default_category: CategoryFilter::Only(Category::Content),
            ..AppConfig::default()
        };
        assert_eq!(
            config.initial_filter(Some("Таблицы")),
            CategoryFilter::Only(Category::Content)
        );
    }
}
