use std::fmt;
use std::str::FromStr;

use crate::error::CategoryError;

/// Grouping used to filter the tag listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Structure,
    Content,
    Navigation,
    Interactive,
    Semantic,
    Practice,
}

impl Category {
    /// Every category, in the order the filter bar shows them
    pub const ALL: [Category; 6] = [
        Category::Structure,
        Category::Content,
        Category::Navigation,
        Category::Interactive,
        Category::Semantic,
        Category::Practice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Structure => "Структура",
            Category::Content => "Контент",
            Category::Navigation => "Навигация",
            Category::Interactive => "Интерактив",
            Category::Semantic => "Семантика",
            Category::Practice => "Практика",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

/// A listing filter: either the "All" sentinel or one real category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "Все";

    /// The sentinel followed by every real category
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_start_with_sentinel() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], CategoryFilter::All);
        let labels: Vec<_> = options.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Все",
                "Структура",
                "Контент",
                "Навигация",
                "Интерактив",
                "Семантика",
                "Практика"
            ]
        );
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Все".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Семантика".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Semantic))
        );
        assert_eq!(
            "Blocks".parse::<Category>(),
            Err(CategoryError::Unknown("Blocks".into()))
        );
    }

    #[test]
    fn test_sentinel_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
        assert!(CategoryFilter::Only(Category::Content).matches(Category::Content));
        assert!(!CategoryFilter::Only(Category::Content).matches(Category::Structure));
    }
}
