//! The tag catalog: a read-only table built once per process

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::category::{Category, CategoryFilter};
use crate::preview::Preview;

/// One attribute a tag accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub example: Option<&'static str>,
}

impl AttributeDescriptor {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            example: None,
        }
    }

    pub const fn with_example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// Everything the app knows about one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub attributes: Vec<AttributeDescriptor>,
    /// Canonical example markup shown verbatim
    pub example: &'static str,
    /// Seed for the interactive example; `None` means there is no editor yet
    pub defaults: Option<Preview>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(crate::tags::builtin()));

/// The built-in catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Tag records in insertion order with a by-name index
#[derive(Debug)]
pub struct Catalog {
    records: Vec<TagRecord>,
    by_name: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog; a later record with a duplicate name is dropped
    pub fn new(records: Vec<TagRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if by_name.contains_key(record.name) {
                tracing::warn!("Duplicate tag record {:?} ignored", record.name);
                continue;
            }
            by_name.insert(record.name, kept.len());
            kept.push(record);
        }
        Self {
            records: kept,
            by_name,
        }
    }

    /// Filter labels for the listing: the "All" sentinel, then each category
    pub fn list_categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options()
    }

    /// Records matching `filter`, in insertion order
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&TagRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r.category))
            .collect()
    }

    /// Exact-match lookup by tag name
    pub fn by_name(&self, name: &str) -> Option<&TagRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[TagRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &'static str, category: Category) -> TagRecord {
        TagRecord {
            name,
            description: "",
            category,
            attributes: vec![],
            example: "",
            defaults: None,
        }
    }

    #[test]
    fn test_by_category_preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            record("b", Category::Content),
            record("a", Category::Structure),
            record("c", Category::Content),
        ]);
        let names: Vec<_> = catalog
            .by_category(CategoryFilter::Only(Category::Content))
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["b", "c"]);

        let all: Vec<_> = catalog
            .by_category(CategoryFilter::All)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(all, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_by_category_empty_is_not_an_error() {
        let catalog = Catalog::new(vec![record("a", Category::Structure)]);
        assert!(catalog
            .by_category(CategoryFilter::Only(Category::Practice))
            .is_empty());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let catalog = Catalog::new(vec![
            record("a", Category::Structure),
            record("a", Category::Content),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.by_name("a").unwrap().category, Category::Structure);
    }

    #[test]
    fn test_by_name_is_exact() {
        let catalog = Catalog::new(vec![record("h1", Category::Structure)]);
        assert!(catalog.by_name("h1").is_some());
        assert!(catalog.by_name("H1").is_none());
        assert!(catalog.by_name("h1 ").is_none());
    }

    #[test]
    fn test_builtin_names_are_unique_and_indexed() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 17);
        for record in catalog.records() {
            assert_eq!(catalog.by_name(record.name), Some(record));
        }
    }

    #[test]
    fn test_builtin_records_all_have_previews() {
        for record in catalog().records() {
            assert!(record.defaults.is_some(), "{} has no preview", record.name);
        }
    }
}
