mod support;

use std::collections::BTreeMap;

use support::tracing_init;
use tagdoc_common::text::attribute_count_label;
use tagdoc_common::{catalog, Category, CategoryFilter, DetailState, FieldValue};

fn names(filter: CategoryFilter) -> Vec<&'static str> {
    catalog()
        .by_category(filter)
        .iter()
        .map(|r| r.name)
        .collect()
}

#[test]
fn test_structure_category_in_insertion_order() {
    tracing_init();
    let filter: CategoryFilter = "Структура".parse().unwrap();
    assert_eq!(names(filter), vec!["h1", "h2", "h3", "table", "ul"]);
}

#[test]
fn test_every_filter_returns_only_matching_records() {
    tracing_init();
    let all = names(CategoryFilter::All);
    assert_eq!(all.len(), catalog().len());

    for filter in catalog().list_categories() {
        let selected = catalog().by_category(filter);
        assert!(selected.iter().all(|r| filter.matches(r.category)));

        // relative order matches the unfiltered listing
        let positions: Vec<usize> = selected
            .iter()
            .map(|r| all.iter().position(|n| *n == r.name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_categories_partition_the_catalog() {
    let total: usize = Category::ALL
        .into_iter()
        .map(|c| catalog().by_category(CategoryFilter::Only(c)).len())
        .sum();
    assert_eq!(total, catalog().len());
}

#[test]
fn test_by_name_round_trips_every_record() {
    for record in catalog().records() {
        let found = catalog().by_name(record.name).unwrap();
        assert_eq!(found.name, record.name);
    }
    assert!(catalog().by_name("nope-not-a-tag").is_none());
    assert!(catalog().by_name("").is_none());
}

#[test]
fn test_card_attribute_counts() {
    let expected = [
        ("h1", "2 атрибутов"),
        ("p", "2 атрибутов"),
        ("table", "3 атрибутов"),
        ("img", "4 атрибутов"),
        ("a", "3 атрибутов"),
        ("ul", "1 атрибутов"),
        ("form", "2 атрибутов"),
        ("footer", "2 атрибутов"),
    ];
    for (name, label) in expected {
        let record = catalog().by_name(name).unwrap();
        assert_eq!(attribute_count_label(record.attributes.len()), label, "{name}");
    }
}

#[test]
fn test_image_preview_update_replaces_only_width() {
    tracing_init();
    let record = catalog().by_name("img").unwrap();
    let mut state = DetailState::new(record);

    let mut expected: BTreeMap<&str, FieldValue> = BTreeMap::from([
        ("src", "https://via.placeholder.com/300x200".into()),
        ("alt", "Пример изображения".into()),
        ("width", FieldValue::Number(300)),
        ("height", FieldValue::Number(200)),
    ]);
    assert_eq!(state.preview().unwrap().fields(), expected);

    state.update_field("width", FieldValue::Number(500));
    expected.insert("width", FieldValue::Number(500));
    assert_eq!(state.preview().unwrap().fields(), expected);
}

#[test]
fn test_toggle_twice_is_identity() {
    let record = catalog().by_name("img").unwrap();
    let mut state = DetailState::new(record);
    state.update_field("alt", "Котик".into());
    let before = state.clone();

    state.toggle_interactive();
    state.toggle_interactive();
    assert_eq!(state, before);
    assert!(!state.is_interactive_open());
}

#[test]
fn test_practice_walkthrough_binds_preview_and_listing() {
    let record = catalog().by_name("practice").unwrap();
    assert_eq!(record.category, Category::Practice);

    let mut state = DetailState::new(record);
    state.update_field("title", "Обо мне".into());
    state.update_field("paragraph", "Я учу HTML.".into());

    let preview = state.preview().unwrap();
    let fields = preview.fields();
    assert_eq!(fields["heading"], FieldValue::Text("Привет, мир!".into()));
    let markup = preview.markup();
    assert!(markup.contains("<title>Обо мне</title>"));
    assert!(markup.contains("<p>Я учу HTML.</p>"));
}
