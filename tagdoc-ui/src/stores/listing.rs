//! Listing state store

use dioxus::prelude::*;
use tagdoc_common::CategoryFilter;

/// State for the listing view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ListingState {
    /// Category filter currently applied to the card grid
    pub selected: CategoryFilter,
}
