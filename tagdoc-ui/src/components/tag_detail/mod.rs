//! Tag detail page components

pub mod attribute_list;
pub mod header_bar;
pub mod not_found;
pub mod preview;
pub mod view;

pub use attribute_list::AttributeList;
pub use header_bar::DetailHeaderBar;
pub use not_found::TagNotFoundView;
pub use preview::InteractivePreview;
pub use view::{toggle_label, DetailLookup, TagDetailView};
