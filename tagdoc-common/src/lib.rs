//! tagdoc-common - catalog and preview logic shared by the tagdoc UI crates
//!
//! Everything here is plain data and pure functions: no rendering, no I/O.

pub mod catalog;
pub mod category;
pub mod detail;
pub mod error;
pub mod markup;
pub mod preview;
pub mod text;

mod tags;

pub use catalog::{catalog, AttributeDescriptor, Catalog, TagRecord};
pub use category::{Category, CategoryFilter};
pub use detail::DetailState;
pub use error::{CategoryError, FieldError};
pub use preview::{
    Choice, FieldValue, FormMethod, HeadingLevel, InputType, LinkTarget, ListMarker, Preview,
};
