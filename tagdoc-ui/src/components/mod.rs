//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod category_filter;
pub mod form_controls;
pub mod helpers;
pub mod listing;
pub mod tag_card;
pub mod tag_detail;

pub use app_layout::{AppLayoutView, SiteFooter};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use category_filter::CategoryFilterBar;
pub use form_controls::{choice_options, NumberField, SelectField, TextAreaField, TextField};
pub use helpers::{BackButton, CategoryBadge, CodeBlock, PageContainer};
pub use listing::ListingView;
pub use tag_card::TagCard;
pub use tag_detail::{
    AttributeList, DetailHeaderBar, DetailLookup, InteractivePreview, TagDetailView,
    TagNotFoundView,
};
