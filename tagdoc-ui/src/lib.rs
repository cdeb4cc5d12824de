//! tagdoc-ui - view components and UI state for tagdoc
//!
//! Components here are pure: they take data and callbacks as props and never
//! touch the router. Pages in tagdoc-web wire them to state and navigation.

pub mod components;
pub mod stores;

pub use components::*;
