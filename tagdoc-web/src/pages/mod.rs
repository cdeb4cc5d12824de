mod layout;
mod listing;
mod not_found;
mod tag_detail;

pub use layout::AppLayout;
pub use listing::Listing;
pub use not_found::PageNotFound;
pub use tag_detail::TagDetail;
