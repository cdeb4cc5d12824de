//! Common helper UI components

mod back_button;
mod category_badge;
mod code_block;
mod page_container;

pub use back_button::BackButton;
pub use category_badge::CategoryBadge;
pub use code_block::CodeBlock;
pub use page_container::PageContainer;
