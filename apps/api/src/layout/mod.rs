// Page geometry, column layout, and section style blocks.

pub mod page;
pub mod styles;

pub use page::{build_page_layout, map_column_to_id};
pub use styles::build_section_styles;
