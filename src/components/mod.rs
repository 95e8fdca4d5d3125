pub mod bubble_map;
pub mod format;
pub mod lens;
pub mod search_preview;
pub mod site_header;
pub mod sparkline;
pub mod theme_toggle;
