pub mod footer;
pub mod navbar;
pub mod page_header;
pub mod status_banner;
