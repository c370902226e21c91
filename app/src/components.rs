//! Views that make up the header, plus the error page used by the router.
//!
//! The header logic itself (favicon choice, sticky state, navigation entries)
//! lives in plain modules at the crate root so it can be tested without a DOM.

pub mod avatar;
pub mod error_template;
pub mod header;
pub mod header_name;
pub mod nav_bar;
