//! Output formatting for reports and network listings.

pub mod json;
pub mod text;
