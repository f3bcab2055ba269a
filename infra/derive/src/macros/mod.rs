pub mod api;
pub mod attrs;
pub mod error;
pub mod slice;
