pub mod api;
pub mod format;
pub mod transform;
pub mod types;
