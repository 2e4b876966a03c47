//! Common types and traits shared by all backend resources

pub mod lenient;
pub mod resource;
pub mod status;

pub use resource::Resource;
pub use status::ActiveStatus;
