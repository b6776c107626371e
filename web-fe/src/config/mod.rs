pub mod csrf;
pub mod endpoint;
