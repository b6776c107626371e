mod dashboard;
mod not_found;

pub use dashboard::*;
pub use not_found::*;
