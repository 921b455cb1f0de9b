pub mod country_info;
pub mod loader;
pub mod store_build;

pub use country_info::*;
pub use loader::*;
pub use store_build::*;
