pub mod camera;
pub mod controller;
pub mod store;

pub use camera::*;
pub use controller::*;
pub use store::*;
