pub mod event_bus;
pub mod frame;
pub mod pump;

pub use event_bus::*;
pub use frame::*;
pub use pump::*;
