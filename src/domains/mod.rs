pub mod logger;
pub mod robots;

pub use logger::*;
pub use robots::*;
