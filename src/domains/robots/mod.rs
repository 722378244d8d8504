pub mod aggregate;
pub mod events;
pub mod parser;
pub mod ports;

pub use aggregate::*;
pub use events::*;
pub use parser::*;
pub use ports::*;
