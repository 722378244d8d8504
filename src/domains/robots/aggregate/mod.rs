pub mod direction;
pub mod instruction;
pub mod position;
pub mod robot;
pub mod workspace;

pub use direction::*;
pub use instruction::*;
pub use position::*;
pub use robot::*;
pub use workspace::*;
