pub mod adapters;
pub mod application;
pub mod common;
pub mod config;
pub mod domains;

pub use config::Config;

// Re-export common types
pub use common::{ApplicationError, ApplicationResult, DomainError, DomainResult};

// Re-export the robot domain
pub use domains::logger::{DomainLogger, DynLogger};
pub use domains::robots::{
    parse_instructions, ControlRobotCommand, ControlRobotResponse, Direction,
    ExecuteInstructionsUseCase, Instruction, Position, Robot, Workspace,
};
