pub mod execute_instructions_service;

pub use execute_instructions_service::*;
