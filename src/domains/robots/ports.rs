use crate::common::DomainResult;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::{Direction, Instruction, Position, Workspace};

/// One robot's starting state and the instructions it has to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRobotCommand {
    pub start: Position,
    pub direction: Direction,
    pub instructions: Vec<Instruction>,
}

impl ControlRobotCommand {
    pub fn new(start: Position, direction: Direction, instructions: Vec<Instruction>) -> Self {
        Self { start, direction, instructions }
    }
}

/// Where a robot ended up. Displays as `"<x> <y> <H>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRobotResponse {
    pub final_position: Position,
    pub final_direction: Direction,
}

impl fmt::Display for ControlRobotResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.final_position.x, self.final_position.y, self.final_direction
        )
    }
}

/// Inbound port driven by the console adapter.
///
/// The workspace is handed in on every call; robots run against it one after
/// another, so each parked robot blocks the ones that follow.
pub trait ExecuteInstructionsUseCase {
    fn execute(
        &self,
        workspace: &mut Workspace,
        command: &ControlRobotCommand,
    ) -> DomainResult<ControlRobotResponse>;
}
