use serde::{Deserialize, Serialize};

/// The primitive robot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl Instruction {
    /// Case-insensitive lookup of an instruction letter.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'L' => Some(Instruction::TurnLeft),
            'R' => Some(Instruction::TurnRight),
            'M' => Some(Instruction::MoveForward),
            _ => None,
        }
    }
}
