use super::{Direction, Instruction, Position};
use uuid::Uuid;

/// A single robot being driven across the workspace.
///
/// The robot never validates its own moves; the caller checks each returned
/// position against the [`Workspace`](super::Workspace).
#[derive(Debug, Clone)]
pub struct Robot {
    pub id: String,
    position: Position,
    direction: Direction,
}

impl Robot {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            position,
            direction,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply one instruction and return the position it leaves the robot in.
    pub fn execute_instruction(&mut self, instruction: Instruction) -> Position {
        match instruction {
            Instruction::TurnLeft => self.turn_left(),
            Instruction::TurnRight => self.turn_right(),
            Instruction::MoveForward => self.move_forward_one(),
        }
        self.position
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    pub fn move_forward_one(&mut self) {
        self.position = self.position.move_towards(self.direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_with_position_and_direction() {
        let start = Position::new(1, 1);
        let robot = Robot::new(start, Direction::N);
        assert_eq!(robot.position(), start);
        assert_eq!(robot.direction(), Direction::N);
        assert!(!robot.id.is_empty());
    }

    #[test]
    fn turning_keeps_position() {
        let mut robot = Robot::new(Position::new(2, 2), Direction::N);
        robot.turn_left();
        assert_eq!(robot.direction(), Direction::W);
        robot.turn_right();
        robot.turn_right();
        assert_eq!(robot.direction(), Direction::E);
        assert_eq!(robot.position(), Position::new(2, 2));
    }

    #[test]
    fn move_forward_follows_heading() {
        let mut robot = Robot::new(Position::new(0, 0), Direction::E);
        robot.move_forward_one();
        assert_eq!(robot.position(), Position::new(1, 0));
        assert_eq!(robot.direction(), Direction::E);
    }

    #[test]
    fn execute_instruction_returns_new_position() {
        let mut robot = Robot::new(Position::new(1, 1), Direction::N);
        let returned = robot.execute_instruction(Instruction::MoveForward);
        assert_eq!(returned, Position::new(1, 2));
        assert_eq!(robot.position(), Position::new(1, 2));

        let returned = robot.execute_instruction(Instruction::TurnRight);
        assert_eq!(returned, Position::new(1, 2));
        assert_eq!(robot.direction(), Direction::E);
    }

    #[test]
    fn moves_are_not_bounded() {
        let mut robot = Robot::new(Position::new(0, 0), Direction::S);
        assert_eq!(robot.execute_instruction(Instruction::MoveForward), Position::new(0, -1));
    }
}
