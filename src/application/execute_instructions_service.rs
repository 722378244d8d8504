// Execute Instructions Service - drives one robot at a time against a shared workspace
use crate::common::{AggregateRoot, DomainEvent, DomainResult};
use crate::domains::logger::DynLogger;
use crate::domains::robots::{
    ControlRobotCommand, ControlRobotResponse, ExecuteInstructionsUseCase, Robot, Workspace,
};

pub struct ExecuteInstructionsService {
    logger: DynLogger,
}

impl ExecuteInstructionsService {
    pub fn new(logger: DynLogger) -> Self {
        Self { logger }
    }

    fn run(
        &self,
        workspace: &mut Workspace,
        command: &ControlRobotCommand,
    ) -> DomainResult<ControlRobotResponse> {
        workspace.ensure_valid_position(command.start)?;

        let mut robot = Robot::new(command.start, command.direction);
        for instruction in &command.instructions {
            let next = robot.execute_instruction(*instruction);
            workspace.ensure_valid_position(next)?;
        }

        // Intermediate cells are only checked; the final one is committed.
        workspace.occupy(robot.position())?;

        self.logger.info(&format!(
            "robot {} parked at {} facing {} after {} instructions",
            robot.id,
            robot.position(),
            robot.direction(),
            command.instructions.len()
        ));
        self.commit_events(workspace);

        Ok(ControlRobotResponse {
            final_position: robot.position(),
            final_direction: robot.direction(),
        })
    }

    /// Events are only journaled to the log, then dropped from the aggregate.
    fn commit_events(&self, workspace: &mut Workspace) {
        for event in workspace.uncommitted_events() {
            self.logger.info(&format!(
                "workspace {} v{}: {} at {}",
                event.aggregate_id(),
                workspace.version(),
                event.event_type(),
                event.occurred_at().to_rfc3339()
            ));
        }
        workspace.mark_events_as_committed();
    }
}

impl ExecuteInstructionsUseCase for ExecuteInstructionsService {
    fn execute(
        &self,
        workspace: &mut Workspace,
        command: &ControlRobotCommand,
    ) -> DomainResult<ControlRobotResponse> {
        self.run(workspace, command).map_err(|e| {
            self.logger.warn(&format!(
                "robot starting at {} facing {} rejected: {}",
                command.start, command.direction, e
            ));
            e
        })
    }
}
