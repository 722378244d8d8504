use crate::common::{ApplicationError, ApplicationResult, DomainError};
use crate::domains::logger::DynLogger;
use crate::domains::robots::{
    parse_instructions, ControlRobotCommand, Direction, ExecuteInstructionsUseCase, Position,
    Workspace,
};
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Outcome of one batch when robots are allowed to fail individually.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub completed: usize,
    /// Zero-based robot index paired with the reason it was rejected.
    pub failures: Vec<(usize, DomainError)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Line-oriented driver: a workspace line, then `x y H` / instruction line pairs.
///
/// The whole input is parsed before the first robot moves, so malformed input
/// never produces partial output.
pub struct ConsoleAdapter {
    use_case: Arc<dyn ExecuteInstructionsUseCase>,
    logger: DynLogger,
    stop_on_error: bool,
}

impl ConsoleAdapter {
    pub fn new(use_case: Arc<dyn ExecuteInstructionsUseCase>, logger: DynLogger) -> Self {
        Self { use_case, logger, stop_on_error: true }
    }

    /// Keep going after a rejected robot instead of aborting the batch.
    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> ApplicationResult<BatchSummary> {
        let mut lines = NumberedLines::new(input);
        let mut workspace = read_workspace(&mut lines)?;
        let commands = read_robots(&mut lines)?;

        self.logger.info(&format!(
            "workspace {} ({}x{}) with {} robots",
            workspace.id,
            workspace.bounds().max_x,
            workspace.bounds().max_y,
            commands.len()
        ));

        let mut summary = BatchSummary::default();
        for (index, command) in commands.iter().enumerate() {
            match self.use_case.execute(&mut workspace, command) {
                Ok(response) => {
                    writeln!(output, "{}", response)?;
                    output.flush()?;
                    summary.completed += 1;
                }
                Err(e) if self.stop_on_error => return Err(e.into()),
                Err(e) => {
                    self.logger.error(&format!("robot #{} failed: {}", index + 1, e));
                    summary.failures.push((index, e));
                }
            }
        }
        Ok(summary)
    }
}

struct NumberedLines<R> {
    inner: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(input: R) -> Self {
        Self { inner: input.lines(), line_no: 0 }
    }

    fn next_line(&mut self) -> ApplicationResult<Option<String>> {
        match self.inner.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    fn next_non_blank(&mut self) -> ApplicationResult<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}

fn read_workspace<R: BufRead>(lines: &mut NumberedLines<R>) -> ApplicationResult<Workspace> {
    let line = lines
        .next_line()?
        .ok_or_else(|| ApplicationError::malformed(1, "missing workspace line"))?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(ApplicationError::malformed(
            lines.line_no,
            "workspace line must contain exactly 2 integers",
        ));
    }
    let max_x = parse_int(parts[0], "maxX", lines.line_no)?;
    let max_y = parse_int(parts[1], "maxY", lines.line_no)?;
    Ok(Workspace::new(max_x, max_y)?)
}

fn read_robots<R: BufRead>(
    lines: &mut NumberedLines<R>,
) -> ApplicationResult<Vec<ControlRobotCommand>> {
    let mut commands = Vec::new();
    while let Some(position_line) = lines.next_non_blank()? {
        let line_no = lines.line_no;
        let parts: Vec<&str> = position_line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ApplicationError::malformed(
                line_no,
                "robot position line must be: '<x> <y> <N|E|S|W>'",
            ));
        }
        let start = Position::new(
            parse_int(parts[0], "x", line_no)?.into(),
            parse_int(parts[1], "y", line_no)?.into(),
        );
        let direction = parse_direction(parts[2], line_no)?;

        let instruction_line = lines.next_non_blank()?.ok_or_else(|| {
            ApplicationError::malformed(line_no, "missing instruction line for robot")
        })?;
        let instructions = parse_instructions(instruction_line.as_str())?;

        commands.push(ControlRobotCommand::new(start, direction, instructions));
    }
    Ok(commands)
}

fn parse_int(token: &str, field: &str, line: usize) -> ApplicationResult<i32> {
    token.parse::<i32>().map_err(|_| {
        ApplicationError::malformed(line, format!("invalid integer for {}: {}", field, token))
    })
}

fn parse_direction(token: &str, line: usize) -> ApplicationResult<Direction> {
    let mut chars = token.chars();
    let direction = match (chars.next(), chars.next()) {
        (Some(ch), None) => Direction::from_char(ch),
        _ => None,
    };
    direction.ok_or_else(|| {
        ApplicationError::malformed(line, format!("direction must be one of N,E,S,W: {}", token))
    })
}
