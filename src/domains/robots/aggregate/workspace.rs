use crate::common::{AggregateRoot, DomainError, DomainResult};
use crate::domains::robots::events::WorkspaceEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl WorkspaceBounds {
    pub fn contains(&self, position: Position) -> bool {
        (0..=i64::from(self.max_x)).contains(&position.x)
            && (0..=i64::from(self.max_y)).contains(&position.y)
    }
}

/// The grid robots move on, together with every cell a robot has parked on.
///
/// Occupied cells only ever accumulate; the sole way to add one is
/// [`Workspace::occupy`], which records a `PositionOccupied` event.
#[derive(Debug)]
pub struct Workspace {
    pub id: String,
    bounds: WorkspaceBounds,
    occupied: HashSet<Position>,
    version: u64,
    uncommitted_events: Vec<WorkspaceEvent>,
}

impl Workspace {
    pub fn new(max_x: i32, max_y: i32) -> DomainResult<Self> {
        if max_x < 0 || max_y < 0 {
            return Err(DomainError::InvalidWorkspace { max_x, max_y });
        }

        let id = Uuid::new_v4().to_string();
        let mut workspace = Self {
            id: id.clone(),
            bounds: WorkspaceBounds { max_x, max_y },
            occupied: HashSet::new(),
            version: 0,
            uncommitted_events: Vec::new(),
        };

        workspace.record(WorkspaceEvent::WorkspaceCreated {
            workspace_id: id,
            max_x,
            max_y,
            timestamp: chrono::Utc::now(),
        })?;
        Ok(workspace)
    }

    pub fn bounds(&self) -> WorkspaceBounds {
        self.bounds
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied.contains(&position)
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Bounds are checked before occupancy.
    pub fn ensure_valid_position(&self, position: Position) -> DomainResult<()> {
        if !self.bounds.contains(position) {
            return Err(DomainError::OutOfBounds { position });
        }
        if self.occupied.contains(&position) {
            return Err(DomainError::PositionOccupied { position });
        }
        Ok(())
    }

    pub fn occupy(&mut self, position: Position) -> DomainResult<()> {
        self.ensure_valid_position(position)?;
        self.record(WorkspaceEvent::PositionOccupied {
            workspace_id: self.id.clone(),
            position,
            timestamp: chrono::Utc::now(),
        })
    }
}

impl AggregateRoot for Workspace {
    type Event = WorkspaceEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            WorkspaceEvent::WorkspaceCreated { workspace_id, max_x, max_y, .. } => {
                self.id = workspace_id.clone();
                self.bounds = WorkspaceBounds { max_x: *max_x, max_y: *max_y };
            }
            WorkspaceEvent::PositionOccupied { position, .. } => {
                self.occupied.insert(*position);
            }
        }
        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    fn add_event(&mut self, event: Self::Event) {
        self.uncommitted_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::robots::Direction;

    fn workspace() -> Workspace {
        Workspace::new(5, 5).unwrap()
    }

    #[test]
    fn rejects_negative_bounds() {
        assert_eq!(
            Workspace::new(-1, 5).unwrap_err(),
            DomainError::InvalidWorkspace { max_x: -1, max_y: 5 }
        );
        assert!(matches!(Workspace::new(5, -1), Err(DomainError::InvalidWorkspace { .. })));
    }

    #[test]
    fn zero_sized_workspace_has_a_single_cell() {
        let ws = Workspace::new(0, 0).unwrap();
        assert!(ws.ensure_valid_position(Position::new(0, 0)).is_ok());
        assert!(ws.ensure_valid_position(Position::new(1, 0)).is_err());
        assert!(ws.ensure_valid_position(Position::new(0, 1)).is_err());
    }

    #[test]
    fn accepts_exactly_the_bounded_rectangle() {
        for (max_x, max_y) in [(0, 0), (3, 1), (5, 5)] {
            let ws = Workspace::new(max_x, max_y).unwrap();
            for x in -2..=max_x + 2 {
                for y in -2..=max_y + 2 {
                    let p = Position::new(x.into(), y.into());
                    let inside = x >= 0 && y >= 0 && x <= max_x && y <= max_y;
                    match ws.ensure_valid_position(p) {
                        Ok(()) => assert!(inside, "{p} accepted in {max_x}x{max_y}"),
                        Err(e) => {
                            assert!(!inside, "{p} rejected in {max_x}x{max_y}");
                            assert_eq!(e, DomainError::OutOfBounds { position: p });
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn largest_bounds_reject_the_next_cell() {
        let ws = Workspace::new(i32::MAX, i32::MAX).unwrap();
        let corner = Position::new(i32::MAX.into(), i32::MAX.into());
        assert!(ws.ensure_valid_position(corner).is_ok());

        let past = corner.move_towards(Direction::E);
        assert_eq!(
            ws.ensure_valid_position(past),
            Err(DomainError::OutOfBounds { position: past })
        );
    }

    #[test]
    fn occupying_twice_fails_the_second_time() {
        let mut ws = workspace();
        let p = Position::new(1, 1);
        ws.occupy(p).unwrap();
        assert_eq!(ws.occupy(p), Err(DomainError::PositionOccupied { position: p }));
        assert_eq!(ws.occupied_count(), 1);
    }

    #[test]
    fn occupied_position_fails_validation() {
        let mut ws = workspace();
        let p = Position::new(2, 2);
        ws.occupy(p).unwrap();
        assert!(ws.is_occupied(p));
        assert_eq!(
            ws.ensure_valid_position(p),
            Err(DomainError::PositionOccupied { position: p })
        );
    }

    #[test]
    fn occupying_out_of_bounds_leaves_set_untouched() {
        let mut ws = workspace();
        let p = Position::new(9, 9);
        assert_eq!(ws.occupy(p), Err(DomainError::OutOfBounds { position: p }));
        assert_eq!(ws.occupied_count(), 0);
    }

    #[test]
    fn occupy_records_an_event() {
        let mut ws = workspace();
        assert_eq!(ws.version(), 1);
        assert_eq!(ws.uncommitted_events().len(), 1);

        ws.occupy(Position::new(3, 4)).unwrap();
        assert_eq!(ws.version(), 2);
        match ws.uncommitted_events().last() {
            Some(WorkspaceEvent::PositionOccupied { position, workspace_id, .. }) => {
                assert_eq!(*position, Position::new(3, 4));
                assert_eq!(workspace_id, &ws.id);
            }
            other => panic!("Expected PositionOccupied event, got {:?}", other),
        }

        ws.mark_events_as_committed();
        assert!(ws.uncommitted_events().is_empty());
        assert!(ws.is_occupied(Position::new(3, 4)));
    }
}
