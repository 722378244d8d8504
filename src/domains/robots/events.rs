use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkspaceEvent {
    WorkspaceCreated {
        workspace_id: String,
        max_x: i32,
        max_y: i32,
        timestamp: DateTime<Utc>,
    },
    PositionOccupied {
        workspace_id: String,
        position: Position,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for WorkspaceEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WorkspaceEvent::WorkspaceCreated { .. } => "WorkspaceCreated",
            WorkspaceEvent::PositionOccupied { .. } => "PositionOccupied",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            WorkspaceEvent::WorkspaceCreated { workspace_id, .. } => workspace_id,
            WorkspaceEvent::PositionOccupied { workspace_id, .. } => workspace_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            WorkspaceEvent::WorkspaceCreated { timestamp, .. } => *timestamp,
            WorkspaceEvent::PositionOccupied { timestamp, .. } => *timestamp,
        }
    }
}
