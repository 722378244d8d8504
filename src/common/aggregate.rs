use crate::common::{DomainEvent, DomainResult};

pub trait AggregateRoot: Send + Sync {
    type Event: DomainEvent;

    fn aggregate_id(&self) -> &str;
    fn version(&self) -> u64;

    /// Apply an event to update the aggregate state
    fn apply(&mut self, event: &Self::Event) -> DomainResult<()>;

    /// Get uncommitted events
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Mark events as committed
    fn mark_events_as_committed(&mut self);

    /// Add a new event to the uncommitted events list
    fn add_event(&mut self, event: Self::Event);

    /// Apply an event and keep it in the uncommitted list
    fn record(&mut self, event: Self::Event) -> DomainResult<()> {
        self.apply(&event)?;
        self.add_event(event);
        Ok(())
    }
}
