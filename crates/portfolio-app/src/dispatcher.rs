//! Event dispatch - Drains aggregates after a use case commits
//!
//! Events are published in the order they were recorded. The aggregate is
//! cleared only when every event was published. On failure all pending
//! events stay put, including the ones already published, so a retry sends
//! those again: delivery is at-least-once and subscribers must tolerate
//! duplicates.

use portfolio_domain::{PortfolioEvent, PortfolioProjectAggregate};
use tracing::info;

/// Somewhere domain events can be sent
pub trait EventPublisher {
    fn publish(&mut self, event: &PortfolioEvent) -> anyhow::Result<()>;
}

/// Publishes events as structured log lines
#[derive(Debug, Clone, Default)]
pub struct TracingPublisher;

impl EventPublisher for TracingPublisher {
    fn publish(&mut self, event: &PortfolioEvent) -> anyhow::Result<()> {
        info!(
            event_type = event.event_type(),
            project_id = %event.project_id(),
            occurred_at = %event.occurred_at(),
            "{}",
            event
        );
        Ok(())
    }
}

/// Keeps published events in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    events: Vec<PortfolioEvent>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PortfolioEvent] {
        &self.events
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&mut self, event: &PortfolioEvent) -> anyhow::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Publish every pending event, then clear the aggregate
///
/// Returns the number of events published. A failed publish leaves every
/// event pending, so retrying may publish some of them twice.
pub fn dispatch<P: EventPublisher + ?Sized>(
    aggregate: &mut PortfolioProjectAggregate,
    publisher: &mut P,
) -> anyhow::Result<usize> {
    let count = aggregate.domain_events().len();
    for event in aggregate.domain_events() {
        publisher.publish(event)?;
    }
    aggregate.clear_domain_events();
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_domain::{ProjectId, ProjectName, ProjectType};

    struct FailingPublisher;

    impl EventPublisher for FailingPublisher {
        fn publish(&mut self, _event: &PortfolioEvent) -> anyhow::Result<()> {
            anyhow::bail!("broker unavailable")
        }
    }

    /// Accepts a fixed number of events, then fails until reset
    struct FlakyPublisher {
        remaining: usize,
        delivered: Vec<PortfolioEvent>,
    }

    impl EventPublisher for FlakyPublisher {
        fn publish(&mut self, event: &PortfolioEvent) -> anyhow::Result<()> {
            if self.remaining == 0 {
                anyhow::bail!("connection reset");
            }
            self.remaining -= 1;
            self.delivered.push(event.clone());
            Ok(())
        }
    }

    fn aggregate() -> PortfolioProjectAggregate {
        PortfolioProjectAggregate::new(
            ProjectId::new(),
            ProjectName::create("Dispatch Test").unwrap(),
            "",
            ProjectType::Personal,
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_dispatch_publishes_in_order_and_clears() {
        let mut aggregate = aggregate();
        aggregate.mark_as_featured();
        aggregate.archive();

        let mut publisher = RecordingPublisher::new();
        let published = dispatch(&mut aggregate, &mut publisher).unwrap();

        assert_eq!(published, 3);
        assert!(aggregate.domain_events().is_empty());

        let types: Vec<_> = publisher.events().iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            ["project.created", "project.featured", "project.archived"]
        );
    }

    #[test]
    fn test_dispatch_with_nothing_pending() {
        let mut aggregate = aggregate();
        aggregate.clear_domain_events();

        let mut publisher = RecordingPublisher::new();
        assert_eq!(dispatch(&mut aggregate, &mut publisher).unwrap(), 0);
        assert!(publisher.events().is_empty());
    }

    #[test]
    fn test_failed_publish_keeps_events() {
        let mut aggregate = aggregate();

        let result = dispatch(&mut aggregate, &mut FailingPublisher);
        assert!(result.is_err());
        assert_eq!(aggregate.domain_events().len(), 1);
    }

    #[test]
    fn test_retry_after_partial_failure_republishes() {
        let mut aggregate = aggregate();
        aggregate.mark_as_featured();
        aggregate.archive();

        let mut publisher = FlakyPublisher {
            remaining: 1,
            delivered: Vec::new(),
        };
        assert!(dispatch(&mut aggregate, &mut publisher).is_err());
        assert_eq!(aggregate.domain_events().len(), 3);

        publisher.remaining = usize::MAX;
        assert_eq!(dispatch(&mut aggregate, &mut publisher).unwrap(), 3);
        assert!(aggregate.domain_events().is_empty());

        let types: Vec<_> = publisher.delivered.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            [
                "project.created",
                "project.created",
                "project.featured",
                "project.archived"
            ]
        );
    }

    #[test]
    fn test_tracing_publisher_accepts_events() {
        let mut aggregate = aggregate();
        assert_eq!(dispatch(&mut aggregate, &mut TracingPublisher).unwrap(), 1);
    }
}
