//! Snapshot statistics
//!
//! The same aggregates the backend serves as chart data: ticket counts
//! by status, by priority, and per assigned agent. Unassigned tickets
//! contribute to no agent count.

use std::collections::BTreeMap;

use crate::ticket::Ticket;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotStats {
    pub by_status: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<String, usize>,
    pub by_agent: BTreeMap<String, usize>,
}

impl SnapshotStats {
    pub fn collect(tickets: &[Ticket]) -> Self {
        let mut stats = Self::default();
        for ticket in tickets {
            *stats.by_status.entry(ticket.status.clone()).or_default() += 1;
            *stats.by_priority.entry(ticket.priority.clone()).or_default() += 1;
            if let Some(agent) = &ticket.assigned_to {
                *stats.by_agent.entry(agent.clone()).or_default() += 1;
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.by_status.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::sample_tickets;

    #[test]
    fn test_collect_counts_by_status_and_priority() {
        let stats = SnapshotStats::collect(&sample_tickets());

        assert_eq!(
            stats.by_status,
            BTreeMap::from([
                (String::from("CLOSED"), 1),
                (String::from("IN_PROGRESS"), 2),
                (String::from("OPEN"), 1),
                (String::from("RESOLVED"), 1),
            ])
        );
        assert_eq!(
            stats.by_priority,
            BTreeMap::from([
                (String::from("HIGH"), 1),
                (String::from("LOW"), 3),
                (String::from("MEDIUM"), 1),
            ])
        );
    }

    #[test]
    fn test_collect_skips_unassigned_for_agents() {
        let stats = SnapshotStats::collect(&sample_tickets());

        assert_eq!(
            stats.by_agent,
            BTreeMap::from([(String::from("Arjun"), 2), (String::from("Mika"), 2)])
        );
    }

    #[test]
    fn test_total_matches_snapshot_size() {
        let tickets = sample_tickets();
        assert_eq!(SnapshotStats::collect(&tickets).total(), tickets.len());
    }

    #[test]
    fn test_empty_snapshot() {
        let stats = SnapshotStats::collect(&[]);
        assert_eq!(stats, SnapshotStats::default());
        assert_eq!(stats.total(), 0);
    }
}
