//! Ticket filtering
//!
//! Matching is asymmetric: enumerated criteria (status, priority,
//! assigned) compare exactly and case-sensitively, while free-text
//! criteria (agent, subject, creator) match as case-insensitive
//! substrings. An empty criterion matches everything.

use crate::ticket::{FilterField, Ticket};

/// Read access to the current values of the six filter controls.
///
/// `None` means the control is absent. Absent controls contribute an
/// empty criterion rather than an error.
pub trait FormReader {
    fn value(&self, field: FilterField) -> Option<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: String,
    pub priority: String,
    pub assigned: String,
    pub agent: String,
    pub subject: String,
    pub creator: String,
}

impl FilterCriteria {
    /// Snapshot the six control values.
    ///
    /// Criteria are rebuilt fresh on every apply and never cached across
    /// edits, so stale control state cannot leak into a match.
    pub fn from_reader<R: FormReader>(reader: &R) -> Self {
        let read = |field| reader.value(field).unwrap_or_default();
        Self {
            status: read(FilterField::Status),
            priority: read(FilterField::Priority),
            assigned: read(FilterField::Assigned),
            agent: read(FilterField::Agent),
            subject: read(FilterField::Subject),
            creator: read(FilterField::Creator),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.priority.is_empty()
            && self.assigned.is_empty()
            && self.agent.is_empty()
            && self.subject.is_empty()
            && self.creator.is_empty()
    }

    fn exact(criterion: &str, attribute: &str) -> bool {
        criterion.is_empty() || attribute == criterion
    }

    fn contains(criterion: &str, attribute: &str) -> bool {
        criterion.is_empty() || attribute.to_lowercase().contains(&criterion.to_lowercase())
    }

    /// A ticket stays visible iff all six criteria match it.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        Self::exact(&self.status, ticket.attribute(FilterField::Status))
            && Self::exact(&self.priority, ticket.attribute(FilterField::Priority))
            && Self::exact(&self.assigned, ticket.attribute(FilterField::Assigned))
            && Self::contains(&self.agent, ticket.attribute(FilterField::Agent))
            && Self::contains(&self.subject, ticket.attribute(FilterField::Subject))
            && Self::contains(&self.creator, ticket.attribute(FilterField::Creator))
    }
}

/// Indices of the tickets that remain visible under `criteria`,
/// preserving snapshot order.
pub fn apply(criteria: &FilterCriteria, tickets: &[Ticket]) -> Vec<usize> {
    tickets
        .iter()
        .enumerate()
        .filter(|(_, ticket)| criteria.matches(ticket))
        .map(|(i, _)| i)
        .collect()
}
