//! Test fixtures shared by unit and integration tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::ticket::Ticket;

/// Fluent builder for ticket fixtures.
///
/// Defaults mirror a freshly created backend ticket: status `OPEN`,
/// priority `LOW`, unassigned, unrated.
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: u64, subject: &str) -> Self {
        Self {
            ticket: Ticket {
                id,
                subject: subject.to_string(),
                description: String::new(),
                status: String::from("OPEN"),
                priority: String::from("LOW"),
                created_by: String::from("tester"),
                assigned_to: None,
                rating: None,
                feedback: None,
                created_at: fixture_time(0),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ticket.description = description.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.ticket.priority = priority.to_string();
        self
    }

    pub fn created_by(mut self, name: &str) -> Self {
        self.ticket.created_by = name.to_string();
        self
    }

    pub fn assigned_to(mut self, name: &str) -> Self {
        self.ticket.assigned_to = Some(name.to_string());
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.ticket.rating = Some(rating);
        self
    }

    pub fn feedback(mut self, feedback: &str) -> Self {
        self.ticket.feedback = Some(feedback.to_string());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.ticket.created_at = created_at;
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// A deterministic timestamp, `offset_hours` after 2024-03-01 09:30 UTC.
pub fn fixture_time(offset_hours: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_709_285_400 + offset_hours * 3600, 0)
        .single()
        .unwrap_or_default()
}

/// A small realistic snapshot covering the attribute combinations the
/// filter cares about: mixed statuses and priorities, assigned and
/// unassigned tickets, one rated ticket.
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new(5, "Cannot log in to portal")
            .description("Login fails with a 500 after the password screen.")
            .status("OPEN")
            .priority("HIGH")
            .created_by("Dana")
            .created_at(fixture_time(4))
            .build(),
        TicketBuilder::new(4, "Printer out of toner")
            .status("IN_PROGRESS")
            .priority("LOW")
            .created_by("Lee")
            .assigned_to("Arjun")
            .created_at(fixture_time(3))
            .build(),
        TicketBuilder::new(3, "VPN drops every hour")
            .status("IN_PROGRESS")
            .priority("MEDIUM")
            .created_by("Dana")
            .assigned_to("Mika")
            .created_at(fixture_time(2))
            .build(),
        TicketBuilder::new(2, "Update billing address")
            .status("RESOLVED")
            .priority("LOW")
            .created_by("Sam")
            .assigned_to("Arjun")
            .rating(4)
            .feedback("Quick turnaround")
            .created_at(fixture_time(1))
            .build(),
        TicketBuilder::new(1, "Broken keyboard")
            .status("CLOSED")
            .priority("LOW")
            .created_by("Lee")
            .assigned_to("Mika")
            .rating(5)
            .created_at(fixture_time(0))
            .build(),
    ]
}
