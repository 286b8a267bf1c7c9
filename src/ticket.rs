//! Ticket snapshot model
//!
//! Tickets are read from a JSON snapshot exported by a helpdesk backend.
//! Statuses and priorities are stored as the raw backend strings
//! (`"OPEN"`, `"IN_PROGRESS"`, `"LOW"`, ...) since the backend does not
//! constrain them to a closed set.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A filterable ticket attribute.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum FilterField {
    Status,
    Priority,
    Assigned,
    Agent,
    Subject,
    Creator,
}

impl FilterField {
    /// Fields whose criteria come from a fixed option list rather than
    /// free-form text.
    pub fn is_select(&self) -> bool {
        matches!(self, FilterField::Status | FilterField::Priority)
    }
}

fn default_status() -> String {
    String::from("OPEN")
}

fn default_priority() -> String {
    String::from("LOW")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Assignee name, or an empty string for unassigned tickets.
    pub fn agent(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or("")
    }

    /// The string a filter criterion is compared against.
    ///
    /// `Assigned` collapses to `"yes"` or `"no"`; the other fields expose
    /// the snapshot value verbatim.
    pub fn attribute(&self, field: FilterField) -> &str {
        match field {
            FilterField::Status => &self.status,
            FilterField::Priority => &self.priority,
            FilterField::Assigned => {
                if self.is_assigned() {
                    "yes"
                } else {
                    "no"
                }
            }
            FilterField::Agent => self.agent(),
            FilterField::Subject => &self.subject,
            FilterField::Creator => &self.created_by,
        }
    }
}

/// Load a ticket snapshot from disk.
///
/// Tickets are ordered newest-first, matching the admin listing order of
/// the backend this snapshot format comes from.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<Ticket>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;
    let mut tickets: Vec<Ticket> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("Failed to parse snapshot {}", path.display()))?;
    tickets.sort_by(|a, b| b.id.cmp(&a.id));
    Ok(tickets)
}

/// Distinct values of `field` across the snapshot, sorted, without the
/// empty string. Used to build select options for enumerated filters.
pub fn distinct_values(tickets: &[Ticket], field: FilterField) -> Vec<String> {
    let mut values: Vec<String> = tickets
        .iter()
        .map(|t| t.attribute(field).to_string())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}
