//! CSV export
//!
//! Exports the full snapshot, ignoring any active filters, in the same
//! column layout the backend's export endpoint produced.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::ticket::Ticket;

/// Default export file name.
pub const EXPORT_FILE: &str = "tickets_export.csv";

const HEADER: [&str; 6] = ["ID", "Subject", "Status", "Priority", "Assigned To", "Created By"];

/// Quote a field when it contains a delimiter, quote or line break.
/// Embedded quotes are doubled.
fn field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write `tickets` to `path` as CSV and return the number of data rows.
///
/// An empty snapshot is an error: there is nothing to export and no
/// file is written.
pub fn export_csv<P: AsRef<Path>>(tickets: &[Ticket], path: P) -> Result<usize> {
    if tickets.is_empty() {
        return Err(eyre!("No tickets to export"));
    }

    let mut out = String::new();
    out.push_str(&HEADER.join(","));
    out.push_str("\r\n");
    for ticket in tickets {
        let row = [
            ticket.id.to_string(),
            field(&ticket.subject),
            field(&ticket.status),
            field(&ticket.priority),
            field(ticket.agent()),
            field(&ticket.created_by),
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    let path = path.as_ref();
    fs::write(path, out).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(tickets.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::{sample_tickets, TicketBuilder};

    #[test]
    fn test_export_writes_header_and_rows() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(EXPORT_FILE);

        let written = export_csv(&sample_tickets(), &path)?;
        assert_eq!(written, 5);

        let raw = fs::read_to_string(&path)?;
        let mut lines = raw.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Subject,Status,Priority,Assigned To,Created By")
        );
        assert_eq!(lines.next(), Some("5,Cannot log in to portal,OPEN,HIGH,,Dana"));
        assert_eq!(
            lines.next(),
            Some("4,Printer out of toner,IN_PROGRESS,LOW,Arjun,Lee")
        );
        Ok(())
    }

    #[test]
    fn test_export_leaves_assignee_empty_when_unassigned() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(EXPORT_FILE);

        let tickets = vec![TicketBuilder::new(1, "Loose cable").created_by("Sam").build()];
        export_csv(&tickets, &path)?;

        let raw = fs::read_to_string(&path)?;
        assert!(raw.contains("1,Loose cable,OPEN,LOW,,Sam"));
        Ok(())
    }

    #[test]
    fn test_export_quotes_embedded_delimiters() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(EXPORT_FILE);

        let tickets = vec![TicketBuilder::new(1, "Mouse, keyboard and \"dock\"")
            .created_by("Sam")
            .build()];
        export_csv(&tickets, &path)?;

        let raw = fs::read_to_string(&path)?;
        assert!(raw.contains(r#"1,"Mouse, keyboard and ""dock""",OPEN,LOW,,Sam"#));
        Ok(())
    }

    #[test]
    fn test_export_uses_crlf_line_endings() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(EXPORT_FILE);

        export_csv(&sample_tickets(), &path)?;
        let raw = fs::read_to_string(&path)?;
        assert!(raw.ends_with("\r\n"));
        assert_eq!(raw.matches("\r\n").count(), 6);
        Ok(())
    }

    #[test]
    fn test_export_empty_snapshot_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(EXPORT_FILE);

        let err = export_csv(&[], &path).expect_err("empty snapshot must not export");
        assert_eq!(err.to_string(), "No tickets to export");
        assert!(!path.exists());
    }
}
