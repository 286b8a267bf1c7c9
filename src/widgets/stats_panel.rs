use std::collections::BTreeMap;

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::stats::SnapshotStats;

/// Snapshot aggregates in three columns: by status, by priority and per
/// assigned agent.
#[derive(Clone, Debug)]
pub struct StatsPanel<'a> {
    pub stats: &'a SnapshotStats,
    pub border_style: Style,
    pub heading_style: Style,
    pub text_style: Style,
}

impl<'a> StatsPanel<'a> {
    pub fn new(stats: &'a SnapshotStats) -> Self {
        Self {
            stats,
            border_style: Style::default(),
            heading_style: Style::default().bold(),
            text_style: Style::default(),
        }
    }

    /// Rows needed to show every count, plus heading and borders.
    pub fn calculate_height(&self) -> u16 {
        let rows = self
            .stats
            .by_status
            .len()
            .max(self.stats.by_priority.len())
            .max(self.stats.by_agent.len());
        rows as u16 + 3
    }

    fn column(&self, heading: &'a str, counts: &'a BTreeMap<String, usize>) -> Text<'a> {
        let mut text = Text::from(Line::styled(heading, self.heading_style));
        for (name, count) in counts {
            text.extend::<Text>(
                Line::styled(
                    format!("{name} {}", count.separate_with_commas()),
                    self.text_style,
                )
                .into(),
            );
        }
        text
    }
}

impl<'a> Widget for StatsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(
                "Stats ({} tickets)",
                self.stats.total().separate_with_commas()
            ))
            .border_style(self.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ],
        )
        .split(inner);

        Paragraph::new(self.column("Status", &self.stats.by_status)).render(columns[0], buf);
        Paragraph::new(self.column("Priority", &self.stats.by_priority)).render(columns[1], buf);
        Paragraph::new(self.column("Agents", &self.stats.by_agent)).render(columns[2], buf);
    }
}
