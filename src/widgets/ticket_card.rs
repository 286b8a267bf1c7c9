use ratatui::{prelude::*, widgets::*};

use crate::ticket::Ticket;
use crate::widgets::ShrinkText;

/// One ticket in the dashboard list.
///
/// Renders as subject, a metadata line, the wrapped description, an
/// optional rating line and a separator.
#[derive(Clone, Debug)]
pub struct TicketCard {
    pub ticket: Ticket,
    pub area: Rect,
    pub padding: Padding, // Only use to calc width/height
    pub highlight: bool,
    pub meta_style: Style,
    pub accent_style: Style,
}

impl TicketCard {
    pub fn new(ticket: Ticket, area: Rect, padding: Padding) -> Self {
        TicketCard {
            ticket,
            area,
            padding,
            highlight: false,
            meta_style: Style::default().fg(Color::Gray),
            accent_style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn created_at(&self) -> String {
        self.ticket.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// `"★★★★☆"` for a four-star ticket; empty when unrated.
    pub fn stars(&self) -> String {
        match self.ticket.rating {
            Some(rating) => {
                let filled = usize::from(rating.min(5));
                format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
            }
            None => String::new(),
        }
    }

    fn content_width(&self) -> u16 {
        self.area
            .width
            .saturating_sub(self.padding.left + self.padding.right)
    }

    fn fixed_lines(&self) -> u16 {
        // subject + meta + separator, plus the rating line when rated
        if self.ticket.rating.is_some() {
            4
        } else {
            3
        }
    }

    fn description(&self) -> Text<'_> {
        let available_height = self
            .area
            .height
            .saturating_sub(self.padding.top + self.padding.bottom + self.fixed_lines());
        ShrinkText::new(
            self.ticket.description.as_str(),
            self.content_width() as usize,
            available_height as usize,
        )
        .into()
    }

    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let mut sized = self.clone();
        sized.area = *area;
        sized.fixed_lines() + sized.description().height() as u16
    }

    fn subject_line(&self) -> Line<'_> {
        let style = if self.highlight {
            Style::default().bold().reversed()
        } else {
            Style::default().bold()
        };
        Line::styled(self.ticket.subject.as_str(), style)
    }

    fn meta_line(&self) -> Line<'_> {
        let assignee = if self.ticket.is_assigned() {
            Span::styled(self.ticket.agent(), self.meta_style)
        } else {
            Span::styled("unassigned", self.meta_style.italic())
        };
        Line::from(vec![
            Span::styled(format!("#{}", self.ticket.id), self.meta_style),
            Span::raw(" "),
            Span::styled(self.ticket.status.as_str(), self.accent_style),
            Span::raw(" "),
            Span::styled(self.ticket.priority.as_str(), self.accent_style),
            Span::raw(" "),
            Span::styled(format!("by {}", self.ticket.created_by), self.meta_style),
            Span::raw(" "),
            assignee,
            Span::raw(" "),
            Span::styled(self.created_at(), self.meta_style),
        ])
    }

    fn rating_line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(self.stars(), self.accent_style)];
        if let Some(feedback) = &self.ticket.feedback {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(feedback.as_str(), self.meta_style));
        }
        Line::from(spans)
    }
}

impl Widget for TicketCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text = Text::default();
        text.extend::<Text>(self.subject_line().into());
        text.extend::<Text>(self.meta_line().into());
        text.extend(self.description());
        if self.ticket.rating.is_some() {
            text.extend::<Text>(self.rating_line().into());
        }
        text.extend(Text::styled(
            "─".repeat(self.content_width() as usize),
            self.meta_style,
        ));

        Paragraph::new(text).render(area, buf);
    }
}
