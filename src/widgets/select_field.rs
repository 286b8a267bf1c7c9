use ratatui::{prelude::*, widgets::*};

/// A single enumerated filter control.
///
/// Shows the currently selected option inside a titled border; an empty
/// value renders as `(any)`, mirroring the blank option of a select.
#[derive(Clone, Debug)]
pub struct SelectField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub border_style: Style,
    pub border_focused_style: Style,
    pub text_style: Style,
}

impl<'a> SelectField<'a> {
    pub fn new(label: &'a str, value: &'a str, focused: bool) -> Self {
        Self {
            label,
            value,
            focused,
            border_style: Style::default(),
            border_focused_style: Style::default().fg(Color::Cyan),
            text_style: Style::default(),
        }
    }

    fn display_value(&self) -> &str {
        if self.value.is_empty() {
            "(any)"
        } else {
            self.value
        }
    }
}

impl<'a> Widget for SelectField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.border_focused_style
        } else {
            self.border_style
        };
        let block = Block::bordered()
            .title(self.label)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.display_value())
            .style(self.text_style)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    fn probe(buf: &Buffer) -> String {
        buf.content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<Vec<_>>()
            .join("")
    }

    #[rstest]
    #[case("", "(any)")]
    #[case("OPEN", "OPEN")]
    fn test_empty_value_renders_as_any(#[case] value: &str, #[case] shown: &str) {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SelectField::new("Status", value, false).render(area, &mut buf);

        let rendered = probe(&buf);
        assert!(rendered.contains("Status"));
        assert!(rendered.contains(shown));
    }

    #[test]
    fn test_focus_changes_border_style() {
        let area = Rect::new(0, 0, 20, 3);

        let mut plain = Buffer::empty(area);
        SelectField::new("Status", "", false).render(area, &mut plain);
        let mut focused = Buffer::empty(area);
        SelectField::new("Status", "", true).render(area, &mut focused);

        assert_ne!(plain[(0, 0)].style(), focused[(0, 0)].style());
    }
}
