use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::action::Action;
use crate::components::Component;
use crate::config::Config;
use crate::theme::Theme;
use crate::tui::Frame;

/// Two bottom lines: a summary (visible/total counts and the active
/// theme) and the most recent status message.
pub struct StatusBar {
    config: Config,
    theme: Theme,
    visible: usize,
    total: usize,
    message: Option<String>,
}

impl StatusBar {
    pub fn new(theme: Theme, total: usize) -> Self {
        Self {
            config: Config::default(),
            theme,
            visible: total,
            total,
            message: None,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} of {} tickets  theme:{}",
            self.visible.separate_with_commas(),
            self.total.separate_with_commas(),
            self.theme
        )
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FilterApplied { visible, total } => {
                self.visible = visible;
                self.total = total;
            }
            Action::ThemeChanged(theme) => self.theme = theme,
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(message),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let styles = self
            .config
            .styles
            .get(&self.theme)
            .cloned()
            .unwrap_or_default();
        let bar_style = styles.get("status_bar").copied().unwrap_or_default();
        let text_style = styles.get("text").copied().unwrap_or_default();

        let status_line = Paragraph::new(self.summary()).style(bar_style);
        f.render_widget(status_line, layout[1]);

        let message_line =
            Paragraph::new(self.message.clone().unwrap_or_default()).style(text_style);
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_starts_with_everything_visible() {
        let bar = StatusBar::new(Theme::Light, 12);
        assert_eq!(bar.summary(), "12 of 12 tickets  theme:Light");
    }

    #[test]
    fn test_filter_applied_updates_counts() {
        let mut bar = StatusBar::new(Theme::Light, 12);
        bar.update(Action::FilterApplied {
            visible: 3,
            total: 12,
        })
        .expect("update");
        assert_eq!(bar.summary(), "3 of 12 tickets  theme:Light");
    }

    #[test]
    fn test_theme_change_updates_summary() {
        let mut bar = StatusBar::new(Theme::Light, 2);
        bar.update(Action::ThemeChanged(Theme::Dark)).expect("update");
        assert_eq!(bar.summary(), "2 of 2 tickets  theme:Dark");
    }

    #[test]
    fn test_large_counts_are_humanized() {
        let bar = StatusBar::new(Theme::Dark, 10_000);
        assert_eq!(bar.summary(), "10,000 of 10,000 tickets  theme:Dark");
    }

    #[test]
    fn test_messages_overwrite_each_other() {
        let mut bar = StatusBar::new(Theme::Light, 1);
        assert_eq!(bar.message(), None);

        bar.update(Action::SystemMessage(String::from("[Exported] 1 tickets")))
            .expect("update");
        assert_eq!(bar.message(), Some("[Exported] 1 tickets"));

        bar.update(Action::Error(String::from("No tickets to export")))
            .expect("update");
        assert_eq!(bar.message(), Some("No tickets to export"));
    }
}
