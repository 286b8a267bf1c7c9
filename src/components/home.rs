use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;
use tui_widget_list::{ListBuilder, ListView};

use super::Component;
use crate::{
    action::Action,
    config::Config,
    export,
    filter::{self, FilterCriteria, FormReader},
    stats::SnapshotStats,
    theme::Theme,
    ticket::{distinct_values, FilterField, Ticket},
    tui::Frame,
    widgets::{SelectField, StatsPanel, TicketCard},
};

/// An enumerated filter control cycling through `(any)` plus the
/// distinct snapshot values for its field.
struct SelectControl {
    options: Vec<String>,
    selected: usize,
}

impl SelectControl {
    fn new(values: Vec<String>) -> Self {
        let mut options = vec![String::new()];
        options.extend(values);
        Self {
            options,
            selected: 0,
        }
    }

    fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Filter bar, ticket list and stats panel.
///
/// Owns the snapshot and the six filter controls; every control
/// mutation re-applies the filters and reports the new visible count.
pub struct Home {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    theme: Theme,
    tickets: Vec<Ticket>,
    stats: SnapshotStats,
    visible: Vec<usize>,
    selected: Option<usize>,
    editing: bool,
    focus: usize,
    selects: HashMap<FilterField, SelectControl>,
    texts: HashMap<FilterField, TextArea<'static>>,
    show_stats: bool,
}

impl Home {
    pub fn new(tickets: Vec<Ticket>, theme: Theme) -> Self {
        let stats = SnapshotStats::collect(&tickets);
        let visible = (0..tickets.len()).collect();
        let mut selects = HashMap::new();
        let mut texts = HashMap::new();
        for field in FilterField::iter() {
            if field.is_select() {
                selects.insert(field, SelectControl::new(distinct_values(&tickets, field)));
            } else {
                let mut textarea = TextArea::default();
                textarea.set_cursor_line_style(Style::default());
                texts.insert(field, textarea);
            }
        }
        Self {
            command_tx: None,
            config: Config::default(),
            theme,
            tickets,
            stats,
            visible,
            selected: None,
            editing: false,
            focus: 0,
            selects,
            texts,
            show_stats: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The tickets the list currently shows, in snapshot order.
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        self.visible
            .iter()
            .filter_map(|&i| self.tickets.get(i))
            .collect()
    }

    fn slot(&self, name: &str) -> Style {
        self.config
            .styles
            .get(&self.theme)
            .and_then(|table| table.get(name))
            .copied()
            .unwrap_or_default()
    }

    /// Re-read the six controls and recompute the visible subset.
    ///
    /// The selection follows along: it clamps to the last visible row
    /// when the subset shrinks past it and clears when nothing is left.
    fn apply_filters(&mut self) -> Result<()> {
        let criteria = FilterCriteria::from_reader(self);
        self.visible = filter::apply(&criteria, &self.tickets);
        self.selected = match self.selected {
            _ if self.visible.is_empty() => None,
            Some(i) if i >= self.visible.len() => Some(self.visible.len() - 1),
            other => other,
        };
        if let Some(tx) = &self.command_tx {
            tx.send(Action::FilterApplied {
                visible: self.visible.len(),
                total: self.tickets.len(),
            })?;
        }
        Ok(())
    }

    /// Clear every control, which makes the whole snapshot visible.
    fn reset_filters(&mut self) -> Result<()> {
        for control in self.selects.values_mut() {
            control.reset();
        }
        for textarea in self.texts.values_mut() {
            textarea.select_all();
            textarea.cut();
        }
        self.apply_filters()
    }

    fn export(&self) -> Option<Action> {
        match export::export_csv(&self.tickets, &self.config.export_file) {
            Ok(count) => Some(Action::SystemMessage(format!(
                "[Exported] {count} tickets -> {}",
                self.config.export_file.display()
            ))),
            Err(e) => Some(Action::Error(e.to_string())),
        }
    }

    fn draw_filter_bar(&mut self, f: &mut Frame<'_>, area: Rect) {
        let border = self.slot("border");
        let border_focused = self.slot("border_focused");
        let text_style = self.slot("text");

        let columns = Layout::new(Direction::Horizontal, [Constraint::Ratio(1, 6); 6]).split(area);
        for (i, field) in FilterField::iter().enumerate() {
            let focused = self.editing && self.focus == i;
            let label = field.to_string();
            if field.is_select() {
                if let Some(control) = self.selects.get(&field) {
                    let mut select = SelectField::new(&label, control.value(), focused);
                    select.border_style = border;
                    select.border_focused_style = border_focused;
                    select.text_style = text_style;
                    f.render_widget(select, columns[i]);
                }
            } else if let Some(textarea) = self.texts.get_mut(&field) {
                textarea.set_block(
                    Block::bordered()
                        .title(label)
                        .border_style(if focused { border_focused } else { border }),
                );
                textarea.set_style(text_style);
                textarea.set_cursor_style(if focused {
                    Style::default().reversed()
                } else {
                    Style::default()
                });
                f.render_widget(&*textarea, columns[i]);
            }
        }
    }

    fn draw_list(&mut self, f: &mut Frame<'_>, area: Rect) {
        let meta = self.slot("meta");
        let accent = self.slot("accent");
        let padding = Padding::new(1, 1, 1, 0);

        if self.visible.is_empty() {
            let block = Block::default().padding(padding);
            let placeholder = Paragraph::new("No tickets match the current filters")
                .style(meta)
                .alignment(Alignment::Center);
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(placeholder, inner);
            return;
        }

        let cards: Vec<(TicketCard, u16)> = self
            .visible
            .iter()
            .filter_map(|&i| self.tickets.get(i))
            .map(|ticket| {
                let mut card = TicketCard::new(ticket.clone(), area, padding);
                card.meta_style = meta;
                card.accent_style = accent;
                let height = card.calculate_height(&area);
                (card, height)
            })
            .collect();
        let count = cards.len();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(self.selected);

        let list = ListView::new(builder, count).block(Block::default().padding(padding));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_stats(&mut self, f: &mut Frame<'_>, area: Rect) {
        let mut panel = StatsPanel::new(&self.stats);
        panel.border_style = self.slot("border");
        panel.heading_style = self.slot("title");
        panel.text_style = self.slot("text");
        f.render_widget(panel, area);
    }
}

impl FormReader for Home {
    fn value(&self, field: FilterField) -> Option<String> {
        if field.is_select() {
            self.selects.get(&field).map(|c| c.value().to_string())
        } else {
            self.texts.get(&field).map(|t| t.lines().join("\n"))
        }
    }
}

impl Component for Home {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn init(&mut self, _area: Rect) -> Result<()> {
        self.apply_filters()
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.editing {
            return Ok(None);
        }
        let fields: Vec<FilterField> = FilterField::iter().collect();
        let field = fields[self.focus];
        match key.code {
            // CloseFilter arrives through the Filter keymap
            KeyCode::Esc => {}
            KeyCode::Tab => self.focus = (self.focus + 1) % fields.len(),
            KeyCode::BackTab => self.focus = (self.focus + fields.len() - 1) % fields.len(),
            // single-line controls
            KeyCode::Enter => {}
            KeyCode::Down | KeyCode::Char(' ') if field.is_select() => {
                if let Some(control) = self.selects.get_mut(&field) {
                    control.cycle(true);
                }
                self.apply_filters()?;
            }
            KeyCode::Up if field.is_select() => {
                if let Some(control) = self.selects.get_mut(&field) {
                    control.cycle(false);
                }
                self.apply_filters()?;
            }
            _ if !field.is_select() => {
                if let Some(textarea) = self.texts.get_mut(&field) {
                    if textarea.input(crossterm::event::Event::Key(key)) {
                        self.apply_filters()?;
                    }
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusFilter => self.editing = true,
            Action::CloseFilter => self.editing = false,
            Action::ResetFilters => self.reset_filters()?,
            Action::ToggleStats => self.show_stats = !self.show_stats,
            Action::ThemeChanged(theme) => self.theme = theme,
            Action::ExportCsv => return Ok(self.export()),
            Action::ScrollUp => {
                self.selected = match self.selected {
                    _ if self.visible.is_empty() => None,
                    Some(i) if i > 0 => Some(i - 1),
                    _ => Some(0),
                }
            }
            Action::ScrollDown => {
                self.selected = match self.selected {
                    _ if self.visible.is_empty() => None,
                    Some(i) if i + 1 < self.visible.len() => Some(i + 1),
                    Some(i) => Some(i),
                    None => Some(0),
                }
            }
            Action::ScrollToTop => {
                self.selected = if self.visible.is_empty() {
                    None
                } else {
                    Some(0)
                }
            }
            Action::ScrollToBottom => {
                self.selected = if self.visible.is_empty() {
                    None
                } else {
                    Some(self.visible.len() - 1)
                }
            }
            Action::Unselect => self.selected = None,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(Block::default().style(self.slot("base")), area);

        // the bottom two rows belong to the status bar
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ],
        )
        .split(area);

        self.draw_filter_bar(f, layout[0]);
        if self.show_stats {
            self.draw_stats(f, layout[1]);
        } else {
            self.draw_list(f, layout[1]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::test_helpers::sample_tickets;

    fn home() -> (Home, UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut home = Home::new(sample_tickets(), Theme::Light);
        home.register_action_handler(tx).expect("register tx");
        (home, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_str(home: &mut Home, s: &str) {
        for c in s.chars() {
            home.handle_key_events(key(KeyCode::Char(c)))
                .expect("key handled");
        }
    }

    fn last_filter_applied(rx: &mut UnboundedReceiver<Action>) -> Option<(usize, usize)> {
        let mut last = None;
        while let Ok(action) = rx.try_recv() {
            if let Action::FilterApplied { visible, total } = action {
                last = Some((visible, total));
            }
        }
        last
    }

    #[test]
    fn test_new_shows_whole_snapshot() {
        let (home, _rx) = home();
        assert_eq!(home.visible_tickets().len(), 5);
        assert_eq!(home.selected_index(), None);
        assert!(!home.is_editing());
    }

    #[test]
    fn test_keys_ignored_outside_filter_mode() {
        let (mut home, _rx) = home();
        type_str(&mut home, "zzz");
        assert_eq!(home.visible_tickets().len(), 5);
    }

    #[test]
    fn test_typing_into_subject_filters_the_list() {
        let (mut home, mut rx) = home();
        home.update(Action::FocusFilter).expect("enter filter mode");
        // focus order: Status, Priority, Assigned, Agent, Subject
        for _ in 0..4 {
            home.handle_key_events(key(KeyCode::Tab)).expect("tab");
        }
        type_str(&mut home, "print");

        let visible = home.visible_tickets();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].subject, "Printer out of toner");
        assert_eq!(last_filter_applied(&mut rx), Some((1, 5)));
    }

    #[test]
    fn test_select_cycles_through_distinct_statuses() {
        let (mut home, _rx) = home();
        home.update(Action::FocusFilter).expect("enter filter mode");

        // sorted distinct statuses: CLOSED, IN_PROGRESS, OPEN, RESOLVED
        home.handle_key_events(key(KeyCode::Char(' '))).expect("cycle");
        assert_eq!(home.value(FilterField::Status).as_deref(), Some("CLOSED"));
        assert_eq!(home.visible_tickets().len(), 1);

        home.handle_key_events(key(KeyCode::Up)).expect("cycle back");
        assert_eq!(home.value(FilterField::Status).as_deref(), Some(""));
        assert_eq!(home.visible_tickets().len(), 5);
    }

    #[test]
    fn test_backtab_wraps_to_last_control() {
        let (mut home, _rx) = home();
        home.update(Action::FocusFilter).expect("enter filter mode");
        home.handle_key_events(key(KeyCode::BackTab)).expect("backtab");
        type_str(&mut home, "dana");

        // last control is Creator
        assert_eq!(home.value(FilterField::Creator).as_deref(), Some("dana"));
        assert_eq!(home.visible_tickets().len(), 2);
    }

    #[test]
    fn test_enter_is_ignored_in_text_controls() {
        let (mut home, _rx) = home();
        home.update(Action::FocusFilter).expect("enter filter mode");
        for _ in 0..4 {
            home.handle_key_events(key(KeyCode::Tab)).expect("tab");
        }
        type_str(&mut home, "vpn");
        home.handle_key_events(key(KeyCode::Enter)).expect("enter");

        assert_eq!(home.value(FilterField::Subject).as_deref(), Some("vpn"));
    }

    #[test]
    fn test_reset_filters_restores_everything() {
        let (mut home, mut rx) = home();
        home.update(Action::FocusFilter).expect("enter filter mode");
        home.handle_key_events(key(KeyCode::Char(' '))).expect("cycle");
        for _ in 0..4 {
            home.handle_key_events(key(KeyCode::Tab)).expect("tab");
        }
        type_str(&mut home, "no such subject");
        assert_eq!(home.visible_tickets().len(), 0);

        home.update(Action::ResetFilters).expect("reset");
        assert_eq!(home.visible_tickets().len(), 5);
        assert_eq!(home.value(FilterField::Status).as_deref(), Some(""));
        assert_eq!(home.value(FilterField::Subject).as_deref(), Some(""));
        assert_eq!(last_filter_applied(&mut rx), Some((5, 5)));
    }

    #[test]
    fn test_scroll_saturates_at_both_ends() {
        let (mut home, _rx) = home();

        home.update(Action::ScrollUp).expect("scroll");
        assert_eq!(home.selected_index(), Some(0));
        home.update(Action::ScrollUp).expect("scroll");
        assert_eq!(home.selected_index(), Some(0));

        home.update(Action::ScrollToBottom).expect("scroll");
        assert_eq!(home.selected_index(), Some(4));
        home.update(Action::ScrollDown).expect("scroll");
        assert_eq!(home.selected_index(), Some(4));

        home.update(Action::ScrollToTop).expect("scroll");
        assert_eq!(home.selected_index(), Some(0));
        home.update(Action::Unselect).expect("unselect");
        assert_eq!(home.selected_index(), None);
    }

    #[test]
    fn test_selection_clamps_when_filter_shrinks_the_list() {
        let (mut home, _rx) = home();
        home.update(Action::ScrollToBottom).expect("scroll");
        assert_eq!(home.selected_index(), Some(4));

        home.update(Action::FocusFilter).expect("enter filter mode");
        for _ in 0..4 {
            home.handle_key_events(key(KeyCode::Tab)).expect("tab");
        }
        type_str(&mut home, "vpn");

        assert_eq!(home.visible_tickets().len(), 1);
        assert_eq!(home.selected_index(), Some(0));

        type_str(&mut home, "xxx");
        assert_eq!(home.visible_tickets().len(), 0);
        assert_eq!(home.selected_index(), None);
    }

    #[test]
    fn test_export_reports_row_count() {
        let (mut home, _rx) = home();
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config::default();
        config.export_file = dir.path().join("out.csv");
        home.register_config_handler(config).expect("config");

        let action = home.update(Action::ExportCsv).expect("export");
        match action {
            Some(Action::SystemMessage(msg)) => {
                assert!(msg.starts_with("[Exported] 5 tickets -> "));
            }
            other => panic!("expected a system message, got {other:?}"),
        }
    }

    #[test]
    fn test_export_of_empty_snapshot_reports_error() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut home = Home::new(Vec::new(), Theme::Light);
        home.register_action_handler(tx).expect("register tx");

        let action = home.update(Action::ExportCsv).expect("export");
        assert_eq!(
            action,
            Some(Action::Error(String::from("No tickets to export")))
        );
    }

    #[test]
    fn test_theme_change_is_tracked() {
        let (mut home, _rx) = home();
        home.update(Action::ThemeChanged(Theme::Dark)).expect("theme");
        assert_eq!(home.theme, Theme::Dark);
    }
}
