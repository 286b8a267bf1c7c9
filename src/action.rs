use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Key(KeyEvent),
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Unselect,
    FocusFilter,
    CloseFilter,
    ResetFilters,
    FilterApplied { visible: usize, total: usize },
    ToggleTheme,
    ThemeChanged(Theme),
    ToggleStats,
    ExportCsv,
    SystemMessage(String),
}
