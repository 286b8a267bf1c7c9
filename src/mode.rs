use serde::{Deserialize, Serialize};

/// Keymap modes.
///
/// `Browse` routes keys through the configurable keybindings; `Filter`
/// sends them to the focused filter control instead.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Browse,
    Filter,
}
