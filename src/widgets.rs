mod select_field;
mod shrink_text;
mod stats_panel;
mod ticket_card;

pub use select_field::SelectField;
pub use shrink_text::ShrinkText;
pub use stats_panel::StatsPanel;
pub use ticket_card::TicketCard;
