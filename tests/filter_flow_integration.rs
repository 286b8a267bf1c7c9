use crossterm::event::{KeyCode, KeyEvent};
use pretty_assertions::assert_eq;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use desktui::{
    action::Action,
    components::{Component, Home, StatusBar},
    filter::{self, FilterCriteria},
    test_helpers::sample_tickets,
    theme::Theme,
};

fn forward(rx: &mut UnboundedReceiver<Action>, status_bar: &mut StatusBar) {
    while let Ok(action) = rx.try_recv() {
        status_bar.update(action).expect("status bar update");
    }
}

fn type_str(home: &mut Home, s: &str) {
    for c in s.chars() {
        home.handle_key_events(KeyEvent::from(KeyCode::Char(c)))
            .expect("key handled");
    }
}

fn focus_subject(home: &mut Home) {
    // focus order: Status, Priority, Assigned, Agent, Subject, Creator
    for _ in 0..4 {
        home.handle_key_events(KeyEvent::from(KeyCode::Tab))
            .expect("tab");
    }
}

/// The visible count that Home reports flows into the status bar
/// summary, the way the app loop forwards actions between components.
#[test]
fn test_filter_flow_updates_status_bar() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut home = Home::new(sample_tickets(), Theme::Light);
    let mut status_bar = StatusBar::new(Theme::Light, 5);
    home.register_action_handler(tx).expect("register tx");

    home.update(Action::FocusFilter).expect("enter filter mode");
    focus_subject(&mut home);
    type_str(&mut home, "vpn");

    forward(&mut rx, &mut status_bar);
    assert_eq!(status_bar.summary(), "1 of 5 tickets  theme:Light");
    assert_eq!(home.visible_tickets()[0].subject, "VPN drops every hour");
}

#[test]
fn test_reset_makes_every_ticket_visible_again() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut home = Home::new(sample_tickets(), Theme::Light);
    let mut status_bar = StatusBar::new(Theme::Light, 5);
    home.register_action_handler(tx).expect("register tx");

    home.update(Action::FocusFilter).expect("enter filter mode");
    focus_subject(&mut home);
    type_str(&mut home, "nothing matches this");
    assert_eq!(home.visible_tickets().len(), 0);

    home.update(Action::ResetFilters).expect("reset");
    forward(&mut rx, &mut status_bar);

    assert_eq!(home.visible_tickets().len(), 5);
    assert_eq!(status_bar.summary(), "5 of 5 tickets  theme:Light");
}

#[test]
fn test_close_filter_stops_routing_keys_to_controls() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut home = Home::new(sample_tickets(), Theme::Light);
    home.register_action_handler(tx).expect("register tx");

    home.update(Action::FocusFilter).expect("enter filter mode");
    assert!(home.is_editing());
    home.update(Action::CloseFilter).expect("leave filter mode");
    assert!(!home.is_editing());

    type_str(&mut home, "garbage");
    assert_eq!(home.visible_tickets().len(), 5);
}

#[test]
fn test_apply_is_idempotent_for_unchanged_inputs() {
    let tickets = sample_tickets();
    let criteria = FilterCriteria {
        subject: String::from("in"),
        ..Default::default()
    };

    let first = filter::apply(&criteria, &tickets);
    let second = filter::apply(&criteria, &tickets);
    assert_eq!(first, second);
}

#[test]
fn test_free_text_is_case_insensitive_but_selects_are_not() {
    let tickets = sample_tickets();

    let free_text = FilterCriteria {
        creator: String::from("John"),
        ..Default::default()
    };
    let mut tickets_with_john = sample_tickets();
    tickets_with_john[0].created_by = String::from("john smith");
    assert_eq!(filter::apply(&free_text, &tickets_with_john), vec![0]);

    let enumerated = FilterCriteria {
        priority: String::from("high"),
        ..Default::default()
    };
    assert_eq!(filter::apply(&enumerated, &tickets), Vec::<usize>::new());
}
