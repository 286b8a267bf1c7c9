use color_eyre::eyre::{eyre, Result};
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    cli::Cli,
    components::{Component, Home, StatusBar},
    config::Config,
    mode::Mode,
    store::{FilePreferences, PreferenceStore},
    theme::{Theme, THEME_KEY},
    ticket, tui,
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub components: Vec<Box<dyn Component>>,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub mode: Mode,
    pub last_tick_key_events: Vec<KeyEvent>,
    theme: Theme,
    store: FilePreferences,
}

impl App {
    pub fn new(args: Cli) -> Result<Self> {
        let config = Config::new()?;
        let data_path = args
            .data
            .or_else(|| config.data_file.clone())
            .ok_or_else(|| {
                eyre!("No ticket snapshot given; pass --data or set `data_file` in the config")
            })?;
        let tickets = ticket::load_snapshot(&data_path)?;
        log::info!(
            "Loaded {} tickets from {}",
            tickets.len(),
            data_path.display()
        );

        let store = FilePreferences::in_data_dir();
        let theme = Theme::from_store(&store);

        let total = tickets.len();
        let home = Home::new(tickets, theme);
        let status_bar = StatusBar::new(theme, total);
        Ok(Self {
            tick_rate: args.tick_rate,
            frame_rate: args.frame_rate,
            components: vec![Box::new(home), Box::new(status_bar)],
            should_quit: false,
            should_suspend: false,
            config,
            mode: Mode::Browse,
            last_tick_key_events: Vec::new(),
            theme,
            store,
        })
    }

    /// Flip the theme, persist the choice, and report the outcome.
    ///
    /// A failed write keeps the flipped in-memory theme; the error only
    /// reaches the status bar and the log.
    fn toggle_theme(&mut self, action_tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        self.theme = self.theme.toggled();
        action_tx.send(Action::ThemeChanged(self.theme))?;
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            log::error!("Failed to persist theme preference: {e:?}");
            action_tx.send(Action::SystemMessage(format!("Theme not saved: {e}")))?;
        } else {
            log::info!("Theme switched to {}", self.theme);
        }
        Ok(())
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        let size = tui.size()?;
        for component in self.components.iter_mut() {
            component.init(Rect::new(0, 0, size.width, size.height))?;
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        action_tx.send(Action::Key(key))?;

                        if let Some(keymap) = self.config.keybindings.get(&self.mode) {
                            if let Some(action) = keymap.get(&vec![key]) {
                                log::info!("Got action: {action:?}");
                                action_tx.send(action.clone())?;
                            } else {
                                // If the key was not handled as a single key action,
                                // then consider it for multi-key combinations.
                                self.last_tick_key_events.push(key);

                                if let Some(action) = keymap.get(&self.last_tick_key_events) {
                                    log::info!("Got action: {action:?}");
                                    action_tx.send(action.clone())?;
                                }
                            }
                        };
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.handle_events(Some(e.clone()))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match action {
                    Action::Tick => {
                        self.last_tick_key_events.drain(..);
                    }
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::FocusFilter => self.mode = Mode::Filter,
                    Action::CloseFilter => self.mode = Mode::Browse,
                    Action::ToggleTheme => self.toggle_theme(&action_tx)?,
                    Action::Error(ref message) => {
                        log::error!("{message}");
                    }
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|f| {
                            for component in self.components.iter_mut() {
                                let r = component.draw(f, f.area());
                                if let Err(e) = r {
                                    action_tx
                                        .send(Action::Error(format!("Failed to draw: {e:?}")))
                                        .ok();
                                }
                            }
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            for component in self.components.iter_mut() {
                                let r = component.draw(f, f.area());
                                if let Err(e) = r {
                                    action_tx
                                        .send(Action::Error(format!("Failed to draw: {e:?}")))
                                        .ok();
                                }
                            }
                        })?;
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.update(action.clone())? {
                        action_tx.send(action)?
                    };
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}
