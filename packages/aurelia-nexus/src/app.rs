//! Terminal session and main loop
//!
//! The loop owns the [`Conversation`] outright. Keys, spectrum ticks and
//! finished replies all arrive through `tokio::select!`, so there is only
//! ever one writer.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use nexus_core::{Clock, Config, Conversation, PendingReply, RandomSource, StdRandom, SystemClock};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::events;
use crate::keyboard::{self, InputAction};
use crate::theme::Theme;
use crate::views::{self, ViewContext};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interface until the user quits.
pub async fn run(config: Config) -> Result<()> {
    let chat = Conversation::new(
        &config,
        StdRandom::from_seed_option(config.seed),
        SystemClock,
    );

    // Leave the shell usable even if drawing panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original_hook(info);
    }));

    let mut terminal = setup()?;
    let result = event_loop(&mut terminal, chat, &config).await;
    restore()?;
    terminal.show_cursor()?;
    result
}

fn setup() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

async fn event_loop<R, C>(
    terminal: &mut Tui,
    mut chat: Conversation<R, C>,
    config: &Config,
) -> Result<()>
where
    R: RandomSource,
    C: Clock,
{
    let theme = Theme::default();

    let (key_tx, mut key_rx) = mpsc::channel::<Event>(32);
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<PendingReply>();
    let _reader = events::spawn_key_reader(key_tx);

    let mut ticker = tokio::time::interval(config.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(
        messages = chat.messages().len(),
        tick_ms = config.tick_interval_ms,
        "Conversation open"
    );

    loop {
        let snapshot = chat.snapshot();
        terminal.draw(|frame| {
            let cx = ViewContext {
                snapshot: &snapshot,
                locale: chat.locale(),
                theme: &theme,
            };
            views::render(frame, &cx);
        })?;

        tokio::select! {
            _ = ticker.tick() => chat.tick(),
            Some(pending) = reply_rx.recv() => {
                let reply = chat.deliver(pending);
                tracing::debug!(vibe = reply.vibe_index, "Reply delivered");
            }
            key = key_rx.recv() => {
                let Some(ev) = key else {
                    tracing::warn!("Key reader closed");
                    break;
                };
                match keyboard::action_for(&ev) {
                    InputAction::Quit => break,
                    InputAction::Submit => {
                        if let Some(pending) = chat.submit() {
                            tracing::debug!(delay_ms = pending.delay.as_millis() as u64, "Reply scheduled");
                            events::schedule_reply(pending, reply_tx.clone());
                        }
                    }
                    InputAction::Ignore => {}
                    action => {
                        if let Some(text) = keyboard::edit(chat.input(), action) {
                            chat.set_input(text);
                        }
                    }
                }
            }
        }
    }

    tracing::info!(messages = chat.messages().len(), "Conversation closed");
    Ok(())
}
