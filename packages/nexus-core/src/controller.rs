//! Conversation controller.
//!
//! [`Conversation`] is the single owner of everything that changes while the
//! page is open: the message list, the input field, the spectrum and whether a
//! reply is on its way. Front ends drive it with commands and read
//! it through borrowed views or a [`Snapshot`].

use crate::config::Config;
use crate::locale::Locale;
use crate::orbit::layout;
use crate::source::{format_timestamp, Clock, RandomSource};
use crate::spectrum::Spectrum;
use crate::synth::synthesize;
use crate::types::{seed_messages, Message, Role, Transform, VIBES};
use serde::Serialize;
use std::time::Duration;

/// How many recent messages the timeline strip shows.
pub const TIMELINE_LEN: usize = 4;

/// Timeline excerpts are cut after this many characters.
pub const EXCERPT_CHARS: usize = 42;

/// A reply that must be delivered once `delay` has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    /// The trimmed text the human sent
    pub prompt: String,
    /// How long the companion "thinks" before answering
    pub delay: Duration,
}

/// Status copy shown around the interface.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Status {
    pub responding: bool,
    /// Header status value
    pub state: String,
    /// Line under the timeline
    pub timeline: String,
    /// Send button caption
    pub send_label: String,
}

/// Read-only copy of the conversation, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub messages: Vec<Message>,
    pub placements: Vec<Transform>,
    pub spectrum: Vec<f64>,
    pub input: String,
    pub timeline: Vec<String>,
    pub status: Status,
}

pub struct Conversation<R: RandomSource, C: Clock> {
    messages: Vec<Message>,
    input: String,
    responding: bool,
    spectrum: Spectrum,
    reply_delay_ms: (u64, u64),
    locale: Locale,
    rng: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> Conversation<R, C> {
    /// Build a conversation from `config`, drawing the initial spectrum from `rng`.
    pub fn new(config: &Config, mut rng: R, clock: C) -> Self {
        let spectrum = Spectrum::new(config.spectrum_points, &mut rng);
        let messages = if config.seed_conversation {
            seed_messages()
        } else {
            Vec::new()
        };

        Self {
            messages,
            input: String::new(),
            responding: false,
            spectrum,
            reply_delay_ms: (config.reply_delay_min_ms, config.reply_delay_max_ms),
            locale: Locale::spanish(),
            rng,
            clock,
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Replace the input field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Send the current input.
    ///
    /// Blank input is ignored without touching any state. Otherwise the human
    /// message is appended, the input cleared, and the reply to schedule is
    /// returned.
    pub fn submit(&mut self) -> Option<PendingReply> {
        let prompt = self.input.trim().to_string();
        if prompt.is_empty() {
            return None;
        }

        let vibe_index = self.rng.pick(VIBES.len());
        let message = Message::new(Role::Human, prompt.clone(), vibe_index, self.timestamp());
        tracing::debug!("Human message {} ({} chars)", message.id, prompt.chars().count());

        self.messages.push(message);
        self.input.clear();
        self.responding = true;

        let (min, max) = self.reply_delay_ms;
        let delay_ms = self.rng.range(min as f64, max as f64) as u64;

        Some(PendingReply {
            prompt,
            delay: Duration::from_millis(delay_ms.clamp(min, max.saturating_sub(1).max(min))),
        })
    }

    /// Set the input to `text` and send it.
    pub fn submit_text(&mut self, text: impl Into<String>) -> Option<PendingReply> {
        self.set_input(text);
        self.submit()
    }

    /// Append the synthesized answer to a pending reply.
    pub fn deliver(&mut self, pending: PendingReply) -> &Message {
        let content = synthesize(&pending.prompt, &mut self.rng);
        let vibe_index = self.rng.pick(VIBES.len());
        let message = Message::new(Role::Agent, content, vibe_index, self.timestamp());
        tracing::debug!("Agent message {} after {:?}", message.id, pending.delay);

        self.responding = false;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Advance the spectrum animation by one step.
    pub fn tick(&mut self) {
        let now = self.clock.now_millis();
        self.spectrum.tick(now, &mut self.rng);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Set by every send and cleared by every delivered reply, so overlapping
    /// replies clear it as soon as the first one lands.
    pub fn is_responding(&self) -> bool {
        self.responding
    }

    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Orbital placement of every message, in list order.
    pub fn placements(&self) -> Vec<Transform> {
        layout(self.messages.len())
    }

    /// The last few messages as `"Speaker: excerpt"` lines.
    pub fn timeline(&self) -> Vec<String> {
        let start = self.messages.len().saturating_sub(TIMELINE_LEN);
        self.messages[start..]
            .iter()
            .map(|message| {
                let speaker = match message.role {
                    Role::Human => self.locale.t("timeline.human"),
                    Role::Agent => self.locale.t("timeline.agent"),
                };
                format!("{}: {}", speaker, excerpt(&message.content))
            })
            .collect()
    }

    pub fn status(&self) -> Status {
        let responding = self.is_responding();
        let pick = |thinking: &str, idle: &str| {
            self.locale.t(if responding { thinking } else { idle })
        };

        Status {
            responding,
            state: pick("status.thinking", "status.listening"),
            timeline: pick("timeline.thinking", "timeline.ready"),
            send_label: pick("send.thinking", "send.idle"),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            messages: self.messages.clone(),
            placements: self.placements(),
            spectrum: self.spectrum.values().to_vec(),
            input: self.input.clone(),
            timeline: self.timeline(),
            status: self.status(),
        }
    }

    fn timestamp(&self) -> String {
        format_timestamp(&self.clock.local_time())
    }
}

fn excerpt(content: &str) -> String {
    if content.chars().count() > EXCERPT_CHARS {
        let head: String = content.chars().take(EXCERPT_CHARS).collect();
        format!("{head}…")
    } else {
        content.to_string()
    }
}
