//! Nexus Core - Conversation and orbital layout library for Aurelia Nexus.
//!
//! This crate provides everything the Aurelia Nexus front ends need that is
//! not drawing:
//!
//! - **Synthesis**: the template reply generator ([`synth::synthesize`])
//! - **Orbits**: placement of message cards on the orbital ring ([`orbit::placement`])
//! - **Spectrum**: the decorative bar visualization and its perturbation
//! - **Conversation**: the controller owning messages, input and spectrum
//! - **Sources**: injectable randomness and wall clock
//!
//! # Example
//!
//! ```rust
//! use nexus_core::{Config, Conversation, StdRandom, SystemClock};
//!
//! let mut chat = Conversation::new(&Config::default(), StdRandom::seeded(7), SystemClock);
//! let before = chat.messages().len();
//!
//! // Sending appends the human message right away and hands back the reply to schedule
//! let pending = chat.submit_text("hola mundo").expect("non-blank input");
//! assert_eq!(chat.messages().len(), before + 1);
//!
//! // Once the delay has elapsed, the front end delivers it
//! chat.deliver(pending);
//! assert_eq!(chat.messages().len(), before + 2);
//! ```

pub mod config;
pub mod controller;
pub mod locale;
pub mod orbit;
pub mod source;
pub mod spectrum;
pub mod synth;
pub mod types;

// Re-export commonly used types
pub use types::{
    seed_messages, vibe_for, ApiResponse, Message, Orbit, Rgba, Role, Transform, Vibe, ORBITS,
    VIBES,
};

// Re-export main functionality
pub use config::Config;
pub use controller::{Conversation, PendingReply, Snapshot, Status};
pub use locale::Locale;
pub use orbit::{layout, placement};
pub use source::{
    format_timestamp, Clock, ManualClock, RandomSource, ScriptedRandom, StdRandom, SystemClock,
};
pub use spectrum::{height_px, Spectrum, SPECTRUM_MAX, SPECTRUM_MIN, WAVE_POINTS};
pub use synth::{synthesize, SEED_PHRASES};

/// Error types for nexus-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for nexus-core operations.
pub type Result<T> = std::result::Result<T, Error>;
