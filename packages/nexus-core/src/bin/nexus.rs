//! Nexus CLI - Command line access to the Aurelia Nexus core.
//!
//! Every command prints a JSON `ApiResponse`, so the output can be piped into
//! other tooling or used to eyeball layouts without opening the interface.

use clap::{Parser, Subcommand};
use nexus_core::{
    layout, placement, synthesize, ApiResponse, Config, Conversation, Spectrum, StdRandom,
    SystemClock, ORBITS, VIBES,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "nexus")]
#[command(about = "Aurelia Nexus core CLI - synthesis, orbits and spectrum")]
#[command(version)]
struct Cli {
    /// Seed for reproducible random output (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a reply to a prompt
    Synth {
        /// Prompt words (may be empty)
        prompt: Vec<String>,
    },
    /// Compute the placement of one message
    Placement {
        /// Message index
        #[arg(short, long)]
        index: usize,
        /// Total messages in the list
        #[arg(short, long)]
        total: usize,
    },
    /// Compute placements for a whole list
    Layout {
        /// Total messages in the list
        #[arg(short, long)]
        total: usize,
    },
    /// Run the spectrum for a number of ticks
    Spectrum {
        /// Number of ticks to run
        #[arg(short, long, default_value = "1")]
        ticks: usize,
    },
    /// Play prompts through a conversation, delivering every reply at once
    Chat {
        /// One message per argument
        prompts: Vec<String>,
        /// Start without the welcome messages
        #[arg(long)]
        empty: bool,
    },
    /// List the vibe themes
    Vibes,
    /// List the orbit presets
    Orbits,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", render(&ApiResponse::<()>::err(e.to_string())));
            std::process::exit(1);
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let response = match cli.command {
        Commands::Synth { prompt } => handle_synth(&config, &prompt.join(" ")),
        Commands::Placement { index, total } => ApiResponse::ok(json!({
            "index": index,
            "total": total,
            "transform": placement(index, total),
            "css": placement(index, total).css(),
        })),
        Commands::Layout { total } => ApiResponse::ok(json!({
            "placements": layout(total),
        })),
        Commands::Spectrum { ticks } => handle_spectrum(&config, ticks),
        Commands::Chat { prompts, empty } => handle_chat(config, prompts, empty),
        Commands::Vibes => ApiResponse::ok(json!({ "vibes": VIBES })),
        Commands::Orbits => ApiResponse::ok(json!({ "orbits": ORBITS })),
    };

    println!("{}", render(&response));
}

fn render<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string_pretty(response)
        .unwrap_or_else(|e| format!("{{\"ok\":false,\"error\":\"{}\"}}", e))
}

fn handle_synth(config: &Config, prompt: &str) -> ApiResponse<Value> {
    let mut rng = StdRandom::from_seed_option(config.seed);
    ApiResponse::ok(json!({
        "prompt": prompt,
        "reply": synthesize(prompt, &mut rng),
    }))
}

fn handle_spectrum(config: &Config, ticks: usize) -> ApiResponse<Value> {
    let mut rng = StdRandom::from_seed_option(config.seed);
    let mut spectrum = Spectrum::new(config.spectrum_points, &mut rng);

    // A seeded run replays the same drift from the epoch
    let start = match config.seed {
        Some(_) => 0,
        None => chrono::Utc::now().timestamp_millis(),
    };
    let step_ms = config.tick_interval_ms as i64;

    for step in 0..ticks as i64 {
        spectrum.tick(start + step * step_ms, &mut rng);
    }

    let heights: Vec<f64> = (0..spectrum.len())
        .filter_map(|i| spectrum.bar_height(i))
        .collect();

    ApiResponse::ok(json!({
        "ticks": ticks,
        "values": spectrum.values(),
        "bar_heights": heights,
    }))
}

fn handle_chat(mut config: Config, prompts: Vec<String>, empty: bool) -> ApiResponse<Value> {
    if empty {
        config.seed_conversation = false;
    }

    let rng = StdRandom::from_seed_option(config.seed);
    let mut chat = Conversation::new(&config, rng, SystemClock);
    let mut ignored = 0;

    for prompt in prompts {
        match chat.submit_text(prompt) {
            Some(pending) => {
                chat.deliver(pending);
            }
            None => ignored += 1,
        }
    }

    ApiResponse::ok(json!({
        "ignored": ignored,
        "conversation": chat.snapshot(),
    }))
}
