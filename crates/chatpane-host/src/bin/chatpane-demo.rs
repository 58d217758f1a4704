//! Stdin-driven demo host for the chatpane widget.
//!
//! Each typed line goes through the input buffer and lands in the chat log
//! as an attributed, timestamped line; the rendered spans print with a
//! minimal ANSI mapping. Commands:
//!
//! - `/size +` / `/size -` / `/size 0` — grow, shrink, reset the font size
//! - `/save` / `/load` — persist and restore the widget state
//! - `/quit` — exit

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chatpane::{LineSpec, Settings, SpanStyle, codec, render_line};
use chatpane_host::{ChatHost, FrameViewport};
use chrono::{FixedOffset, Utc};
use clap::Parser;

#[derive(Parser)]
#[command(name = "chatpane-demo")]
#[command(about = "Stdin-driven demo host for the chatpane widget")]
struct Cli {
    /// Widget id for the scrollable region
    #[arg(long, default_value = "chat")]
    id: String,

    /// Initial font size
    #[arg(long, default_value_t = 16)]
    font_size: i32,

    /// Display name attributed to typed lines
    #[arg(long, default_value = "you")]
    user: String,

    /// UTC offset for displayed timestamps, in hours
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    utc_offset: i32,

    /// Where /save and /load persist the widget state
    #[arg(long, default_value = "chatpane-state.json")]
    state: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let zone = FixedOffset::east_opt(cli.utc_offset * 3600).context("invalid UTC offset")?;

    let settings: Settings<()> = Settings::new(&cli.id, cli.font_size, true);
    let mut host = ChatHost::new(settings, FrameViewport::new(&cli.id, 20.0));

    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match line.trim() {
            "" => {}
            "/quit" => break,
            "/size +" => {
                host.set_font_size(1);
                println!("font size: {}", host.settings().font_size);
            }
            "/size -" => {
                host.set_font_size(-1);
                println!("font size: {}", host.settings().font_size);
            }
            "/size 0" => {
                host.set_font_size(0);
                println!("font size: {}", host.settings().font_size);
            }
            "/save" => {
                let encoded = codec::encode_settings(host.settings());
                std::fs::write(&cli.state, encoded)
                    .with_context(|| format!("failed to write {}", cli.state.display()))?;
                println!("saved to {}", cli.state.display());
            }
            "/load" => match load_state(&cli.state) {
                Ok(restored) => {
                    host.viewport_mut().content_height = restored.lines.len() as f64;
                    host.restore(restored);
                    println!("restored {} lines:", host.settings().lines.len());
                    print_transcript(&host, &zone);
                }
                // Surface the decode reason instead of silently showing an
                // empty chat.
                Err(error) => eprintln!("restore failed: {error:#}"),
            },
            text => {
                host.set_input(text);
                if let Some(message) = host.take_input() {
                    let spec =
                        LineSpec::with_decorations(message, Some(&cli.user), Some(Utc::now()));
                    host.viewport_mut().content_height += 1.0;
                    print_rendered(host.settings(), &zone, &spec);
                    host.add_line(spec);
                }
            }
        }
    }

    Ok(())
}

fn load_state(path: &Path) -> Result<Settings<()>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    codec::decode_settings(&json)
}

fn print_transcript(host: &ChatHost<(), FrameViewport>, zone: &FixedOffset) {
    for spec in &host.settings().lines {
        print_rendered(host.settings(), zone, spec);
    }
}

fn print_rendered(settings: &Settings<()>, zone: &FixedOffset, spec: &LineSpec<()>) {
    let rendered = render_line(settings, zone, spec);
    let mut out = String::new();
    for span in rendered.spans {
        match span.style {
            SpanStyle::Plain => out.push_str(&span.text),
            SpanStyle::Author => out.push_str(&format!("\x1b[1m{}\x1b[0m", span.text)),
            SpanStyle::Timestamp => out.push_str(&format!("\x1b[2m{}\x1b[0m", span.text)),
            SpanStyle::Link { href } => {
                out.push_str(&format!("\x1b[4m{}\x1b[0m ({href})", span.text));
            }
        }
    }
    println!("{out}");
}
