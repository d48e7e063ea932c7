use clap::{Parser, Subcommand};
use clipform::clipboard::SystemClipboard;
use clipform::notify::{self, Severity};
use clipform::pipeline::{self, Formatted};
use clipform::{config, extract};
use std::io::Read;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "clipform")]
#[command(about = "Clipboard normalizer for PR titles and screenshot tables")]
#[command(long_about = "\
Clipboard normalizer for PR titles and screenshot tables

Copy loosely formatted text, run clipform, paste the canonical result.
The input kind is sniffed from its prefix:

  <img …   HTML image tags     → before/after comparison table
  ![…      Markdown images     → before/after comparison table
  else     title draft         → [TICKET] [PART-N] Feature name

Title examples:

  mb 80 fix the sidebar                  → [MB-80] Fix the sidebar
  mb 80 part 2 fix the sidebar           → [MB-80] [PART-2] Fix the sidebar
  no ticket tweak copy                   → [no-ticket] Tweak copy
  MB-95-times/remove-start-constraint    → [MB-95] Remove start constraint

Image alt texts follow '<order>. <name> <before|after>':

  1. Checkout_before / 1. Checkout_after → one paired row, ordered first
  2. Overview                            → standalone image

Run 'clipform gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Path to config.toml (default: the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the clipboard, normalize it, write the result back, notify
    Format,
    /// Read stdin, write the normalized result to stdout
    Convert {
        /// Dump extracted image records as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Format => {
            let mut clipboard = SystemClipboard;
            match pipeline::format_clipboard(&mut clipboard, &config) {
                Ok(formatted) => {
                    if config.notify.enabled {
                        notify::notify(Severity::Success, &success_message(&formatted));
                    }
                    Ok(())
                }
                Err(e) => {
                    if config.notify.enabled {
                        notify::notify(Severity::Error, &e.to_string());
                    }
                    Err(e.into())
                }
            }
        }
        Command::Convert { json } => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            if json {
                let records = extract::extract_records(&input);
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            let formatted = pipeline::transform(&input, &config)?;
            println!("{}", formatted.text());
            Ok(())
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(())
        }
    }
}

/// Word the success notice by what was produced.
fn success_message(formatted: &Formatted) -> String {
    match formatted {
        Formatted::Title(title) => format!("Copied: {title}"),
        Formatted::Table { images, .. } => {
            format!("Copied comparison table ({images} images)")
        }
    }
}
