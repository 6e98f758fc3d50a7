use anyhow::Context;
use clap::Parser;
use interactive_page::utils::{logger, validation::Validate};
use interactive_page::{Page, PageConfig, SessionScript};

#[derive(Parser)]
#[command(name = "page-session")]
#[command(about = "Replay a scripted session of page events and print the final page state")]
struct Args {
    /// Path to the session script (TOML)
    #[arg(short, long)]
    session: String,

    /// Path to the page configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Continue past invalid events regardless of the script setting
    #[arg(long)]
    keep_going: bool,

    /// Log as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    // Page configuration
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading page configuration from: {}", path);
            PageConfig::from_file(path)
                .with_context(|| format!("Failed to load page config '{}'", path))?
        }
        None => PageConfig::default(),
    };
    config.validate().context("Page configuration is invalid")?;

    // Session script
    let script = SessionScript::from_file(&args.session)
        .with_context(|| format!("Failed to load session '{}'", args.session))?;
    script.validate().context("Session script is invalid")?;

    let keep_going = args.keep_going || script.session.continue_on_error;
    tracing::info!(
        "▶️ Replaying session '{}' ({} events)",
        script.session.name,
        script.events.len()
    );

    let mut page = Page::from_config(&config).context("Failed to initialise page")?;
    page.loaded();

    let mut failures = 0usize;
    for (i, event) in script.events.into_iter().enumerate() {
        if let Err(e) = page.dispatch(event) {
            failures += 1;
            tracing::warn!("⚠️ Event #{} rejected: {}", i + 1, e);
            tracing::warn!("💡 {}", e.recovery_suggestion());
            if !keep_going {
                return Err(anyhow::Error::new(e).context(format!("Event #{} failed", i + 1)));
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&page.snapshot())?);

    if failures > 0 {
        tracing::warn!("Session finished with {} rejected events", failures);
    } else {
        tracing::info!("✅ Session '{}' replayed", script.session.name);
    }

    Ok(())
}
