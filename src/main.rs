use anyhow::{anyhow, Context, Result};
use clap::Parser;

use drawer::cli::{CliArgs, CliCommand};
use drawer::config::DrawerConfig;
use drawer::runtime::Snapshot;
use drawer::scenario::Scenario;

fn main() -> Result<()> {
    drawer::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => DrawerConfig::load_from(path).map_err(|e| anyhow!(e))?,
        None => DrawerConfig::load(),
    };

    match args.command {
        CliCommand::Replay {
            scenario,
            json,
            html,
        } => {
            let loaded = Scenario::load(&scenario).map_err(|e| anyhow!(e))?;
            let runtime = loaded.run(config);
            let snapshot = runtime.snapshot();

            if json {
                let out = serde_json::to_string_pretty(&snapshot)
                    .context("Failed to serialize snapshot")?;
                println!("{}", out);
            } else {
                print_snapshot(&snapshot);
                let stats = runtime.stats();
                println!(
                    "events: {}  updates: {}  redraws: {}  coalesced: {}",
                    stats.events, stats.updates, stats.redraws, stats.coalesced
                );
            }

            if html {
                print!("{}", runtime.document().to_html());
            }
        }

        CliCommand::Config { path } => {
            if path {
                let file = match args.config {
                    Some(file) => file,
                    None => drawer::config_paths::config_file()
                        .ok_or_else(|| anyhow!("No config directory available"))?,
                };
                println!("{}", file.display());
            } else {
                print!("{}", config.to_yaml().map_err(|e| anyhow!(e))?);
            }
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    println!(
        "panel:    {}",
        match snapshot.is_open {
            Some(true) => "open",
            Some(false) => "closed",
            None => "absent",
        }
    );
    println!("width:    {}", or_dash(&snapshot.panel_width));
    println!("stored:   {}", or_dash(&snapshot.stored_width));
    println!("offset:   {}", or_dash(&snapshot.content_offset));
    println!(
        "drag:     {}",
        if snapshot.dragging { "active" } else { "idle" }
    );
    println!(
        "handles:  {}  listeners: {} ({} global)",
        snapshot.handles, snapshot.listeners, snapshot.global_listeners
    );
}
