use std::io::{self, Write};

use anyhow::Context;
use gallery_app::UseCases;

use crate::bootstrap::{resolve_config, tracing::init_tracing_subscriber, wire_dependencies};
use crate::cli::{Cli, Commands};
use crate::commands::{list_images, render_images, upload_image, PageLimit};

/// Resolve config, install tracing, wire dependencies and run one command.
pub async fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref())?;
    init_tracing_subscriber(&config).context("Failed to initialize tracing")?;

    tracing::info!(api_base_url = %config.api_base_url, "Starting gallery");

    let deps = wire_dependencies(&config).context("Failed to wire dependencies")?;
    let usecases = UseCases::new(&deps);

    match cli.command {
        Commands::List(args) => {
            let snapshot = list_images(&usecases, PageLimit::from(&args)).await?;
            let mut out = io::stdout().lock();
            if args.json {
                serde_json::to_writer_pretty(&mut out, &snapshot)
                    .context("Failed to write JSON output")?;
                writeln!(out)?;
            } else {
                render_images(&snapshot, &mut out)?;
            }
        }
        Commands::Upload(args) => {
            let image = upload_image(&usecases, &args).await?;
            println!("Registered \"{}\" at {}", image.title, image.url);
        }
    }

    Ok(())
}
