//! Eina tools - developer utilities for the Eina music player
//!
//! Command-line entry point for the identifier extractor, the website
//! fragment loader and the GObject skeleton generator.

use anyhow::Result;
use eina_tools::cli::{
    class_spec, config, fragment, gobject, idents, print_gobject_json, print_gobject_text,
    print_report_json, print_report_text, Cli, Commands, OutputFormat,
};
use eina_tools::{format_list, LoaderConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Idents(args) => {
            let found = idents(&args.file)?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&found)?),
                OutputFormat::Text => println!("{}", format_list(&found)),
            }
        }

        Commands::Fragment(args) => {
            let config = LoaderConfig::load_or_default(args.config.as_deref())?;
            let runtime = tokio::runtime::Runtime::new()?;
            let report =
                runtime.block_on(fragment(&args.site, &args.location, &args.click, config))?;

            match cli.format {
                OutputFormat::Json => print_report_json(&report)?,
                OutputFormat::Text => print_report_text(&report),
            }
        }

        Commands::Gobject(args) => {
            let spec = class_spec(&args)?;
            let output = gobject(&spec, args.output_dir.as_deref())?;

            match cli.format {
                OutputFormat::Json => print_gobject_json(&output)?,
                OutputFormat::Text => print_gobject_text(&output),
            }
        }

        Commands::Config(args) => {
            let loaded = LoaderConfig::load_or_default(args.path.as_deref())?;

            let target = if args.init {
                Some(LoaderConfig::default_path().ok_or_else(|| {
                    anyhow::anyhow!("No per-user configuration directory on this system")
                })?)
            } else {
                args.write.clone()
            };

            let shown = config(&loaded, target.as_deref())?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&loaded)?),
                OutputFormat::Text => {
                    if let Some(ref path) = target {
                        println!("✓ Configuration written to {:?}\n", path);
                    }
                    print!("{}", shown);
                }
            }
        }
    }

    Ok(())
}
