//! Command-line interface for manifest-overlay
//!
//! One command: read a manifest, overlay values from the environment,
//! write the patched document.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::manifest::{self, Kind};
use crate::overlay::Overrides;

/// Patch Kubernetes manifests from environment variables
#[derive(Parser)]
#[command(name = "manifest-overlay")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Manifest to read (ConfigMap, Secret, or Ingress)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the patched manifest
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed reading manifest: {}", cli.input.display()))?;

    let kind_name = manifest::sniff_kind(&source)
        .with_context(|| format!("Failed sniffing kind: {}", cli.input.display()))?;
    println!("Detected kind: {}", kind_name.as_deref().unwrap_or("(none)"));

    let Some(kind) = kind_name.as_deref().and_then(Kind::from_name) else {
        println!("Unsupported kind: expected one of ConfigMap | Secret | Ingress; nothing written");
        return Ok(());
    };

    let overrides = Overrides::from_env();
    tracing::debug!(%kind, "applying environment overlay");

    let patched = manifest::patch(kind, &source, &overrides)
        .with_context(|| format!("Failed patching {} manifest: {}", kind, cli.input.display()))?;

    fs::write(&cli.output, &patched)
        .with_context(|| format!("Failed writing patched manifest: {}", cli.output.display()))?;
    // Downstream deploy tooling expects 0755 on the rendered file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&cli.output, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed setting output mode: {}", cli.output.display()))?;
    }
    println!("Wrote patched {} to {}", kind, cli.output.display());

    Ok(())
}
