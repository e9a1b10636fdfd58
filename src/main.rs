//! Envoy Log Viewer - Entry Point

use clap::Parser;
use elv::source::ContainerTarget;
use std::path::PathBuf;
use tracing::info;

/// Envoy Log Viewer - TUI for browsing Envoy JSON access logs
#[derive(Parser, Debug)]
#[command(name = "elv")]
#[command(version)]
#[command(about = "Interactive terminal viewer for Envoy JSON access logs")]
#[command(
    after_help = "Pipe logs on stdin (kubectl logs POD | elv), or name a pod, namespace and container to fetch them with kubectl."
)]
pub struct Args {
    /// Pod to read logs from when stdin is a terminal
    #[arg(long, env = "PLUGIN_POD")]
    pub pod: Option<String>,

    /// Namespace of the pod
    #[arg(long, short = 'n', env = "PLUGIN_NAMESPACE")]
    pub namespace: Option<String>,

    /// Container within the pod
    #[arg(long, short = 'c', env = "PLUGIN_CONTAINER")]
    pub container: Option<String>,

    /// Start at specific line number (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub line: Option<u32>,

    /// Start with a search applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Container target, if pod, namespace and container are all given.
    pub fn container_target(&self) -> Option<ContainerTarget> {
        ContainerTarget::from_parts(
            self.pod.clone(),
            self.namespace.clone(),
            self.container.clone(),
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = elv::config::resolve(args.config.clone(), args.no_color)?;

    elv::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let source = elv::source::detect_input_source(args.container_target(), &config.kubectl)?;
    let batch = elv::integration::load_batch(source)?;

    if let Some(summary) = elv::integration::skipped_summary(&batch.skipped) {
        eprintln!("{}", summary);
    }

    let state = elv::integration::build_state(
        batch,
        config.view_options(),
        args.search.as_deref(),
        args.line.map(|l| l as usize),
    );

    elv::view::run_with_state(state)?;

    Ok(())
}
