mod commands;
mod walkthrough;

use applocate_common::Platform;
use applocate_engine::config::loader::ConfigLoader;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "applocate",
    version,
    about = "Locate UI elements in iOS and Android apps through Appium"
)]
struct Args {
    /// Config file (defaults to ./applocate.yaml, then ~/.applocate/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Appium server URL, overrides the config file
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a session, look up one element and print its reference
    Find(FindArgs),
    /// Walk the login screen of TheApp: accessibility id, class name, XPath
    Demo {
        #[arg(long)]
        platform: Platform,
    },
    /// Print the locator a named element resolves to, without a server
    Resolve {
        #[arg(long)]
        platform: Platform,
        #[arg(long)]
        element: String,
        #[arg(long)]
        allow_id_fallback: bool,
    },
    /// Print the effective configuration
    Config,
}

#[derive(ClapArgs, Debug)]
pub struct FindArgs {
    #[arg(long)]
    pub platform: Platform,

    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Single lookup instead of polling
    #[arg(long)]
    pub no_wait: bool,

    /// Send `--id` as an accessibility id on iOS instead of failing
    #[arg(long)]
    pub allow_id_fallback: bool,
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Name of an element declared in the config file
    #[arg(long)]
    pub element: Option<String>,
    #[arg(long)]
    pub accessibility_id: Option<String>,
    #[arg(long)]
    pub class_name: Option<String>,
    #[arg(long)]
    pub xpath: Option<String>,
    #[arg(long)]
    pub id: Option<String>,
}

fn init_logging(verbose: bool) {
    // stderr keeps stdout for element references
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = ConfigLoader::load(args.config.as_deref()).await?;
    if let Some(url) = args.server_url {
        config.server.url = url;
    }

    match args.command {
        Command::Find(find) => commands::find(&config, find).await,
        Command::Demo { platform } => walkthrough::run(&config, platform).await,
        Command::Resolve {
            platform,
            element,
            allow_id_fallback,
        } => commands::resolve(&config, platform, &element, allow_id_fallback),
        Command::Config => commands::print_config(&config),
    }
}
