mod commands;
mod core;

use clap::{Parser, Subcommand};
use rn_smoke_env::application::EnvironmentProvisioner;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::{
    clean::CleanUpCommand,
    expo::{
        AddExpoCommand, InstallExpoCommand, InstallXdlCommand, PatchExpoSettingsCommand,
        RnVersionCommand,
    },
    ios::{SetIosTargetCommand, SimulatorCommand},
    macos::TerminateMacosAppCommand,
    metro::PatchMetroCommand,
    prepare::PrepareCommand,
};
use crate::core::CliError;

#[derive(Parser)]
#[command(name = "rn-smoke-env")]
#[command(about = "Provision React Native test environments for extension smoke tests", long_about = None)]
struct Cli {
    /// Config file [default: ~/.rn-smoke-env/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory receiving the commands log
    #[arg(long, global = true)]
    artifacts_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold and patch a test application
    #[command(subcommand)]
    Prepare(PrepareCommand),
    /// Add Expo to an existing React Native project
    AddExpo(AddExpoCommand),
    /// Remove test artifacts from a previous run
    CleanUp(CleanUpCommand),
    RnVersion(RnVersionCommand),
    #[command(subcommand)]
    InstallExpo(InstallExpoCommand),
    /// Drop `https: false` from .expo/settings.json
    PatchExpoSettings(PatchExpoSettingsCommand),
    /// Set the iOS target of a launch configuration
    SetIosTarget(SetIosTargetCommand),
    /// Control the iOS simulator
    #[command(subcommand)]
    Simulator(SimulatorCommand),
    /// Kill a running macOS application
    TerminateMacosApp(TerminateMacosAppCommand),
    /// Append the VS Code exclusions to metro.config.js
    PatchMetro(PatchMetroCommand),
    /// Install @expo/xdl into an extension directory
    InstallXdl(InstallXdlCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        e.render();
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = crate::core::config::load(cli.config.as_deref(), |key| std::env::var(key).ok())
        .map_err(|e| CliError::Config(format!("{:#}", e)))?;
    if let Some(dir) = cli.artifacts_dir {
        config.artifacts_dir = dir;
    }
    tracing::debug!("Commands log: {}", config.commands_log_file().display());

    let provisioner = EnvironmentProvisioner::with_system_adapters(config);

    match cli.command {
        Commands::Prepare(cmd) => cmd.execute(&provisioner),
        Commands::AddExpo(cmd) => cmd.execute(&provisioner),
        Commands::CleanUp(cmd) => cmd.execute(&provisioner),
        Commands::RnVersion(cmd) => cmd.execute(&provisioner).await,
        Commands::InstallExpo(cmd) => cmd.execute(&provisioner).await,
        Commands::PatchExpoSettings(cmd) => cmd.execute(&provisioner),
        Commands::SetIosTarget(cmd) => cmd.execute(&provisioner),
        Commands::Simulator(cmd) => cmd.execute(&provisioner).await,
        Commands::TerminateMacosApp(cmd) => cmd.execute(&provisioner),
        Commands::PatchMetro(cmd) => cmd.execute(&provisioner),
        Commands::InstallXdl(cmd) => cmd.execute(&provisioner),
    }
}
