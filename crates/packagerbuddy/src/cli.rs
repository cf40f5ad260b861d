//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};
use packagerbuddy_core::{Settings, SettingsOverrides};
use std::path::PathBuf;

/// PackagerBuddy - JSON config based software packager
#[derive(Parser, Debug)]
#[command(name = "packagerbuddy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (--verbose, --verbose --verbose)
    #[arg(long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and status output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Software config file
    #[arg(long, env = "PB_CONFIG", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Directory holding downloaded archives
    #[arg(long, env = "PB_DOWNLOAD", global = true, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Directory holding installed software
    #[arg(long, env = "PB_INSTALL", global = true, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Directory holding post-install scripts
    #[arg(long, env = "PB_SCRIPTS", global = true, value_name = "DIR")]
    pub scripts_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Filesystem layout with flag and environment overrides applied
    pub fn settings(&self) -> packagerbuddy_core::Result<Settings> {
        Settings::resolve(SettingsOverrides {
            config_file: self.config_file.clone(),
            download_dir: self.download_dir.clone(),
            install_dir: self.install_dir.clone(),
            scripts_dir: self.scripts_dir.clone(),
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up the config file and directories
    Setup,

    /// List available software to download
    Avail,

    /// Add a software configuration
    Add(AddArgs),

    /// Remove a software configuration
    Remove(RemoveArgs),

    /// Download software
    Download(ReleaseArgs),

    /// Install software
    Install(InstallArgs),

    /// List installed software
    List(ListArgs),

    /// Uninstall software
    Uninstall(UninstallArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the software
    #[arg(short, long)]
    pub software: String,

    /// Download URL template containing {version}
    #[arg(short, long)]
    pub url: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Name of the software
    #[arg(short, long)]
    pub software: String,
}

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Name of the software
    #[arg(short, long)]
    pub software: String,

    /// Version of the software
    #[arg(short, long)]
    pub version: String,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    #[command(flatten)]
    pub release: ReleaseArgs,

    /// Reinstall even if the release is already installed
    #[arg(long)]
    pub force: bool,

    /// Skip post-install scripts
    #[arg(long)]
    pub no_scripts: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list releases of this software
    #[arg(short, long)]
    pub software: Option<String>,

    /// Only list releases with this version
    #[arg(short, long)]
    pub version: Option<String>,
}

#[derive(Args, Debug)]
pub struct UninstallArgs {
    /// Name of the software
    #[arg(short, long)]
    pub software: String,

    /// Version to uninstall (all installed versions when omitted)
    #[arg(short, long)]
    pub version: Option<String>,

    /// Print what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}
