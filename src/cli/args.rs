//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Generate randomized directory trees of empty files as test fixtures
#[derive(Parser, Debug)]
#[command(name = "fixtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a tree and create it on disk (the default command)
    Generate(GenerateArgs),

    /// Show the tree a generation would produce, without touching the disk
    Plan(PlanArgs),

    /// Show effective settings, word list status and expected tree shape
    Info,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for `generate` (also used for the bare invocation).
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Word list: one candidate name per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Name of the root directory to create
    #[arg(short, long)]
    pub root: Option<String>,

    /// Directory levels below the root
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Parent directory for the root (default: cwd)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Scramble access/modification times of created entries
    #[arg(short, long)]
    pub timestamps: bool,

    /// Half-width of the timestamp window, in days
    #[arg(long)]
    pub window_days: Option<u64>,

    /// Seed the generator for reproducible trees
    #[arg(long, env = "FIXTREE_SEED")]
    pub seed: Option<u64>,
}

/// Arguments for `plan`.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Word list: one candidate name per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Name of the root directory
    #[arg(short, long)]
    pub root: Option<String>,

    /// Directory levels below the root
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Seed the generator for reproducible trees
    #[arg(long, env = "FIXTREE_SEED")]
    pub seed: Option<u64>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
