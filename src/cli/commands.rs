//! Command dispatch
//!
//! Resolves settings, wires services and executes the selected command.
//! Flags override settings field by field; unset flags fall through to the
//! layered configuration.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clap::CommandFactory;
use clap_complete::Shell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::application::services::{
    MaterializeOptions, MaterializeService, TimestampJitter, WordSource,
};
use crate::cli::args::{Cli, Commands, ConfigCommands, GenerateArgs, PlanArgs};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::CliError;
use crate::config::{self, Settings};
use crate::domain::{compose_path, planner, TreePlanner};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Generate(args)) => generate_tree(args),
        Some(Commands::Plan(args)) => plan_tree(args),
        Some(Commands::Info) => info(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(),
            ConfigCommands::Init { global } => config_init(*global),
            ConfigCommands::Path => config_path(),
        },
        Some(Commands::Completion { shell }) => completion(*shell),
        // Bare invocation runs a full generation with effective settings.
        None => generate_tree(&GenerateArgs::default()),
    }
}

/// Load settings and wire up the container for one command.
fn load_container() -> CliResult<ServiceContainer> {
    let cwd = current_dir()?;
    let settings = Settings::load(Some(&cwd))?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir()
        .map_err(|e| InfraError::io("resolve working directory", e).into())
}

/// Seeded generator for reproducible runs, OS entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[instrument(skip_all)]
fn generate_tree(args: &GenerateArgs) -> CliResult<()> {
    let container = load_container()?;
    let settings = &container.settings;

    let words = args
        .words
        .clone()
        .unwrap_or_else(|| settings.words_file.clone());
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| settings.root_name.clone());
    let depth = args.depth.unwrap_or(settings.depth);
    let timestamps = args.timestamps || settings.timestamps;
    let window_days = args.window_days.unwrap_or(settings.window_days);
    debug!(
        "generate: root={}, depth={}, words={}, timestamps={}",
        root,
        depth,
        words.display(),
        timestamps
    );

    let pool = WordSource::new(container.fs.clone()).load(&words)?;

    let mut rng = make_rng(args.seed);
    let tree = TreePlanner::new(&pool).plan(&root, depth, &mut rng)?;

    // Capture now once; every entry of the run shares it.
    let options = MaterializeOptions {
        timestamps: timestamps.then(|| TimestampJitter::days(SystemTime::now(), window_days)),
    };
    MaterializeService::new(container.fs.clone(), options).materialize(
        &tree,
        args.dir.as_deref(),
        &mut rng,
    )?;

    output::success(&format!(
        "created {} directories and {} files under {}",
        tree.dir_count(),
        tree.file_count(),
        compose_path(args.dir.as_deref(), &root).display()
    ));
    Ok(())
}

#[instrument(skip_all)]
fn plan_tree(args: &PlanArgs) -> CliResult<()> {
    let container = load_container()?;
    let settings = &container.settings;

    let words = args
        .words
        .clone()
        .unwrap_or_else(|| settings.words_file.clone());
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| settings.root_name.clone());
    let depth = args.depth.unwrap_or(settings.depth);

    let pool = WordSource::new(container.fs.clone()).load(&words)?;

    let mut rng = make_rng(args.seed);
    let tree = TreePlanner::new(&pool).plan(&root, depth, &mut rng)?;

    output::info(&output::render_tree(&tree));
    output::detail(&format!(
        "{} directories, {} files",
        tree.dir_count(),
        tree.file_count()
    ));
    Ok(())
}

#[instrument]
fn info() -> CliResult<()> {
    let container = load_container()?;
    let settings = &container.settings;

    output::header("Settings");
    output::detail(&format!("words file:  {}", settings.words_file.display()));
    output::detail(&format!("root name:   {}", settings.root_name));
    output::detail(&format!("depth:       {}", settings.depth));
    output::detail(&format!("timestamps:  {}", settings.timestamps));
    output::detail(&format!("window days: {}", settings.window_days));

    output::header("Word list");
    if container.fs.exists(&settings.words_file) {
        let pool = WordSource::new(container.fs.clone()).load(&settings.words_file)?;
        output::detail(&format!("{} usable names", pool.len()));
    } else {
        output::detail(&format!("missing: {}", settings.words_file.display()));
    }

    output::header("Expected shape");
    output::detail(&format!(
        "directories: {}",
        planner::expected_directories(settings.depth)
    ));
    output::detail(&format!(
        "files:       {}",
        planner::expected_files(settings.depth)
    ));
    Ok(())
}

#[instrument]
fn config_show() -> CliResult<()> {
    let container = load_container()?;
    let rendered = container.settings.to_toml()?;
    output::info(&rendered);
    Ok(())
}

#[instrument]
fn config_init(global: bool) -> CliResult<()> {
    let container = load_container()?;

    let path = if global {
        let path = config::global_config_path().ok_or_else(|| {
            CliError::Usage("cannot determine the global config directory".to_string())
        })?;
        if let Some(parent) = path.parent() {
            container.fs.create_dir_all(parent).map_err(|e| {
                InfraError::io(format!("create config directory {}", parent.display()), e)
            })?;
        }
        path
    } else {
        config::local_config_path(&current_dir()?)
    };

    if container.fs.exists(&path) {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }

    container
        .fs
        .write(&path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;

    output::action("Created", &path.display());
    Ok(())
}

#[instrument]
fn config_path() -> CliResult<()> {
    match config::global_config_path() {
        Some(path) => output::info(&format!("global: {}{}", path.display(), marker(&path))),
        None => output::info("global: <unavailable>"),
    }

    let local = config::local_config_path(&current_dir()?);
    output::info(&format!("local:  {}{}", local.display(), marker(&local)));
    Ok(())
}

fn marker(path: &Path) -> &'static str {
    if path.exists() {
        ""
    } else {
        " (absent)"
    }
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
