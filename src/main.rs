use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use repatch::config::{CONFIG_FILE_NAME, LoadedConfig, generate_init_template, load_config};
use repatch::driver::{RunOptions, run};
use repatch::rules::RuleTable;

#[derive(Parser)]
#[command(name = "repatch")]
#[command(
	author,
	version,
	about = "Idempotent regex find/replace patcher for source trees, with backups"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Config file to use instead of ./.repatch.toml
	#[arg(long, short, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// Create a template .repatch.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .repatch.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// File extension to patch (repeatable, overrides config)
	#[arg(long = "ext", value_name = "EXT", global = true)]
	extensions: Vec<String>,

	/// Report what would change without writing any file
	#[arg(long, short = 'n')]
	dry_run: bool,

	/// Directory to scan (overrides config root)
	#[arg(value_name = "ROOT")]
	root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective configuration and where it came from
	Show,
	/// Load the configuration and compile every rule without touching files
	Validate,
}

fn main() -> ExitCode {
	match run_cli() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run_cli() -> Result<ExitCode> {
	let cli = Cli::parse();

	if cli.init {
		return handle_init(cli.force);
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let overrides = Overrides {
		root: cli.root,
		extensions: cli.extensions,
	};

	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config.as_deref(), &cwd, overrides),
				ConfigAction::Validate => {
					handle_config_validate(cli.config.as_deref(), &cwd, overrides)
				}
			},
		};
	}

	let loaded = load_effective_config(cli.config.as_deref(), &cwd, overrides)
		.context("Failed to load configuration")?;

	let options = RunOptions {
		dry_run: cli.dry_run,
	};
	let mut stdout = std::io::stdout().lock();
	run(&loaded.config, &options, &mut stdout)
		.with_context(|| format!("Patch run failed under {}", loaded.config.root.display()))?;

	Ok(ExitCode::SUCCESS)
}

/// Command-line values that replace the loaded configuration's.
struct Overrides {
	root: Option<PathBuf>,
	extensions: Vec<String>,
}

/// Load the configuration and apply command-line overrides on top.
fn load_effective_config(
	explicit: Option<&Path>,
	cwd: &Path,
	overrides: Overrides,
) -> repatch::Result<LoadedConfig> {
	let mut loaded = load_config(explicit, cwd)?;

	if let Some(root) = overrides.root {
		loaded.config.root = root;
	}
	if !overrides.extensions.is_empty() {
		loaded.config.extensions = overrides.extensions;
	}
	loaded.config.validate()?;

	Ok(loaded)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(
	explicit: Option<&Path>,
	cwd: &Path,
	overrides: Overrides,
) -> Result<ExitCode> {
	let LoadedConfig { config, source } = load_effective_config(explicit, cwd, overrides)
		.context("Failed to load configuration")?;

	println!("# Source: {}", source);
	println!("root: {}", config.root.display());
	println!("extensions: {}", config.extensions.join(", "));
	println!("rules: {}", config.rules.len());
	println!();

	for (i, rule) in config.rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    pattern: {}", rule.pattern);
		println!("    replacement: {}", rule.replacement);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(
	explicit: Option<&Path>,
	cwd: &Path,
	overrides: Overrides,
) -> Result<ExitCode> {
	let result = load_effective_config(explicit, cwd, overrides).and_then(|loaded| {
		let rules = RuleTable::compile(&loaded.config.rules)?;
		Ok((loaded, rules))
	});

	match result {
		Ok((loaded, rules)) => {
			println!(
				"Configuration is valid: {} ({} rules)",
				loaded.source,
				rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
