//! Run orchestration: compile rules, scan the root, patch each file, and
//! print status lines.

use crate::config::PatchConfig;
use crate::error::{PatchError, Result};
use crate::patch::{PatchOutcome, PatchReport, patch_file_with};
use crate::rules::RuleTable;
use crate::scan::{ScanEntry, Scanner};
use std::io::Write;

/// Per-run switches that are not part of the patch configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
	/// Report what would change without writing anything.
	pub dry_run: bool,
}

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
	pub fixed: usize,
	pub unchanged: usize,
	/// Directory entries that could not be read during the walk.
	pub skipped: usize,
}

/// Patch every matching file under `config.root`, writing status lines to `out`.
///
/// The rule table is compiled before the root is touched, so a bad pattern
/// fails without any file being read. The first read, decode or write error
/// aborts the run.
pub fn run<W: Write>(config: &PatchConfig, options: &RunOptions, out: &mut W) -> Result<RunSummary> {
	config.validate()?;
	let rules = RuleTable::compile(&config.rules)?;

	if !config.root.is_dir() {
		return Err(PatchError::RootNotFound {
			path: config.root.clone(),
		});
	}

	let scanner = Scanner::from_config(config);

	print_banner(config, &rules, options, out)?;
	patch_entries(scanner.scan(), &rules, options, out)
}

/// Patch each scanned file in order and print the footer.
///
/// Skipped entries are warned about on stderr and counted; the walk carries
/// on past them.
pub fn patch_entries<I, W>(
	entries: I,
	rules: &RuleTable,
	options: &RunOptions,
	out: &mut W,
) -> Result<RunSummary>
where
	I: IntoIterator<Item = ScanEntry>,
	W: Write,
{
	let mut summary = RunSummary::default();

	for entry in entries {
		match entry {
			ScanEntry::File(path) => {
				let outcome = patch_file_with(&path, rules, options.dry_run)?;
				let report = PatchReport { path, outcome };
				match report.outcome {
					PatchOutcome::Fixed => summary.fixed += 1,
					PatchOutcome::Unchanged => summary.unchanged += 1,
				}
				emit(out, format_args!("{report}"))?;
			}
			ScanEntry::Skipped { path, reason } => {
				summary.skipped += 1;
				match path {
					Some(path) => eprintln!("warning: skipping {}: {}", path.display(), reason),
					None => eprintln!("warning: skipping entry: {}", reason),
				}
			}
		}
	}

	print_footer(&summary, options, out)?;

	Ok(summary)
}

fn print_banner<W: Write>(
	config: &PatchConfig,
	rules: &RuleTable,
	options: &RunOptions,
	out: &mut W,
) -> Result<()> {
	let extensions = config
		.extensions
		.iter()
		.map(|ext| format!("*.{}", ext.trim_start_matches('.')))
		.collect::<Vec<_>>()
		.join(", ");

	emit(out, format_args!("=== repatch ==="))?;
	if options.dry_run {
		emit(out, format_args!("Dry run: no files will be written."))?;
	}
	emit(
		out,
		format_args!(
			"Scanning '{}/' for {} rule(s) on {}...\n",
			config.root.display(),
			rules.len(),
			extensions
		),
	)
}

fn print_footer<W: Write>(summary: &RunSummary, options: &RunOptions, out: &mut W) -> Result<()> {
	emit(
		out,
		format_args!(
			"\nDone! {} file(s) fixed, {} unchanged.",
			summary.fixed, summary.unchanged
		),
	)?;
	if summary.skipped > 0 {
		emit(
			out,
			format_args!("{} unreadable entries were skipped.", summary.skipped),
		)?;
	}
	if options.dry_run {
		emit(out, format_args!("Dry run: no files were written."))
	} else {
		emit(out, format_args!("Backup copies are saved as *.backup"))
	}
}

fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<()> {
	writeln!(out, "{line}").map_err(|source| PatchError::OutputFailed { source })
}
