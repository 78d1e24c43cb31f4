//! Single-file patching.
//!
//! A file is read once, run through the rule table, and written back only if
//! the text changed. The pre-patch bytes are saved to `<path>.backup` first.
//! There is no rollback: if the backup succeeds and the overwrite fails, the
//! error is returned and the backup is left in place.

use crate::error::{PatchError, Result};
use crate::rules::RuleTable;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to a file name to form its backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Result of patching one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
	/// Content changed; backup and patched file written (unless dry-run).
	Fixed,

	/// No rule changed the content; nothing written.
	Unchanged,
}

impl PatchOutcome {
	/// Status tag printed before the path.
	pub fn tag(&self) -> &'static str {
		match self {
			PatchOutcome::Fixed => "[FIXED]",
			PatchOutcome::Unchanged => "[OK]   ",
		}
	}
}

/// A patched path and its outcome. Displays as the console status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
	pub path: PathBuf,
	pub outcome: PatchOutcome,
}

impl fmt::Display for PatchReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.outcome.tag(), self.path.display())
	}
}

/// Backup location for `path`: the full file name with `.backup` appended.
pub fn backup_path(path: &Path) -> PathBuf {
	let mut backup = OsString::from(path.as_os_str());
	backup.push(BACKUP_SUFFIX);
	PathBuf::from(backup)
}

/// Patch a file in place.
pub fn patch_file(path: &Path, rules: &RuleTable) -> Result<PatchOutcome> {
	patch_file_with(path, rules, false)
}

/// Patch a file, optionally computing the outcome without writing.
pub fn patch_file_with(path: &Path, rules: &RuleTable, dry_run: bool) -> Result<PatchOutcome> {
	let bytes = std::fs::read(path).map_err(|source| PatchError::ReadFailed {
		path: path.to_path_buf(),
		source,
	})?;
	let original = String::from_utf8(bytes).map_err(|source| PatchError::Decode {
		path: path.to_path_buf(),
		source,
	})?;

	let patched = rules.apply(&original);
	if patched == original {
		return Ok(PatchOutcome::Unchanged);
	}

	if dry_run {
		return Ok(PatchOutcome::Fixed);
	}

	let backup = backup_path(path);
	std::fs::write(&backup, original.as_bytes()).map_err(|source| PatchError::BackupFailed {
		path: backup.clone(),
		source,
	})?;

	std::fs::write(path, patched.as_bytes()).map_err(|source| PatchError::WriteFailed {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(PatchOutcome::Fixed)
}
