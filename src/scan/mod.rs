//! Recursive discovery of files to patch.
//!
//! The walk is deterministic: entries within a directory are visited in
//! file-name order. Directory symlinks are not followed; a symlink whose
//! target is a regular file is treated like that file.

use crate::config::PatchConfig;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One step of a scan.
#[derive(Debug)]
pub enum ScanEntry {
	/// A regular file whose name matches a target extension.
	File(PathBuf),

	/// An entry that could not be read. The walk continues past it.
	Skipped { path: Option<PathBuf>, reason: String },
}

/// Finds files under a root whose names end in a target extension.
#[derive(Debug, Clone)]
pub struct Scanner {
	root: PathBuf,
	/// Lowercase `.ext` suffixes.
	suffixes: Vec<String>,
}

impl Scanner {
	/// Create a scanner. Extensions may be given with or without a leading
	/// dot, in any case.
	pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let suffixes = extensions
			.into_iter()
			.map(|ext| format!(".{}", ext.as_ref().trim_start_matches('.').to_lowercase()))
			.collect();
		Scanner {
			root: root.into(),
			suffixes,
		}
	}

	pub fn from_config(config: &PatchConfig) -> Self {
		Self::new(config.root.clone(), &config.extensions)
	}

	/// Check whether a file name carries one of the target extensions.
	pub fn matches(&self, path: &Path) -> bool {
		let Some(name) = path.file_name() else {
			return false;
		};
		let name = name.to_string_lossy().to_lowercase();
		self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
	}

	/// Start a fresh walk from the root.
	pub fn scan(&self) -> Scan<'_> {
		Scan {
			scanner: self,
			walker: WalkDir::new(&self.root)
				.follow_links(false)
				.sort_by_file_name()
				.into_iter(),
		}
	}
}

/// Lazy iterator over a single walk. Not restartable; call
/// [`Scanner::scan`] again for a new walk.
pub struct Scan<'a> {
	scanner: &'a Scanner,
	walker: walkdir::IntoIter,
}

impl Iterator for Scan<'_> {
	type Item = ScanEntry;

	fn next(&mut self) -> Option<ScanEntry> {
		loop {
			match self.walker.next()? {
				Ok(entry) => {
					let is_file = entry.file_type().is_file()
						|| (entry.path_is_symlink() && entry.path().is_file());
					if is_file && self.scanner.matches(entry.path()) {
						return Some(ScanEntry::File(entry.into_path()));
					}
				}
				Err(error) => {
					let path = error.path().map(Path::to_path_buf);
					return Some(ScanEntry::Skipped {
						path,
						reason: error.to_string(),
					});
				}
			}
		}
	}
}
