use crate::error::{PatchError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Scan root used when none is configured.
pub const DEFAULT_ROOT: &str = "source";

/// Extension set used when none is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["hx"];

/// Built-in rule table, applied in order.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
	(
		r"import\s+flixel\.animation\.FlxFrameation\s*;",
		"import flixel.graphics.frames.FlxFrame;",
	),
	(r"\bFlxFrameation\b", "FlxFrame"),
];

/// Complete configuration for a patch run.
///
/// Keys missing from a `.repatch.toml` fall back to the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PatchConfig {
	/// Directory under which the recursive scan starts.
	pub root: PathBuf,

	/// File extensions to patch, with or without a leading dot.
	/// Matched case-insensitively.
	pub extensions: Vec<String>,

	/// Substitution rules. Each rule sees the output of the one before it.
	pub rules: Vec<RuleSpec>,
}

/// A single find/replace rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
	/// Regular expression matched against the raw file text.
	pub pattern: String,

	/// Replacement text. `$1` / `${name}` expand capture groups.
	pub replacement: String,
}

impl RuleSpec {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
		RuleSpec {
			pattern: pattern.into(),
			replacement: replacement.into(),
		}
	}
}

impl Default for PatchConfig {
	fn default() -> Self {
		PatchConfig {
			root: PathBuf::from(DEFAULT_ROOT),
			extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
			rules: DEFAULT_RULES
				.iter()
				.map(|(pattern, replacement)| RuleSpec::new(*pattern, *replacement))
				.collect(),
		}
	}
}

impl PatchConfig {
	/// Validate the extension set and rule list.
	///
	/// Regex syntax is checked later, when the rule table is compiled.
	pub fn validate(&self) -> Result<()> {
		if self.extensions.is_empty() {
			return Err(PatchError::InvalidConfig {
				reason: "extensions must not be empty".to_string(),
			});
		}

		if let Some(ext) = self
			.extensions
			.iter()
			.find(|ext| ext.trim_start_matches('.').is_empty())
		{
			return Err(PatchError::InvalidConfig {
				reason: format!("invalid extension {:?}", ext),
			});
		}

		if let Some(index) = self.rules.iter().position(|rule| rule.pattern.is_empty()) {
			return Err(PatchError::InvalidConfig {
				reason: format!("rule {} has an empty pattern", index + 1),
			});
		}

		Ok(())
	}
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
	/// Loaded from a TOML file.
	File(PathBuf),

	/// No file found; compiled-in defaults.
	BuiltIn,
}

impl fmt::Display for ConfigSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigSource::File(path) => write!(f, "{}", path.display()),
			ConfigSource::BuiltIn => f.write_str("built-in defaults"),
		}
	}
}

/// A configuration together with its source, for display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: PatchConfig,

	/// Where it was loaded from.
	pub source: ConfigSource,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = PatchConfig::default();
		assert_eq!(config.root, PathBuf::from("source"));
		assert_eq!(config.extensions, vec!["hx"]);
		assert_eq!(config.rules.len(), 2);
		assert_eq!(config.rules[1].pattern, r"\bFlxFrameation\b");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_validate_empty_extensions() {
		let config = PatchConfig {
			extensions: vec![],
			..Default::default()
		};
		assert!(matches!(
			config.validate(),
			Err(PatchError::InvalidConfig { .. })
		));
	}

	#[test]
	fn test_validate_dot_only_extension() {
		let config = PatchConfig {
			extensions: vec![".".to_string()],
			..Default::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_validate_empty_pattern() {
		let config = PatchConfig {
			rules: vec![RuleSpec::new("a", "b"), RuleSpec::new("", "c")],
			..Default::default()
		};
		match config.validate().unwrap_err() {
			PatchError::InvalidConfig { reason } => assert!(reason.contains("rule 2")),
			_ => panic!("Expected InvalidConfig error"),
		}
	}

	#[test]
	fn test_config_source_display() {
		assert_eq!(ConfigSource::BuiltIn.to_string(), "built-in defaults");
		assert_eq!(
			ConfigSource::File(PathBuf::from("a/.repatch.toml")).to_string(),
			"a/.repatch.toml"
		);
	}
}
