use crate::config::parser::parse_config_file;
use crate::config::types::{ConfigSource, LoadedConfig, PatchConfig};
use crate::error::Result;
use std::path::Path;

/// Name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = ".repatch.toml";

/// Load the effective configuration.
///
/// Lookup order:
/// 1. `explicit`, if given (must exist)
/// 2. `.repatch.toml` in `cwd`
/// 3. Built-in defaults
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
	if let Some(path) = explicit {
		let config = parse_config_file(path)?;
		return Ok(LoadedConfig {
			config,
			source: ConfigSource::File(path.to_path_buf()),
		});
	}

	let local = cwd.join(CONFIG_FILE_NAME);
	if local.is_file() {
		let config = parse_config_file(&local)?;
		return Ok(LoadedConfig {
			config,
			source: ConfigSource::File(local),
		});
	}

	Ok(LoadedConfig {
		config: PatchConfig::default(),
		source: ConfigSource::BuiltIn,
	})
}

/// Template written by `repatch --init`. Mirrors the built-in defaults.
pub fn generate_init_template() -> String {
	r#"# repatch configuration
#
# Rules are applied in order; each rule sees the output of the previous one.
# Patterns use Rust regex syntax. In replacements, $1 or ${name} expand
# capture groups and $$ is a literal dollar sign.

root = "source"
extensions = ["hx"]

[[rules]]
pattern = 'import\s+flixel\.animation\.FlxFrameation\s*;'
replacement = "import flixel.graphics.frames.FlxFrame;"

[[rules]]
pattern = '\bFlxFrameation\b'
replacement = "FlxFrame"
"#
	.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::parser::parse_config_str;
	use crate::error::PatchError;

	#[test]
	fn test_init_template_matches_defaults() {
		let config = parse_config_str(&generate_init_template(), Path::new("init.toml")).unwrap();
		assert_eq!(config, PatchConfig::default());
	}

	#[test]
	fn test_load_config_builtin_when_absent() {
		let temp_dir = tempfile::tempdir().unwrap();
		let loaded = load_config(None, temp_dir.path()).unwrap();

		assert_eq!(loaded.source, ConfigSource::BuiltIn);
		assert_eq!(loaded.config, PatchConfig::default());
	}

	#[test]
	fn test_load_config_local_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(CONFIG_FILE_NAME);
		std::fs::write(&path, "root = \"lib\"\n").unwrap();

		let loaded = load_config(None, temp_dir.path()).unwrap();

		assert_eq!(loaded.source, ConfigSource::File(path));
		assert_eq!(loaded.config.root, Path::new("lib"));
	}

	#[test]
	fn test_load_config_explicit_wins() {
		let temp_dir = tempfile::tempdir().unwrap();
		std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "root = \"lib\"\n").unwrap();
		let explicit = temp_dir.path().join("other.toml");
		std::fs::write(&explicit, "root = \"other\"\n").unwrap();

		let loaded = load_config(Some(&explicit), temp_dir.path()).unwrap();

		assert_eq!(loaded.source, ConfigSource::File(explicit));
		assert_eq!(loaded.config.root, Path::new("other"));
	}

	#[test]
	fn test_load_config_explicit_missing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("missing.toml");

		let result = load_config(Some(&missing), temp_dir.path());
		assert!(matches!(result, Err(PatchError::ConfigReadError { .. })));
	}
}
