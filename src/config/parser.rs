use crate::config::types::PatchConfig;
use crate::error::{PatchError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<PatchConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| PatchError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<PatchConfig> {
	let config: PatchConfig =
		toml::from_str(content).map_err(|source| PatchError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed config
	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::RuleSpec;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config_uses_defaults() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert_eq!(config, PatchConfig::default());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
root = "src"
extensions = ["hx", ".hxml"]

[[rules]]
pattern = 'Foo(\d+)'
replacement = "Bar$1"

[[rules]]
pattern = "Bar"
replacement = "Baz"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.root, PathBuf::from("src"));
		assert_eq!(config.extensions, vec!["hx", ".hxml"]);
		assert_eq!(
			config.rules,
			vec![
				RuleSpec::new(r"Foo(\d+)", "Bar$1"),
				RuleSpec::new("Bar", "Baz"),
			]
		);
	}

	#[test]
	fn test_parse_partial_config_keeps_default_rules() {
		let content = r#"root = "haxe/src""#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.root, PathBuf::from("haxe/src"));
		assert_eq!(config.rules, PatchConfig::default().rules);
	}

	#[test]
	fn test_parse_rules_inline_tables() {
		let content = r#"
rules = [
    { pattern = "a", replacement = "b" },
    { pattern = "b", replacement = "c" },
]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.rules.len(), 2);
		assert_eq!(config.rules[0].pattern, "a");
	}

	#[test]
	fn test_parse_invalid_toml() {
		let path = PathBuf::from("broken.toml");
		match parse_config_str("root = [[[", &path).unwrap_err() {
			PatchError::ConfigParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("broken.toml"));
			}
			_ => panic!("Expected ConfigParseError"),
		}
	}

	#[test]
	fn test_parse_unknown_rule_field() {
		let content = r#"
[[rules]]
pattern = "a"
replace = "b"
"#;
		let path = PathBuf::from("test.toml");
		assert!(parse_config_str(content, &path).is_err());
	}

	#[test]
	fn test_parse_unknown_top_level_key() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(r#"extension = ["as"]"#, &path);
		assert!(matches!(result, Err(PatchError::ConfigParseError { .. })));
	}

	#[test]
	fn test_parse_empty_extensions_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str("extensions = []", &path);
		assert!(matches!(result, Err(PatchError::InvalidConfig { .. })));
	}

	#[test]
	fn test_parse_config_file_missing() {
		let result = parse_config_file(Path::new("/nonexistent/.repatch.toml"));
		assert!(matches!(result, Err(PatchError::ConfigReadError { .. })));
	}
}
