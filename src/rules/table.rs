use crate::config::types::RuleSpec;
use crate::error::{PatchError, Result};
use regex::Regex;
use std::borrow::Cow;

/// A compiled find/replace rule.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	/// Compiled pattern.
	pub pattern: Regex,

	/// Replacement text, expanded per match.
	pub replacement: String,
}

impl CompiledRule {
	/// Compile a rule from its configured form.
	pub fn from_spec(spec: &RuleSpec) -> Result<Self> {
		Ok(CompiledRule {
			pattern: compile_regex(&spec.pattern)?,
			replacement: spec.replacement.clone(),
		})
	}

	/// Replace every match of this rule in `input`.
	pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| PatchError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// The ordered, immutable set of rules used for a whole run.
#[derive(Debug, Clone)]
pub struct RuleTable {
	rules: Vec<CompiledRule>,
}

impl RuleTable {
	/// Compile every rule, failing on the first invalid pattern.
	pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
		let rules = specs
			.iter()
			.map(CompiledRule::from_spec)
			.collect::<Result<Vec<_>>>()?;
		Ok(RuleTable { rules })
	}

	/// Apply all rules in order. Each rule runs on the previous rule's output.
	pub fn apply(&self, input: &str) -> String {
		let mut patched = input.to_string();
		for rule in &self.rules {
			if let Cow::Owned(replaced) = rule.apply(&patched) {
				patched = replaced;
			}
		}
		patched
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
		self.rules.iter()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}
