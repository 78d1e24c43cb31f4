//! Rule compilation and application for repatch.
//!
//! A run uses a single [`RuleTable`]: regex find/replace pairs compiled
//! once at startup and applied in order to each file's text.

pub mod table;

pub use table::{CompiledRule, RuleTable};
