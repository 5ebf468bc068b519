//! Route path patterns.
//!
//! Patterns use the same Django-style syntax as Reinhardt's URL routers:
//!
//! - `/about/` matches exactly
//! - `/users/{id}/` captures one path segment
//! - `/docs/{path:*}` captures the rest of the path, slashes included

use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use thiserror::Error;

/// Maximum pattern length in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum number of `/`-separated segments in a pattern.
const MAX_PATTERN_SEGMENTS: usize = 32;

/// Size limit of the compiled regex.
const MAX_REGEX_SIZE: usize = 1 << 20;

/// Errors raised while compiling a pattern.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
	#[error("pattern is {length} bytes long, the limit is {max}", max = MAX_PATTERN_LENGTH)]
	TooLong { length: usize },

	#[error("pattern has {segments} segments, the limit is {max}", max = MAX_PATTERN_SEGMENTS)]
	TooManySegments { segments: usize },

	#[error("unclosed parameter in pattern `{0}`")]
	UnclosedParameter(String),

	#[error("invalid parameter name `{name}` in pattern `{pattern}`")]
	InvalidParameter { pattern: String, name: String },

	#[error("failed to compile pattern: {0}")]
	Regex(#[from] regex::Error),
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	pattern: String,
	regex: Regex,
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_hydrate_env::PathPattern;
	///
	/// let pattern = PathPattern::new("/users/{id}/").unwrap();
	/// let params = pattern.matches("/users/42/").unwrap();
	/// assert_eq!(params["id"], "42");
	/// assert!(pattern.matches("/users/42/posts/").is_none());
	/// ```
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				length: pattern.len(),
			});
		}
		let segments = pattern.split('/').count();
		if segments > MAX_PATTERN_SEGMENTS {
			return Err(PatternError::TooManySegments { segments });
		}

		let (source, param_names) = compile(pattern)?;
		let regex = RegexBuilder::new(&source)
			.size_limit(MAX_REGEX_SIZE)
			.build()?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Returns the pattern as written.
	pub fn as_str(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Matches a path, returning the captured parameters.
	pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
		let captures = self.regex.captures(path)?;
		Some(
			self.param_names
				.iter()
				.filter_map(|name| {
					captures
						.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect(),
		)
	}
}

/// Translates a pattern into an anchored regex and its parameter names.
fn compile(pattern: &str) -> Result<(String, Vec<String>), PatternError> {
	let mut source = String::from("^");
	let mut param_names = Vec::new();
	let mut rest = pattern;

	while let Some(open) = rest.find('{') {
		source.push_str(&regex::escape(&rest[..open]));
		let after_open = &rest[open + 1..];
		let close = after_open
			.find('}')
			.ok_or_else(|| PatternError::UnclosedParameter(pattern.to_string()))?;
		let param = &after_open[..close];

		let (name, wildcard) = match param.strip_suffix(":*") {
			Some(name) => (name, true),
			None => (param, false),
		};
		if !is_identifier(name) || param_names.iter().any(|n| n == name) {
			return Err(PatternError::InvalidParameter {
				pattern: pattern.to_string(),
				name: name.to_string(),
			});
		}

		if wildcard {
			source.push_str(&format!("(?P<{name}>.*)"));
		} else {
			source.push_str(&format!("(?P<{name}>[^/]+)"));
		}
		param_names.push(name.to_string());
		rest = &after_open[close + 1..];
	}

	source.push_str(&regex::escape(rest));
	source.push('$');
	Ok((source, param_names))
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
