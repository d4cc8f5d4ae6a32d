use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a pattern could not produce a name.
///
/// None of these are recoverable by retrying: the same pattern and seed
/// always reproduce the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
	/// The pattern nests groups beyond the supported depth.
	#[error("pattern nests deeper than {max} levels")]
	NestingTooDeep { max: usize },

	/// A closer without a matching opener of the same kind, or an opener left
	/// open at the end of the pattern.
	#[error("unbalanced group at character {position}")]
	UnbalancedGroup { position: usize },

	/// The token table handed back an empty candidate.
	#[error("token '{key}' selected an empty candidate")]
	EmptyToken { key: char },
}

/// Failures while populating a `TokenTable` from external data.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read token file: {0}")]
	Io(#[from] io::Error),

	#[error("malformed token data: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("token data root must be an object")]
	NotAnObject,

	#[error("token key {0:?} is not a single character")]
	InvalidKey(String),

	#[error("token '{0}' must map to an array of strings")]
	InvalidValue(char),

	#[error("token data decoded to zero entries")]
	Empty,

	#[error("token cache error: {0}")]
	Cache(#[from] postcard::Error),

	#[error("expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),
}
