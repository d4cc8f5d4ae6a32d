use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::builtin::BUILTIN_TOKENS;
use crate::error::LoadError;
use crate::io::{cache_path, file_stamp, read_file, FileStamp};

/// How decoded entries are applied by [`TokenTable::load_from_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
	/// Drop the current content and keep only the decoded entries.
	#[default]
	Replace,
	/// Overwrite the decoded keys, keep every other key.
	Merge,
}

/// Substitution lists keyed by token character.
///
/// The interpreter only reads through [`TokenTable::lookup`]. Mutation is
/// meant to happen before generation starts, or on a fresh table that is
/// swapped in afterwards.
///
/// # Invariants
/// - a key maps to a non-empty list or is absent
/// - iteration order over keys is stable (sorted)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenTable {
	tokens: BTreeMap<char, Vec<String>>,
}

impl Default for TokenTable {
	fn default() -> Self {
		Self::builtin()
	}
}

impl TokenTable {
	/// A table without any token: every character is emitted as is.
	pub fn empty() -> Self {
		Self { tokens: BTreeMap::new() }
	}

	/// The built-in fantasy lists (`s`, `v`, `V`, `c`, `B`, `C`, `i`, `m`, `M`,
	/// `D`, `d`, `t`, `T`).
	pub fn builtin() -> Self {
		let mut table = Self::empty();
		for (key, candidates) in BUILTIN_TOKENS {
			table.set(*key, candidates.iter().copied());
		}
		table
	}

	/// Candidates for `key`, empty when the key is unknown.
	pub fn lookup(&self, key: char) -> &[String] {
		self.tokens.get(&key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Replaces the candidates of one key. An empty list removes the key.
	pub fn set<I, S>(&mut self, key: char, candidates: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
		if candidates.is_empty() {
			self.tokens.remove(&key);
		} else {
			self.tokens.insert(key, candidates);
		}
	}

	/// Applies [`TokenTable::set`] to every entry.
	pub fn set_many<I, V, S>(&mut self, entries: I)
	where
		I: IntoIterator<Item = (char, V)>,
		V: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for (key, candidates) in entries {
			self.set(key, candidates);
		}
	}

	/// Overwrites this table's keys with those of `other`.
	pub fn merge(&mut self, other: &Self) {
		for (key, candidates) in &other.tokens {
			self.tokens.insert(*key, candidates.clone());
		}
	}

	/// Known keys in sorted order.
	pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
		self.tokens.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Decodes a table from JSON text such as
	/// `{"s": ["ach", "ban"], "v": ["a", "e", "i", "o", "u"]}`.
	///
	/// # Errors
	/// See [`TokenTable::load_from_json`].
	pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
		let mut table = Self::empty();
		table.set_many(require_candidates(decode(text)?)?);
		Ok(table)
	}

	/// Encodes the table in the same JSON shape [`TokenTable::from_json_str`] reads.
	pub fn to_json_string(&self) -> Result<String, LoadError> {
		Ok(serde_json::to_string_pretty(&self.tokens)?)
	}

	/// Loads entries from a JSON file into this table.
	///
	/// The file is fully decoded before the table is touched: on error the
	/// table keeps its previous content.
	///
	/// # Errors
	/// - `Io` if the file cannot be read
	/// - `Parse` if it is not valid JSON
	/// - `NotAnObject` if the root is not an object
	/// - `InvalidKey` if a field name is not exactly one character
	/// - `InvalidValue` if a value is not an array of strings
	/// - `Empty` if the object has no field, or in `Replace` mode if every
	///   list is empty
	pub fn load_from_json<P: AsRef<Path>>(&mut self, filepath: P, mode: LoadMode) -> Result<(), LoadError> {
		let mut entries = decode(&read_file(&filepath)?)?;
		if mode == LoadMode::Replace {
			entries = require_candidates(entries)?;
		}
		debug!(
			"loaded {} token(s) from {} ({:?})",
			entries.len(),
			filepath.as_ref().display(),
			mode
		);
		if mode == LoadMode::Replace {
			self.tokens.clear();
		}
		self.set_many(entries);
		Ok(())
	}

	/// Loads a JSON token file, going through a binary cache.
	///
	/// - `<stem>.bin` next to the file holds the table together with the
	///   modification time and length of the JSON it was built from. It is
	///   used, decoded with `postcard`, only while the JSON still matches.
	/// - Otherwise the JSON is decoded and the cache is (re)written.
	///
	/// A cache that cannot be read or written is reported in the log and
	/// ignored.
	pub fn open<P: AsRef<Path>>(filepath: P) -> Result<Self, LoadError> {
		let filepath = filepath.as_ref();
		let binary_path = cache_path(filepath)?;
		// Taken before reading, so a concurrent rewrite leaves the cache stale.
		let source = file_stamp(filepath)?;

		match read_cache(&binary_path) {
			Ok(cached) if cached.source == source => {
				debug!("using token cache {}", binary_path.display());
				return Ok(cached.table);
			}
			Ok(_) => debug!("token cache {} is stale", binary_path.display()),
			Err(LoadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => (),
			Err(e) => warn!("ignoring token cache {}: {e}", binary_path.display()),
		}

		let table = Self::from_json_str(&read_file(filepath)?)?;
		let cached = CachedTable { source, table };
		if let Err(e) = postcard::to_stdvec(&cached)
			.map_err(LoadError::from)
			.and_then(|bytes| fs::write(&binary_path, bytes).map_err(LoadError::from))
		{
			warn!("could not write token cache {}: {e}", binary_path.display());
		}
		Ok(cached.table)
	}
}

/// Layout of a `.bin` token cache.
#[derive(Serialize, Deserialize)]
struct CachedTable {
	source: FileStamp,
	table: TokenTable,
}

fn read_cache(path: &Path) -> Result<CachedTable, LoadError> {
	let bytes = fs::read(path)?;
	Ok(postcard::from_bytes(&bytes)?)
}

/// Rejects entries that would leave a fresh table empty.
fn require_candidates(entries: Vec<(char, Vec<String>)>) -> Result<Vec<(char, Vec<String>)>, LoadError> {
	if entries.iter().all(|(_, candidates)| candidates.is_empty()) {
		return Err(LoadError::Empty);
	}
	Ok(entries)
}

/// Decodes the external token format into `(key, candidates)` entries.
///
/// An empty array is kept as an entry; applying it removes the key.
fn decode(text: &str) -> Result<Vec<(char, Vec<String>)>, LoadError> {
	let Value::Object(fields) = serde_json::from_str::<Value>(text)? else {
		return Err(LoadError::NotAnObject);
	};

	let mut entries = Vec::with_capacity(fields.len());
	for (name, value) in fields {
		let mut chars = name.chars();
		let key = match (chars.next(), chars.next()) {
			(Some(key), None) => key,
			_ => return Err(LoadError::InvalidKey(name)),
		};
		let candidates: Vec<String> = serde_json::from_value(value).map_err(|_| LoadError::InvalidValue(key))?;
		entries.push((key, candidates));
	}

	if entries.is_empty() {
		return Err(LoadError::Empty);
	}
	Ok(entries)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn builtin_has_every_category() {
		let table = TokenTable::builtin();
		for key in ['s', 'v', 'V', 'c', 'B', 'C', 'i', 'm', 'M', 'D', 'd', 't', 'T'] {
			assert!(!table.lookup(key).is_empty(), "missing '{key}'");
		}
		assert_eq!(table.len(), 13);
		assert_eq!(table.lookup('v'), ["a", "e", "i", "o", "u", "y"]);
		assert_eq!(table.lookup('s').len(), 115);
	}

	#[test]
	fn builtin_candidates_are_not_empty() {
		let table = TokenTable::builtin();
		for key in table.keys() {
			assert!(table.lookup(key).iter().all(|c| !c.is_empty()));
		}
	}

	#[test]
	fn unknown_key_is_empty() {
		assert!(TokenTable::builtin().lookup('x').is_empty());
		assert!(TokenTable::empty().lookup('s').is_empty());
	}

	#[test]
	fn set_and_remove() {
		let mut table = TokenTable::empty();
		table.set('x', ["foo", "bar"]);
		assert_eq!(table.lookup('x'), ["foo", "bar"]);

		table.set('x', Vec::<String>::new());
		assert!(table.lookup('x').is_empty());
		assert!(table.is_empty());
	}

	#[test]
	fn set_many_overwrites_only_given_keys() {
		let mut table = TokenTable::builtin();
		let mut entries = HashMap::new();
		entries.insert('v', vec!["o".to_owned()]);
		entries.insert('z', vec!["zed".to_owned()]);
		table.set_many(entries);

		assert_eq!(table.lookup('v'), ["o"]);
		assert_eq!(table.lookup('z'), ["zed"]);
		assert_eq!(table.lookup('c').len(), 21);
	}

	#[test]
	fn merge_overwrites_keys() {
		let mut table = TokenTable::empty();
		table.set('a', ["1"]);
		table.set('b', ["2"]);
		let mut other = TokenTable::empty();
		other.set('b', ["3"]);
		table.merge(&other);
		assert_eq!(table.lookup('a'), ["1"]);
		assert_eq!(table.lookup('b'), ["3"]);
	}

	#[test]
	fn decode_json() {
		let table = TokenTable::from_json_str(r#"{"s": ["ach", "ban"], "v": ["a", "e"]}"#).unwrap();
		assert_eq!(table.lookup('s'), ["ach", "ban"]);
		assert_eq!(table.keys().collect::<Vec<_>>(), vec!['s', 'v']);
	}

	#[test]
	fn decode_rejects_bad_shapes() {
		assert!(matches!(TokenTable::from_json_str("[1, 2]"), Err(LoadError::NotAnObject)));
		assert!(matches!(TokenTable::from_json_str("{"), Err(LoadError::Parse(_))));
		assert!(matches!(TokenTable::from_json_str("{}"), Err(LoadError::Empty)));
		assert!(matches!(TokenTable::from_json_str(r#"{"s": []}"#), Err(LoadError::Empty)));
		assert!(matches!(TokenTable::from_json_str(r#"{"s": [], "v": []}"#), Err(LoadError::Empty)));
		assert!(matches!(
			TokenTable::from_json_str(r#"{"ab": ["x"]}"#),
			Err(LoadError::InvalidKey(k)) if k == "ab"
		));
		assert!(matches!(
			TokenTable::from_json_str(r#"{"": ["x"]}"#),
			Err(LoadError::InvalidKey(_))
		));
		assert!(matches!(
			TokenTable::from_json_str(r#"{"a": "x"}"#),
			Err(LoadError::InvalidValue('a'))
		));
		assert!(matches!(
			TokenTable::from_json_str(r#"{"a": [1]}"#),
			Err(LoadError::InvalidValue('a'))
		));
	}

	#[test]
	fn json_round_trip() {
		let table = TokenTable::builtin();
		let text = table.to_json_string().unwrap();
		assert_eq!(TokenTable::from_json_str(&text).unwrap(), table);
	}
}
