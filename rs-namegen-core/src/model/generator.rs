use std::path::Path;
use std::sync::Arc;
use std::thread;

use log::debug;
use rand::{RngCore, SeedableRng};

use crate::error::{GenerateError, LoadError};
use crate::io;
use crate::model::interpreter::{generate, validate};
use crate::model::rng::{Seed, XorShift};
use crate::model::token_table::TokenTable;

/// Name of the built-in token set, usable wherever a set name is expected.
pub const BUILTIN_SET: &str = "builtin";

/// High-level generator serving names from an immutable token table snapshot.
///
/// # Responsibilities
/// - Load token sets (`.json` files) from a directory and merge them
/// - Swap in a new table without disturbing callers holding the old one
/// - Generate single names or deterministic batches in parallel
#[derive(Debug, Clone)]
pub struct NameGenerator {
	table: Arc<TokenTable>,
	token_set_names: Vec<String>,
}

impl Default for NameGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl NameGenerator {
	/// Generator backed by the built-in token lists.
	pub fn new() -> Self {
		Self::with_table(TokenTable::builtin(), vec![BUILTIN_SET.to_owned()])
	}

	/// Generator backed by an explicit table.
	pub fn with_table(table: TokenTable, token_set_names: Vec<String>) -> Self {
		Self {
			table: Arc::new(table),
			token_set_names,
		}
	}

	/// Creates a generator by merging every `.json` token set of a directory.
	///
	/// # Behavior
	/// - Files are merged in name order; a later file overrides keys of an
	///   earlier one.
	/// - Each set name is the file name without extension.
	/// - Subdirectories are ignored.
	///
	/// # Errors
	/// - `NotADirectory` if `folder` is not a directory
	/// - any `LoadError` of a failing file
	pub fn from_folder<P: AsRef<Path>>(folder: P) -> Result<Self, LoadError> {
		let names = Self::list_token_sets(&folder)?;
		let mut generator = Self::with_table(TokenTable::empty(), Vec::new());
		generator.load_token_sets(folder, &names)?;
		Ok(generator)
	}

	/// Names of the `.json` token sets available in a directory.
	pub fn list_token_sets<P: AsRef<Path>>(folder: P) -> Result<Vec<String>, LoadError> {
		let folder = folder.as_ref();
		if !folder.is_dir() {
			return Err(LoadError::NotADirectory(folder.to_path_buf()));
		}

		io::files_with_extension(folder, "json")?
			.iter()
			.map(|file| io::set_name(file).map_err(LoadError::from))
			.collect()
	}

	/// Rebuilds the table from the named sets of `folder` and swaps it in.
	///
	/// [`BUILTIN_SET`] refers to the built-in lists. The current table is kept
	/// if any set fails to load.
	pub fn load_token_sets<P: AsRef<Path>, S: AsRef<str>>(&mut self, folder: P, names: &[S]) -> Result<(), LoadError> {
		let folder = folder.as_ref();
		let mut table = TokenTable::empty();
		let mut loaded = Vec::with_capacity(names.len());

		for name in names {
			let name = name.as_ref();
			if name == BUILTIN_SET {
				table.merge(&TokenTable::builtin());
			} else {
				table.merge(&TokenTable::open(folder.join(format!("{name}.json")))?);
			}
			loaded.push(name.to_owned());
		}

		debug!("token sets {:?} loaded, {} key(s)", loaded, table.len());
		self.table = Arc::new(table);
		self.token_set_names = loaded;
		Ok(())
	}

	/// Names of the token sets merged into the current table.
	pub fn get_token_set_names(&self) -> &[String] {
		&self.token_set_names
	}

	/// Shared handle on the current table.
	pub fn table(&self) -> Arc<TokenTable> {
		Arc::clone(&self.table)
	}

	/// Generates one name; `seed` is advanced past the draws it used.
	pub fn generate(&self, pattern: &str, seed: &mut Seed) -> Result<String, GenerateError> {
		generate(&self.table, pattern, seed)
	}

	/// Generates `count` names from `pattern`.
	///
	/// One seed per name is drawn sequentially from `seed`, then names are
	/// produced on up to `num_cpus` threads sharing the table. Output order
	/// follows seed order, so the result does not depend on the thread count.
	///
	/// # Errors
	/// Structural errors are reported before any work is spawned. The first
	/// `EmptyToken` error in seed order is returned.
	pub fn generate_batch(&self, pattern: &str, seed: &mut Seed, count: usize) -> Result<Vec<String>, GenerateError> {
		validate(pattern)?;

		let mut rng = XorShift::seed_from_u64(*seed);
		let seeds: Vec<Seed> = (0..count).map(|_| u64::from(rng.next_u32()) | 1).collect();
		*seed = rng.state();

		if seeds.is_empty() {
			return Ok(Vec::new());
		}

		let workers = num_cpus::get().clamp(1, seeds.len());
		let chunk_size = seeds.len().div_ceil(workers);
		let table: &TokenTable = &self.table;

		thread::scope(|scope| -> Result<Vec<String>, GenerateError> {
			let handles: Vec<_> = seeds
				.chunks(chunk_size)
				.map(|chunk| {
					scope.spawn(move || {
						chunk
							.iter()
							.map(|&seed| {
								let mut seed = seed;
								generate(table, pattern, &mut seed)
							})
							.collect::<Result<Vec<String>, GenerateError>>()
					})
				})
				.collect();

			let mut names = Vec::with_capacity(seeds.len());
			for handle in handles {
				match handle.join() {
					Ok(chunk) => names.extend(chunk?),
					Err(panic) => std::panic::resume_unwind(panic),
				}
			}
			Ok(names)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_uses_builtin() {
		let generator = NameGenerator::new();
		assert_eq!(generator.get_token_set_names(), [BUILTIN_SET]);
		assert_eq!(generator.table().len(), 13);
	}

	#[test]
	fn batch_is_deterministic_and_advances_seed() {
		let generator = NameGenerator::new();
		let mut a = 99;
		let mut b = 99;
		let first = generator.generate_batch("!sV<c|B>s", &mut a, 50).unwrap();
		let second = generator.generate_batch("!sV<c|B>s", &mut b, 50).unwrap();
		assert_eq!(first.len(), 50);
		assert_eq!(first, second);
		assert_eq!(a, b);
		assert_ne!(a, 99);
	}

	#[test]
	fn batch_matches_sequential_generation() {
		let generator = NameGenerator::new();
		let mut seed = 2024;
		let batch = generator.generate_batch("!BVC(ar)", &mut seed, 9).unwrap();

		let mut rng = XorShift::from_state(2024);
		for name in batch {
			let mut name_seed = u64::from(rng.draw()) | 1;
			assert_eq!(generator.generate("!BVC(ar)", &mut name_seed).unwrap(), name);
		}
	}

	#[test]
	fn batch_rejects_bad_pattern_up_front() {
		let generator = NameGenerator::new();
		let mut seed = 5;
		assert_eq!(
			generator.generate_batch("<s", &mut seed, 3),
			Err(GenerateError::UnbalancedGroup { position: 2 })
		);
		assert_eq!(seed, 5);
	}

	#[test]
	fn empty_batch() {
		let generator = NameGenerator::new();
		let mut seed = 5;
		assert_eq!(generator.generate_batch("s", &mut seed, 0), Ok(Vec::new()));
	}
}
