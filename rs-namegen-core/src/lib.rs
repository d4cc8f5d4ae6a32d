//! Pattern-based fantasy name generation library.
//!
//! A short pattern such as `"!sV<c|B>(dim)"` is expanded against a table of
//! substitution lists, driven by a numeric seed:
//! - Token characters are replaced by a random entry of their list
//! - `( ... )` is copied literally, `< ... >` groups tokens
//! - `|` separates alternatives, `!` capitalizes the next component
//!
//! The same pattern, seed, and table always produce the same name.
//!
//! ```
//! use rs_namegen_core::{generate, TokenTable};
//!
//! let mut table = TokenTable::empty();
//! table.set('s', ["ach"]);
//! let mut seed = 42;
//! assert_eq!(generate(&table, "!s(dim)", &mut seed).unwrap(), "Achdim");
//! ```

/// Token table, interpreter, and high-level generator.
pub mod model;

/// Error types for generation and token loading.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{GenerateError, LoadError};
pub use model::generator::{NameGenerator, BUILTIN_SET};
pub use model::interpreter::{generate, validate, MAX_DEPTH};
pub use model::rng::{random_seed, Seed, XorShift, RNG_MAX};
pub use model::token_table::{LoadMode, TokenTable};
