//! Top-level module for the pattern-driven name generator.
//!
//! This module provides:
//! - The token table and its built-in lists (`TokenTable`)
//! - The deterministic random source (`XorShift`)
//! - The single-pass pattern interpreter (`generate`, `validate`)
//! - A high-level generation interface (`NameGenerator`)

/// High-level interface over a shared token table snapshot.
///
/// Exposes token-set loading, table swapping, and single or batch
/// generation.
pub mod generator;

/// Pattern interpreter.
///
/// Walks a pattern once, substituting tokens and resolving `|` alternatives
/// by reservoir sampling.
pub mod interpreter;

/// Deterministic xorshift random source used by the interpreter.
pub mod rng;

/// Token character to substitution list mapping, with JSON loading.
pub mod token_table;

/// Built-in token lists.
mod builtin;

/// Per-depth interpreter state.
///
/// This module is not exposed publicly.
mod frame;
