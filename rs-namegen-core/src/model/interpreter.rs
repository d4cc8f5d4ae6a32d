use log::trace;
use rand::SeedableRng;

use super::frame::{Frame, Mode};
use super::rng::{Seed, XorShift};
use super::token_table::TokenTable;
use crate::error::GenerateError;

/// Maximum number of frames on the stack, the root frame included.
pub const MAX_DEPTH: usize = 32;

/// Generates a name from `pattern`, drawing randomness from `seed`.
///
/// Syntax:
/// - a character found in `table` is replaced by one of its candidates,
///   anything else is emitted as is
/// - `( ... )` emits its content literally
/// - `< ... >` groups tokens (the whole pattern behaves as one such group)
/// - `|` separates alternatives inside a group; exactly one survives
/// - `!` capitalizes the first character of the next component
///
/// The pattern is read once, left to right. Alternatives are chosen by
/// reservoir sampling: when the `n`th alternative of a group starts, it
/// replaces the current pick with probability `1 / n` by truncating the
/// output back to where the group began.
///
/// `seed` is advanced by every draw, so consecutive calls continue the same
/// sequence. Identical `(pattern, seed, table)` always give identical results.
///
/// # Errors
/// - `NestingTooDeep` past [`MAX_DEPTH`]
/// - `UnbalancedGroup` on a stray or mismatched closer, or an unclosed group
/// - `EmptyToken` if the table returns an empty candidate
pub fn generate(table: &TokenTable, pattern: &str, seed: &mut Seed) -> Result<String, GenerateError> {
	let mut rng = XorShift::seed_from_u64(*seed);
	let result = Interpreter::new(table, &mut rng).run(pattern);
	*seed = rng.state();
	result
}

/// Checks bracket structure and depth without generating anything.
pub fn validate(pattern: &str) -> Result<(), GenerateError> {
	let mut stack: Vec<Mode> = Vec::with_capacity(MAX_DEPTH);
	for (position, c) in pattern.chars().enumerate() {
		match c {
			'(' | '<' => {
				if stack.len() + 1 >= MAX_DEPTH {
					return Err(GenerateError::NestingTooDeep { max: MAX_DEPTH });
				}
				stack.push(if c == '(' { Mode::Literal } else { Mode::Substitution });
			}
			')' | '>' => match stack.pop() {
				Some(mode) if mode.closer() == c => (),
				_ => return Err(GenerateError::UnbalancedGroup { position }),
			},
			_ => (),
		}
	}
	if stack.is_empty() {
		Ok(())
	} else {
		Err(GenerateError::UnbalancedGroup { position: pattern.chars().count() })
	}
}

/// Single-pass pattern walker.
///
/// Owns the frame stack and the output buffer for one call. The table is only
/// read; the RNG is borrowed exclusively.
struct Interpreter<'a> {
	table: &'a TokenTable,
	rng: &'a mut XorShift,
	frames: Vec<Frame>,
	output: String,
	capitalize: bool,
}

impl<'a> Interpreter<'a> {
	fn new(table: &'a TokenTable, rng: &'a mut XorShift) -> Self {
		let mut frames = Vec::with_capacity(MAX_DEPTH);
		frames.push(Frame::root());
		Self {
			table,
			rng,
			frames,
			output: String::new(),
			capitalize: false,
		}
	}

	fn run(mut self, pattern: &str) -> Result<String, GenerateError> {
		for (position, c) in pattern.chars().enumerate() {
			match c {
				'(' => self.open(Mode::Literal)?,
				'<' => self.open(Mode::Substitution)?,
				')' | '>' => self.close(c, position)?,
				'|' => self.alternative(),
				'!' => self.capitalize = true,
				_ => self.ordinary(c)?,
			}
		}

		if self.frames.len() != 1 {
			return Err(GenerateError::UnbalancedGroup { position: pattern.chars().count() });
		}
		Ok(self.output)
	}

	fn top(&self) -> &Frame {
		// The root frame is never popped.
		&self.frames[self.frames.len() - 1]
	}

	fn open(&mut self, mode: Mode) -> Result<(), GenerateError> {
		if self.frames.len() >= MAX_DEPTH {
			return Err(GenerateError::NestingTooDeep { max: MAX_DEPTH });
		}
		let skip = self.top().skip;
		let frame = Frame::open(mode, self.output.len(), self.capitalize, skip);
		self.frames.push(frame);
		Ok(())
	}

	fn close(&mut self, closer: char, position: usize) -> Result<(), GenerateError> {
		if self.frames.len() == 1 {
			return Err(GenerateError::UnbalancedGroup { position });
		}
		match self.frames.pop() {
			Some(frame) if frame.mode.closer() == closer => Ok(()),
			_ => Err(GenerateError::UnbalancedGroup { position }),
		}
	}

	fn alternative(&mut self) {
		let depth = self.frames.len() - 1;
		let parent_skips = depth > 0 && self.frames[depth - 1].skip;
		if parent_skips {
			return;
		}

		let frame = &mut self.frames[depth];
		frame.alternatives = frame.alternatives.saturating_add(1);
		if self.rng.accept(frame.alternatives) {
			trace!("depth {depth}: switching to alternative {}", frame.alternatives);
			self.output.truncate(frame.reset);
			frame.skip = false;
			self.capitalize = frame.capitalize;
		} else {
			frame.skip = true;
		}
	}

	fn ordinary(&mut self, c: char) -> Result<(), GenerateError> {
		let (skip, mode) = {
			let frame = self.top();
			(frame.skip, frame.mode)
		};
		if !skip {
			match mode {
				Mode::Literal => self.emit(c),
				Mode::Substitution => self.substitute(c)?,
			}
		}
		self.capitalize = false;
		Ok(())
	}

	fn emit(&mut self, c: char) {
		if self.capitalize {
			self.output.push(c.to_ascii_uppercase());
			self.capitalize = false;
		} else {
			self.output.push(c);
		}
	}

	fn substitute(&mut self, key: char) -> Result<(), GenerateError> {
		let table = self.table;
		let candidates = table.lookup(key);
		if candidates.is_empty() {
			self.emit(key);
			return Ok(());
		}

		let token = &candidates[self.rng.below(candidates.len())];
		let mut chars = token.chars();
		let first = chars.next().ok_or(GenerateError::EmptyToken { key })?;
		self.emit(first);
		self.output.extend(chars);
		Ok(())
	}
}
