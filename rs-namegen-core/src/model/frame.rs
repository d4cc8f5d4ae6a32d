/// How ordinary characters are treated inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
	/// `( ... )`: characters are copied verbatim.
	Literal,
	/// `< ... >` and the pattern root: characters are looked up in the token table.
	Substitution,
}

impl Mode {
	/// Bracket that closes a group of this mode.
	pub(crate) fn closer(self) -> char {
		match self {
			Mode::Literal => ')',
			Mode::Substitution => '>',
		}
	}
}

/// Interpreter state for one nesting depth.
///
/// A frame lives from its opening bracket to the matching closer. The root
/// frame covers the whole pattern.
///
/// ## Invariants
/// - `reset` never exceeds the output length while the frame is on top
/// - `alternatives >= 1`
/// - a frame whose parent skips also skips
#[derive(Debug, Clone)]
pub(crate) struct Frame {
	pub(crate) mode: Mode,
	/// Output length to truncate back to when a later alternative wins.
	pub(crate) reset: usize,
	/// Alternatives seen so far at this depth.
	pub(crate) alternatives: u32,
	/// Pending-capitalize flag at the moment the group was opened.
	pub(crate) capitalize: bool,
	/// Output at this depth is being discarded.
	pub(crate) skip: bool,
}

impl Frame {
	pub(crate) fn root() -> Self {
		Self::open(Mode::Substitution, 0, false, false)
	}

	pub(crate) fn open(mode: Mode, reset: usize, capitalize: bool, skip: bool) -> Self {
		Self {
			mode,
			reset,
			alternatives: 1,
			capitalize,
			skip,
		}
	}
}
