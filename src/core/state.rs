//! The fixed alphabet of the "01" recognizers.
//!
//! Both machines share the same state set {A, B, C}, input alphabet
//! {'0', '1'} and output alphabet {'a', 'b'}. The sets are closed: there
//! is no way to construct a state or symbol outside them, so the only
//! fallible conversion is parsing raw console input into [`Symbol`]s.

use super::error::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A machine state.
///
/// States are opaque labels with no internal structure. `A` is the start
/// state of both recognizers; `C` is the state reached immediately after
/// an "01" occurrence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum State {
    A,
    B,
    C,
}

impl State {
    /// The full state set, in declaration order.
    ///
    /// Used for totality checks over the transition tables.
    pub fn all() -> [State; 3] {
        [State::A, State::B, State::C]
    }

    /// The state's display name.
    pub fn name(&self) -> &'static str {
        match self {
            State::A => "A",
            State::B => "B",
            State::C => "C",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An input symbol from the binary alphabet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    Zero,
    One,
}

impl Symbol {
    /// The full input alphabet.
    pub fn all() -> [Symbol; 2] {
        [Symbol::Zero, Symbol::One]
    }

    /// The character this symbol renders as.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }

    /// Parse a raw input string into a symbol sequence.
    ///
    /// Any character outside `{'0', '1'}` is rejected with
    /// [`MachineError::InvalidSymbol`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeroone::{MachineError, Symbol};
    ///
    /// let input = Symbol::parse_sequence("011").unwrap();
    /// assert_eq!(input, vec![Symbol::Zero, Symbol::One, Symbol::One]);
    ///
    /// let err = Symbol::parse_sequence("012").unwrap_err();
    /// assert_eq!(err, MachineError::InvalidSymbol('2'));
    /// ```
    pub fn parse_sequence(input: &str) -> Result<Vec<Symbol>, MachineError> {
        input.chars().map(Symbol::try_from).collect()
    }
}

impl TryFrom<char> for Symbol {
    type Error = MachineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Symbol::Zero),
            '1' => Ok(Symbol::One),
            other => Err(MachineError::InvalidSymbol(other)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An output symbol.
///
/// `A` (rendered `'a'`) signals that the pattern "01" was just recognized;
/// `B` (rendered `'b'`) is emitted everywhere else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Output {
    A,
    B,
}

impl Output {
    /// The character this output renders as.
    pub fn as_char(&self) -> char {
        match self {
            Output::A => 'a',
            Output::B => 'b',
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
