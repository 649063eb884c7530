//! Wolfram rule decoding.
//!
//! An elementary rule number (0-255) fixes the next state for each of the
//! eight possible three-cell neighborhoods. The canonical presentation lists
//! neighborhoods as {111, 110, 101, 100, 011, 010, 001, 000}, with the
//! outcome for `111` taken from the most significant bit of the number.

use crate::schema::ConfigError;

/// A decoded elementary rule.
///
/// Outcomes are stored indexed by the neighborhood's numeric value
/// `left*4 + center*2 + right`, so a transition is a single table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    number: u8,
    /// Outcome per neighborhood value; entry `i` answers the pattern whose
    /// bits spell `i` (entry 6 answers `110`).
    table: [bool; 8],
}

impl RuleTable {
    /// Decode a rule number. Every `u8` is a valid rule.
    pub fn new(number: u8) -> Self {
        let mut table = [false; 8];
        for (value, outcome) in table.iter_mut().enumerate() {
            *outcome = (number >> value) & 1 == 1;
        }
        Self { number, table }
    }

    /// Decode a rule number arriving from user input, where it may be out of
    /// range.
    pub fn from_number(number: i64) -> Result<Self, ConfigError> {
        if !(0..=255).contains(&number) {
            return Err(ConfigError::InvalidRule(number));
        }
        Ok(Self::new(number as u8))
    }

    /// The rule number this table was decoded from.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Next state for a cell with the given neighborhood.
    #[inline]
    pub fn next(&self, left: bool, center: bool, right: bool) -> bool {
        self.table[(left as usize) << 2 | (center as usize) << 1 | right as usize]
    }

    /// Outcomes in the canonical order {111, 110, ..., 000}.
    pub fn outcomes(&self) -> [bool; 8] {
        let mut outcomes = [false; 8];
        for (i, outcome) in outcomes.iter_mut().enumerate() {
            *outcome = self.table[7 - i];
        }
        outcomes
    }
}
