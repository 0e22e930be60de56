use soroban_sdk::{Env, Vec};

use super::combination::{Combination, DIGITS};
use super::errors::DomainError;
use super::select::indicator;

/// Bits used per clue slot when serialized
pub const CLUE_MARK_BITS: u32 = 2;

/// Feedback for a single guess position
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ClueMark {
    /// Digit not in the solution
    Miss = 0,
    /// Digit in the solution at another position
    Blow = 1,
    /// Digit at the same position in the solution
    Hit = 2,
}

impl ClueMark {
    pub fn from_u32(value: u32) -> Result<Self, DomainError> {
        match value {
            0 => Ok(ClueMark::Miss),
            1 => Ok(ClueMark::Blow),
            2 => Ok(ClueMark::Hit),
            _ => Err(DomainError::MalformedClue),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

/// Clue for a complete guess (4 positions)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Clue {
    marks: [ClueMark; DIGITS],
}

impl Clue {
    /// Scores `guess` against `solution`.
    ///
    /// All 16 position pairs are compared. A hit contributes 2 and a blow 1;
    /// since each combination has distinct digits, at most one pair per guess
    /// position matches, but the sum is still checked rather than clamped.
    pub fn compute(guess: &Combination, solution: &Combination) -> Result<Self, DomainError> {
        let g = guess.digits();
        let s = solution.digits();

        let mut sums = [0u32; DIGITS];
        for i in 0..DIGITS {
            for j in 0..DIGITS {
                let is_equal = indicator(g[i] == s[j]);
                sums[i] += is_equal * (1 + indicator(i == j));
            }
        }

        let mut marks = [ClueMark::Miss; DIGITS];
        for (mark, sum) in marks.iter_mut().zip(sums.iter()) {
            *mark = ClueMark::from_u32(*sum)?;
        }

        Ok(Self { marks })
    }

    /// Builds a clue from raw slot values
    pub fn from_values(values: [u32; DIGITS]) -> Result<Self, DomainError> {
        let mut marks = [ClueMark::Miss; DIGITS];
        for (mark, value) in marks.iter_mut().zip(values.iter()) {
            *mark = ClueMark::from_u32(*value)?;
        }
        Ok(Self { marks })
    }

    /// True when every position is a hit
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|m| *m == ClueMark::Hit)
    }

    /// Two bits per slot, position 1 in the lowest bits.
    pub fn serialize(&self) -> u32 {
        self.marks
            .iter()
            .enumerate()
            .fold(0, |acc, (i, m)| acc | (m.as_u32() << (i as u32 * CLUE_MARK_BITS)))
    }

    pub fn deserialize(serialized: u32) -> Result<Self, DomainError> {
        if serialized >> (DIGITS as u32 * CLUE_MARK_BITS) != 0 {
            return Err(DomainError::MalformedClue);
        }

        let mask = (1 << CLUE_MARK_BITS) - 1;
        let mut values = [0u32; DIGITS];
        for (i, value) in values.iter_mut().enumerate() {
            *value = (serialized >> (i as u32 * CLUE_MARK_BITS)) & mask;
        }
        Self::from_values(values)
    }

    /// Converts the clue to Vec<u32> for the contract interface
    pub fn to_vec(&self, env: &Env) -> Vec<u32> {
        let mut result = Vec::new(env);
        for mark in self.marks.iter() {
            result.push_back(mark.as_u32());
        }
        result
    }
}
