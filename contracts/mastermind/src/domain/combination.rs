use super::errors::DomainError;
use super::select::select;

/// Number of digits in a combination
pub const DIGITS: usize = 4;

/// Largest value a single digit can hold
pub const MAX_DIGIT: u32 = 9;

/// Packed combinations are four-digit base-10 numbers
pub const MIN_PACKED: u32 = 1000;
pub const MAX_PACKED: u32 = 9999;

/// A secret or a guess: four base-10 digits, position 1 first.
///
/// A decoded combination is only guaranteed to be in range; call
/// [`Combination::validate`] (or use [`Combination::parse`]) before trusting
/// its digit rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Combination {
    digits: [u32; DIGITS],
}

impl Combination {
    /// Builds a combination from raw digits, rejecting anything above 9.
    pub fn from_digits(digits: [u32; DIGITS]) -> Result<Self, DomainError> {
        if digits.iter().any(|d| *d > MAX_DIGIT) {
            return Err(DomainError::MalformedCombination);
        }
        Ok(Self { digits })
    }

    /// Packs the digits as `d1*1000 + d2*100 + d3*10 + d4`.
    pub fn encode(&self) -> u32 {
        self.digits.iter().fold(0, |acc, d| acc * 10 + d)
    }

    /// Unpacks a four-digit value. A leading zero makes the value fall below
    /// 1000, so it is rejected here rather than by `validate`.
    pub fn decode(packed: u32) -> Result<Self, DomainError> {
        if !(MIN_PACKED..=MAX_PACKED).contains(&packed) {
            return Err(DomainError::MalformedCombination);
        }

        Ok(Self {
            digits: [
                packed / 1000,
                (packed / 100) % 10,
                (packed / 10) % 10,
                packed % 10,
            ],
        })
    }

    /// Decodes and validates in one step.
    pub fn parse(packed: u32) -> Result<Self, DomainError> {
        let combination = Self::decode(packed)?;
        combination.validate()?;
        Ok(combination)
    }

    /// Checks digit rules: positions 2-4 non-zero, all digits distinct.
    ///
    /// Every check is evaluated. Positions are visited in order: position i
    /// is zero-checked, then compared against every later position, before
    /// moving on; the first failure in that order is reported. Position 1 is
    /// not zero-checked here.
    pub fn validate(&self) -> Result<(), DomainError> {
        let d = &self.digits;

        let mut failure: Option<DomainError> = None;
        for i in 0..DIGITS {
            failure = select(
                failure.is_none() && i > 0 && d[i] == 0,
                Some(DomainError::zero_digit(i as u32 + 1)),
                failure,
            );
            for j in (i + 1)..DIGITS {
                failure = select(
                    failure.is_none() && d[i] == d[j],
                    Some(DomainError::duplicate_digit(j as u32 + 1)),
                    failure,
                );
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn digits(&self) -> &[u32; DIGITS] {
        &self.digits
    }

    /// One byte per digit, used as commitment preimage.
    pub fn to_bytes(&self) -> [u8; DIGITS] {
        let mut bytes = [0u8; DIGITS];
        for (byte, digit) in bytes.iter_mut().zip(self.digits.iter()) {
            *byte = *digit as u8;
        }
        bytes
    }
}
