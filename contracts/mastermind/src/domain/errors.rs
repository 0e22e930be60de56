use soroban_sdk::contracterror;

/// Domain-specific errors for the Mastermind protocol
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DomainError {
    // Lifecycle errors
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AttemptBudgetOutOfRange = 3,
    AlreadyCreated = 4,

    // Combination errors
    MalformedCombination = 5,
    ZeroDigit2 = 6,
    ZeroDigit3 = 7,
    ZeroDigit4 = 8,
    DuplicateDigit2 = 9,
    DuplicateDigit3 = 10,
    DuplicateDigit4 = 11,

    // Sequencing errors
    OutOfSequence = 12,
    AttemptsExhausted = 13,
    AlreadySolved = 14,

    // Access errors
    WrongCodebreaker = 15,
    WrongCodemaster = 16,
    SolutionMismatch = 17,

    // History ledger errors
    CapacityExceeded = 18,
    IndexOutOfBounds = 19,
    SlotOverflow = 20,
    MalformedClue = 21,
}

impl DomainError {
    /// Zero digit at a 1-based position (2..=4)
    pub fn zero_digit(position: u32) -> Self {
        match position {
            2 => DomainError::ZeroDigit2,
            3 => DomainError::ZeroDigit3,
            4 => DomainError::ZeroDigit4,
            _ => DomainError::MalformedCombination,
        }
    }

    /// Repeated digit, reported at the later 1-based position (2..=4)
    pub fn duplicate_digit(position: u32) -> Self {
        match position {
            2 => DomainError::DuplicateDigit2,
            3 => DomainError::DuplicateDigit3,
            4 => DomainError::DuplicateDigit4,
            _ => DomainError::MalformedCombination,
        }
    }
}
