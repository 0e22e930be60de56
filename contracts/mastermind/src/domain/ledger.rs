//! Fixed-capacity, index-addressed history storage.
//!
//! A ledger is a logical array of `capacity` small values. The packed layout
//! keeps every slot inside one `U256`, slot 0 in the lowest bits; the sparse
//! layout keeps a map from slot index to value. Both enforce the same bounds
//! rule, so callers never see which one is in use.

use soroban_sdk::{contracttype, Env, Map, Vec, U256};

use super::errors::DomainError;
use super::select::{indicator, one_hot_select, select};

/// Width of the packed word
pub const WORD_BITS: u32 = 256;

/// Upper bound on slots per ledger (the largest attempt budget)
pub const MAX_CAPACITY: u32 = 15;

/// Slot width for packed combinations (9999 < 2^14)
pub const COMBINATION_SLOT_BITS: u32 = 14;

/// Slot width for serialized clues (4 x 2 bits)
pub const CLUE_SLOT_BITS: u32 = 8;

type SlotBuffer = [u32; MAX_CAPACITY as usize];

/// Storage layout for history ledgers, fixed once per deployment
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HistoryLayout {
    /// All slots in a single 256-bit word
    Packed,
    /// Slot index -> value map, absent slots read as 0
    Sparse,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerSlots {
    Packed(U256),
    Sparse(Map<u32, u32>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryLedger {
    pub capacity: u32,
    pub slot_bits: u32,
    pub slots: LedgerSlots,
}

impl HistoryLedger {
    /// Creates an empty ledger.
    pub fn new(
        env: &Env,
        layout: HistoryLayout,
        capacity: u32,
        slot_bits: u32,
    ) -> Result<Self, DomainError> {
        if slot_bits == 0 || slot_bits > 32 {
            return Err(DomainError::SlotOverflow);
        }
        if capacity > MAX_CAPACITY || capacity * slot_bits > WORD_BITS {
            return Err(DomainError::CapacityExceeded);
        }

        let slots = match layout {
            HistoryLayout::Packed => LedgerSlots::Packed(U256::from_u32(env, 0)),
            HistoryLayout::Sparse => LedgerSlots::Sparse(Map::new(env)),
        };

        Ok(Self {
            capacity,
            slot_bits,
            slots,
        })
    }

    /// Places `values` into slots 0.. in order; trailing slots stay zero.
    pub fn pack(
        env: &Env,
        layout: HistoryLayout,
        capacity: u32,
        slot_bits: u32,
        values: &[u32],
    ) -> Result<Self, DomainError> {
        let empty = Self::new(env, layout, capacity, slot_bits)?;
        if values.len() as u32 > capacity {
            return Err(DomainError::CapacityExceeded);
        }

        let mut buffer: SlotBuffer = [0; MAX_CAPACITY as usize];
        for (slot, value) in buffer.iter_mut().zip(values.iter()) {
            empty.ensure_fits(*value)?;
            *slot = *value;
        }

        Ok(empty.with_buffer(env, &buffer))
    }

    pub fn layout(&self) -> HistoryLayout {
        match self.slots {
            LedgerSlots::Packed(_) => HistoryLayout::Packed,
            LedgerSlots::Sparse(_) => HistoryLayout::Sparse,
        }
    }

    /// Every slot, in index order (length == capacity).
    pub fn unpack(&self, env: &Env) -> Result<Vec<u32>, DomainError> {
        let buffer = self.to_buffer(env)?;
        let mut out = Vec::new(env);
        for value in buffer.iter().take(self.capacity as usize) {
            out.push_back(*value);
        }
        Ok(out)
    }

    /// Indexed read.
    ///
    /// Packed: one-hot sum over every slot, then exactly one indicator must
    /// have fired. Sparse: direct lookup behind the same bounds check.
    pub fn read_at(&self, env: &Env, index: u32) -> Result<u32, DomainError> {
        match &self.slots {
            LedgerSlots::Packed(_) => {
                let buffer = self.to_buffer(env)?;
                let (value, fired) =
                    one_hot_select(&buffer[..self.capacity as usize], index);
                if fired != 1 {
                    return Err(DomainError::IndexOutOfBounds);
                }
                Ok(value)
            }
            LedgerSlots::Sparse(map) => {
                self.ensure_in_bounds(index)?;
                Ok(map.get(index).unwrap_or(0))
            }
        }
    }

    /// Returns a copy of the ledger with slot `index` replaced.
    pub fn write_at(&self, env: &Env, index: u32, value: u32) -> Result<Self, DomainError> {
        self.ensure_fits(value)?;

        match &self.slots {
            LedgerSlots::Packed(_) => {
                let mut buffer = self.to_buffer(env)?;
                let mut fired = 0u32;
                for (i, slot) in buffer
                    .iter_mut()
                    .enumerate()
                    .take(self.capacity as usize)
                {
                    let hit = i as u32 == index;
                    fired += indicator(hit);
                    *slot = select(hit, value, *slot);
                }
                if fired != 1 {
                    return Err(DomainError::IndexOutOfBounds);
                }
                Ok(self.with_buffer(env, &buffer))
            }
            LedgerSlots::Sparse(map) => {
                self.ensure_in_bounds(index)?;
                let mut updated = map.clone();
                updated.set(index, value);
                Ok(Self {
                    capacity: self.capacity,
                    slot_bits: self.slot_bits,
                    slots: LedgerSlots::Sparse(updated),
                })
            }
        }
    }

    fn ensure_in_bounds(&self, index: u32) -> Result<(), DomainError> {
        if index >= self.capacity {
            return Err(DomainError::IndexOutOfBounds);
        }
        Ok(())
    }

    fn ensure_fits(&self, value: u32) -> Result<(), DomainError> {
        if (value as u64) >> self.slot_bits != 0 {
            return Err(DomainError::SlotOverflow);
        }
        Ok(())
    }

    fn to_buffer(&self, env: &Env) -> Result<SlotBuffer, DomainError> {
        let mut buffer: SlotBuffer = [0; MAX_CAPACITY as usize];
        match &self.slots {
            LedgerSlots::Packed(word) => {
                let modulus = U256::from_u128(env, 1u128 << self.slot_bits);
                for (i, slot) in buffer
                    .iter_mut()
                    .enumerate()
                    .take(self.capacity as usize)
                {
                    let extracted = word
                        .shr(i as u32 * self.slot_bits)
                        .rem_euclid(&modulus)
                        .to_u128()
                        .and_then(|v| u32::try_from(v).ok())
                        .ok_or(DomainError::SlotOverflow)?;
                    *slot = extracted;
                }
            }
            LedgerSlots::Sparse(map) => {
                for (index, value) in map.iter() {
                    if index >= self.capacity {
                        return Err(DomainError::IndexOutOfBounds);
                    }
                    buffer[index as usize] = value;
                }
            }
        }
        Ok(buffer)
    }

    fn with_buffer(&self, env: &Env, buffer: &SlotBuffer) -> Self {
        let slots = match self.layout() {
            HistoryLayout::Packed => {
                let mut word = U256::from_u32(env, 0);
                for (i, value) in buffer.iter().enumerate().take(self.capacity as usize) {
                    word = word.add(&U256::from_u32(env, *value).shl(i as u32 * self.slot_bits));
                }
                LedgerSlots::Packed(word)
            }
            HistoryLayout::Sparse => {
                let mut map = Map::new(env);
                for (i, value) in buffer.iter().enumerate().take(self.capacity as usize) {
                    if *value != 0 {
                        map.set(i as u32, *value);
                    }
                }
                LedgerSlots::Sparse(map)
            }
        };

        Self {
            capacity: self.capacity,
            slot_bits: self.slot_bits,
            slots,
        }
    }
}
