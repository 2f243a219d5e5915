//! Seeded 32-bit Mersenne Twister (MT19937)
//!
//! Puzzle boards are chosen from this generator's output, so the sequence has to
//! match the reference MT19937 bit for bit: a given puzzle id must produce the
//! same boards everywhere, including games saved by older versions.

use serde::{Deserialize, Serialize};
use std::fmt;

const STATE_LENGTH: usize = 624;
const SHIFT: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;
const TEMPERING_MASK_B: u32 = 0x9d2c_5680;
const TEMPERING_MASK_C: u32 = 0xefc6_0000;

/// Number of values in an exported state: the cursor followed by the state words
pub const SAVED_STATE_LENGTH: usize = STATE_LENGTH + 1;

/// MT19937 generator with an owned state array
#[derive(Clone)]
pub struct MersenneTwister {
    mt: [u32; STATE_LENGTH],
    index: usize,
}

/// Error returned when an exported state cannot be restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    InvalidLength(usize),
    InvalidCursor(u32),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Saved generator state must hold {SAVED_STATE_LENGTH} values, got {len}"
                )
            }
            Self::InvalidCursor(cursor) => {
                write!(
                    f,
                    "Saved generator cursor must be at most {STATE_LENGTH}, got {cursor}"
                )
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Exported generator state
///
/// Serialized as a flat array of 625 numbers: the cursor, then the 624 state words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SavedState(Vec<u32>);

impl SavedState {
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    #[must_use]
    pub fn cursor(&self) -> u32 {
        self.0[0]
    }
}

impl TryFrom<Vec<u32>> for SavedState {
    type Error = StateError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        if values.len() != SAVED_STATE_LENGTH {
            return Err(StateError::InvalidLength(values.len()));
        }
        if values[0] as usize > STATE_LENGTH {
            return Err(StateError::InvalidCursor(values[0]));
        }
        Ok(Self(values))
    }
}

impl From<SavedState> for Vec<u32> {
    fn from(state: SavedState) -> Self {
        state.0
    }
}

impl MersenneTwister {
    /// Create a generator from a 32-bit seed
    ///
    /// # Examples
    /// ```
    /// use duotrigordle::core::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(5489);
    /// assert_eq!(rng.next_u32(), 3_499_211_612);
    /// ```
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; STATE_LENGTH];
        mt[0] = seed;
        for i in 1..STATE_LENGTH {
            let prev = mt[i - 1];
            mt[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            mt,
            index: STATE_LENGTH,
        }
    }

    /// Create a generator seeded with a puzzle id
    ///
    /// Ids outside the `u32` range wrap modulo 2^32, so negative ids are accepted.
    #[must_use]
    pub fn from_puzzle_id(id: i64) -> Self {
        Self::new(id as u32)
    }

    /// Restore a generator from a previously exported state
    ///
    /// The restored generator continues exactly where the exported one stopped.
    #[must_use]
    pub fn from_state(state: &SavedState) -> Self {
        let (cursor, words) = state.0.split_at(1);
        let mut mt = [0u32; STATE_LENGTH];
        mt.copy_from_slice(words);
        Self {
            mt,
            index: cursor[0] as usize,
        }
    }

    /// Restore a generator from raw exported values
    ///
    /// # Errors
    /// Returns `StateError` if the slice does not hold 625 values or the cursor is
    /// past the end of the state array.
    pub fn from_values(values: &[u32]) -> Result<Self, StateError> {
        let state = SavedState::try_from(values.to_vec())?;
        Ok(Self::from_state(&state))
    }

    /// Export the current state
    #[must_use]
    pub fn save(&self) -> SavedState {
        let mut values = Vec::with_capacity(SAVED_STATE_LENGTH);
        values.push(self.index as u32);
        values.extend_from_slice(&self.mt);
        SavedState(values)
    }

    /// Regenerate all 624 state words
    fn twist(&mut self) {
        for i in 0..STATE_LENGTH {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % STATE_LENGTH] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            self.mt[i] = self.mt[(i + SHIFT) % STATE_LENGTH] ^ (y >> 1) ^ mag;
        }
    }

    /// Draw the next 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_LENGTH {
            self.twist();
            self.index = 0;
        }

        let mut y = self.mt[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & TEMPERING_MASK_B;
        y ^= (y << 15) & TEMPERING_MASK_C;
        y ^= y >> 18;

        y
    }

    /// Uniform float in [0, 1]
    pub fn next_f64_closed(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform float in (0, 1)
    pub fn next_f64_open(&mut self) -> f64 {
        (f64::from(self.next_u32()) + 0.5) / 4_294_967_296.0
    }

    /// 53-bit integer built from two draws
    pub fn next_u53(&mut self) -> u64 {
        let high = u64::from(self.next_u32() >> 5);
        let low = u64::from(self.next_u32() >> 6);
        (high << 26) + low
    }

    /// Uniform float in [0, 1) with 53 bits of precision
    pub fn next_f64_53(&mut self) -> f64 {
        self.next_u53() as f64 / 9_007_199_254_740_992.0
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl rand::RngCore for MersenneTwister {
    fn next_u32(&mut self) -> u32 {
        Self::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(Self::next_u32(self));
        let high = u64::from(Self::next_u32(self));
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = Self::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
