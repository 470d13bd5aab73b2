//! Coil step sequencing.
//!
//! The lookup tables here are the wiring contract with the H-bridge: entry
//! `k` of a table is written when that table's phase counter moves to `k`.
//! Each (direction, resolution) pair keeps its own counter, so switching
//! resolution mid-motion does not preserve mechanical phase alignment.

use super::intent::{Direction, Resolution};

/// Levels of the four H-bridge inputs IN1..IN4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(u8);

impl CoilPattern {
    /// All inputs low, motor de-energized.
    pub const OFF: CoilPattern = CoilPattern(0);

    /// Build a pattern from a nibble, IN1 in bit 3 down to IN4 in bit 0.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// The pattern as a nibble, IN1 in bit 3 down to IN4 in bit 0.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Level of input `IN{n}`, `n` in `1..=4`.
    ///
    /// Out-of-range inputs read low.
    #[inline]
    pub const fn input(self, n: u8) -> bool {
        if n == 0 || n > 4 {
            return false;
        }
        self.0 & (1 << (4 - n)) != 0
    }

    /// Levels of IN1..IN4 in order.
    #[inline]
    pub const fn levels(self) -> [bool; 4] {
        [self.input(1), self.input(2), self.input(3), self.input(4)]
    }

    /// Number of inputs driven high.
    #[inline]
    pub const fn energized(self) -> u32 {
        self.0.count_ones()
    }
}

const fn p(bits: u8) -> CoilPattern {
    CoilPattern::from_bits(bits)
}

const FULL_RIGHT: [CoilPattern; 4] = [p(0b1010), p(0b0110), p(0b0101), p(0b1001)];
const FULL_LEFT: [CoilPattern; 4] = [p(0b1001), p(0b0101), p(0b0110), p(0b1010)];

const HALF_RIGHT: [CoilPattern; 8] = [
    p(0b1000),
    p(0b1010),
    p(0b0010),
    p(0b0110),
    p(0b0100),
    p(0b0101),
    p(0b0001),
    p(0b1001),
];
const HALF_LEFT: [CoilPattern; 8] = [
    p(0b0001),
    p(0b0101),
    p(0b0100),
    p(0b0110),
    p(0b0010),
    p(0b1010),
    p(0b1000),
    p(0b1001),
];

/// Step table for a direction and resolution.
#[inline]
pub const fn table(direction: Direction, resolution: Resolution) -> &'static [CoilPattern] {
    match (direction, resolution) {
        (Direction::Right, Resolution::Full) => &FULL_RIGHT,
        (Direction::Left, Resolution::Full) => &FULL_LEFT,
        (Direction::Right, Resolution::Half) => &HALF_RIGHT,
        (Direction::Left, Resolution::Half) => &HALF_LEFT,
    }
}

/// Coil pattern for a phase of a direction and resolution.
#[inline]
pub const fn pattern(direction: Direction, resolution: Resolution, phase: PhaseIndex) -> CoilPattern {
    table(direction, resolution)[phase.0 as usize % resolution.phase_count() as usize]
}

/// Position within one electrical cycle.
///
/// Bounded by the resolution it belongs to: `0..4` for full step and `0..8`
/// for half step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseIndex(u8);

impl PhaseIndex {
    /// Phase zero, the startup phase.
    pub const ZERO: PhaseIndex = PhaseIndex(0);

    /// Create a phase for a resolution, wrapping into range.
    #[inline]
    pub const fn new(value: u8, resolution: Resolution) -> Self {
        Self(value % resolution.phase_count())
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The following phase, wrapping at the resolution's bound.
    #[inline]
    pub const fn next(self, resolution: Resolution) -> Self {
        Self((self.0 + 1) % resolution.phase_count())
    }
}

/// Step sequencer owning one phase counter per (direction, resolution).
///
/// # Example
///
/// ```rust
/// use stepper_jog::motion::{table, Direction, Resolution, StepSequencer};
///
/// let mut sequencer = StepSequencer::new();
/// let coils = sequencer.advance(Direction::Right, Resolution::Full);
///
/// assert_eq!(coils, table(Direction::Right, Resolution::Full)[1]);
/// assert_eq!(sequencer.phase(Direction::Right, Resolution::Full).value(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequencer {
    /// Counters indexed by `[direction][resolution]`.
    phases: [[PhaseIndex; 2]; 2],
}

impl StepSequencer {
    /// Create a sequencer with every counter at phase zero.
    pub const fn new() -> Self {
        Self {
            phases: [[PhaseIndex::ZERO; 2]; 2],
        }
    }

    /// Advance one step and return the pattern to write.
    ///
    /// Only the counter for `(direction, resolution)` moves.
    pub fn advance(&mut self, direction: Direction, resolution: Resolution) -> CoilPattern {
        let slot = &mut self.phases[direction.index()][resolution.index()];
        *slot = slot.next(resolution);
        let coils = pattern(direction, resolution, *slot);

        trace!(
            "step {} {} phase {} -> {=u8:b}",
            direction,
            resolution,
            slot.value(),
            coils.bits()
        );

        coils
    }

    /// Current phase of a counter.
    #[inline]
    pub fn phase(&self, direction: Direction, resolution: Resolution) -> PhaseIndex {
        self.phases[direction.index()][resolution.index()]
    }

    /// Pattern for the current phase of a counter, without advancing.
    #[inline]
    pub fn current(&self, direction: Direction, resolution: Resolution) -> CoilPattern {
        pattern(direction, resolution, self.phase(direction, resolution))
    }

    /// Return every counter to phase zero.
    pub fn reset(&mut self) {
        self.phases = [[PhaseIndex::ZERO; 2]; 2];
    }
}
