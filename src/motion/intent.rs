//! Motion intent, direction and resolution types.

/// What the direction switches ask the motor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionIntent {
    /// No direction selected, or both selected at once.
    #[default]
    Stopped,
    /// Step right on each jog press.
    RotateRight,
    /// Step left on each jog press.
    RotateLeft,
}

impl MotionIntent {
    /// The direction to step in, or `None` when stopped.
    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            MotionIntent::Stopped => None,
            MotionIntent::RotateRight => Some(Direction::Right),
            MotionIntent::RotateLeft => Some(Direction::Left),
        }
    }

    /// Whether a jog press should move the motor.
    #[inline]
    pub const fn is_moving(self) -> bool {
        !matches!(self, MotionIntent::Stopped)
    }
}

/// Rotation direction of a single step.
///
/// Only the two moving intents map to a direction, so a step can never be
/// requested while stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Right (clockwise when wired as on the reference board).
    Right,
    /// Left.
    Left,
}

impl Direction {
    /// All directions, in table order.
    pub const ALL: [Direction; 2] = [Direction::Right, Direction::Left];

    /// Table row for this direction.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

impl From<Direction> for MotionIntent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Right => MotionIntent::RotateRight,
            Direction::Left => MotionIntent::RotateLeft,
        }
    }
}

/// Step resolution selected by the mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 4-phase cycle, two coils energized per phase.
    Full,
    /// 8-phase cycle alternating one and two energized coils.
    Half,
}

impl Resolution {
    /// All resolutions, in table order.
    pub const ALL: [Resolution; 2] = [Resolution::Full, Resolution::Half];

    /// Number of phases in one electrical cycle.
    #[inline]
    pub const fn phase_count(self) -> u8 {
        match self {
            Resolution::Full => 4,
            Resolution::Half => 8,
        }
    }

    /// Table column for this resolution.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Resolution::Full => 0,
            Resolution::Half => 1,
        }
    }
}

/// Auxiliary half-turn request from the two half-turn switches.
///
/// Only shown on the display; a half-turn request never moves the motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalfTurn {
    /// Neither half-turn switch asserted.
    #[default]
    None,
    /// Half turn right requested.
    Right,
    /// Half turn left requested.
    Left,
}
