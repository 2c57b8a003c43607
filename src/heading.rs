/// Axis a heading moves along.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn factor(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// One-cell-per-tick movement: an axis plus a sign.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Heading {
    pub axis: Axis,
    pub sign: Sign,
}

impl Heading {
    pub const UP: Self = Self::new(Axis::Vertical, Sign::Positive);
    pub const DOWN: Self = Self::new(Axis::Vertical, Sign::Negative);
    pub const LEFT: Self = Self::new(Axis::Horizontal, Sign::Negative);
    pub const RIGHT: Self = Self::new(Axis::Horizontal, Sign::Positive);

    #[must_use]
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    /// Pixel delta of one step in this heading.
    #[must_use]
    pub fn delta(self, cell_size: i32) -> (i32, i32) {
        let step = self.sign.factor() * cell_size;
        match self.axis {
            Axis::Horizontal => (step, 0),
            Axis::Vertical => (0, step),
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.axis, self.sign.flipped())
    }
}

/// Turn guard keyed on the axis the head is currently travelling.
///
/// Only a request on the perpendicular axis changes the heading; same-axis
/// requests (repeats and reversals alike) are rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Steering {
    MovingHorizontal,
    MovingVertical,
}

impl Steering {
    #[must_use]
    pub fn of(heading: Heading) -> Self {
        match heading.axis {
            Axis::Horizontal => Self::MovingHorizontal,
            Axis::Vertical => Self::MovingVertical,
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::MovingHorizontal => Axis::Horizontal,
            Self::MovingVertical => Axis::Vertical,
        }
    }

    /// Returns whether `requested` is a legal transition from this state.
    #[must_use]
    pub fn accepts(self, requested: Heading) -> bool {
        requested.axis != self.axis()
    }

    /// Returns the heading to travel: `requested` if accepted, else `current`.
    #[must_use]
    pub fn resolve(self, current: Heading, requested: Heading) -> Heading {
        if self.accepts(requested) {
            requested
        } else {
            current
        }
    }
}
