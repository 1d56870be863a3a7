use crate::ClockTime;

impl ClockTime {
    /// Absolute difference between the two times' seconds projections.
    /// Symmetric and never negative.
    pub const fn difference_in_seconds(self, other: ClockTime) -> i32 {
        (self.total_seconds() - other.total_seconds()).abs()
    }

    /// Splits [`difference_in_seconds`][Self::difference_in_seconds] back
    /// into a time: seconds and minutes are remainders, the hour field takes
    /// every remaining whole hour and is not wrapped modulo 24.
    pub const fn difference(self, other: ClockTime) -> ClockTime {
        let mut diff = self.difference_in_seconds(other);
        let second = diff % 60;
        diff /= 60;
        ClockTime::new(diff / 60, diff % 60, second)
    }
}
