use crate::ClockTime;

impl ClockTime {
    /// Returns true iff `self` is strictly later than `other` when both are
    /// projected to seconds since 00:00:00.
    ///
    /// This is the only ordering the type exposes. Combine it with `==` for
    /// the remaining comparisons.
    pub const fn is_greater_than(self, other: ClockTime) -> bool {
        self.total_seconds() > other.total_seconds()
    }

    /// Like [`is_greater_than`][Self::is_greater_than], comparing against a
    /// time given as raw components.
    pub const fn is_greater_than_hms(self, hour: i32, minute: i32, second: i32) -> bool {
        self.is_greater_than(ClockTime::new(hour, minute, second))
    }
}

#[cfg(test)]
mod tests {
    use crate::ClockTime;

    #[test]
    fn test_is_greater_than() {
        assert!(ClockTime::new(1, 0, 0).is_greater_than(ClockTime::new(0, 59, 59)));
        assert!(!ClockTime::new(0, 59, 59).is_greater_than(ClockTime::new(1, 0, 0)));

        // Strict: a time is not greater than itself.
        assert!(!ClockTime::new(1, 0, 0).is_greater_than(ClockTime::new(1, 0, 0)));

        // Out-of-range fields compare by their projection.
        assert!(ClockTime::new(0, 61, 0).is_greater_than(ClockTime::new(1, 0, 0)));
        assert!(ClockTime::new(0, 0, 0).is_greater_than(ClockTime::new(-1, 59, 59)));
    }

    #[test]
    fn test_is_greater_than_hms() {
        assert!(ClockTime::new(1, 0, 0).is_greater_than_hms(0, 59, 59));
        assert!(!ClockTime::new(1, 0, 0).is_greater_than_hms(1, 0, 0));
        assert!(!ClockTime::new(1, 0, 0).is_greater_than_hms(1, 0, 1));
    }

    #[test]
    fn test_agrees_with_equality() {
        for (a, b) in crate::random_times(500)
            .into_iter()
            .zip(crate::random_times(500).into_iter().rev())
        {
            // Exactly one of a > b, b > a, a == b holds for canonical times.
            let greater = a.is_greater_than(b) as u8;
            let less = b.is_greater_than(a) as u8;
            let equal = (a == b) as u8;
            assert_eq!(greater + less + equal, 1);
        }
    }
}
