use crate::error::error;
use crate::{ClockTime, Error};
use chrono::{NaiveTime, Timelike};

/// Truncates any subsecond precision.
impl From<NaiveTime> for ClockTime {
    fn from(value: NaiveTime) -> Self {
        ClockTime::new(
            value.hour() as i32,
            value.minute() as i32,
            value.second() as i32,
        )
    }
}

/// Fails when any field is outside its canonical range.
impl TryFrom<ClockTime> for NaiveTime {
    type Error = Error;

    fn try_from(value: ClockTime) -> Result<Self, Error> {
        let out_of_range = || error("clock time out of range for chrono::NaiveTime");
        let hour = u32::try_from(value.hour()).map_err(|_| out_of_range())?;
        let minute = u32::try_from(value.minute()).map_err(|_| out_of_range())?;
        let second = u32::try_from(value.second()).map_err(|_| out_of_range())?;
        NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use crate::ClockTime;
    use chrono::NaiveTime;

    #[test]
    fn test() {
        assert_eq!(
            ClockTime::from(NaiveTime::from_hms_opt(23, 59, 59).unwrap()),
            ClockTime::new(23, 59, 59)
        );
        assert_eq!(
            ClockTime::from(NaiveTime::from_hms_nano_opt(1, 2, 3, 999_999_999).unwrap()),
            ClockTime::new(1, 2, 3)
        );
        assert_eq!(
            NaiveTime::try_from(ClockTime::new(23, 59, 59)).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
        assert!(NaiveTime::try_from(ClockTime::new(24, 59, 59)).is_err());
        assert!(NaiveTime::try_from(ClockTime::new(23, 60, 59)).is_err());
        assert!(NaiveTime::try_from(ClockTime::new(23, 59, 60)).is_err());
        assert!(NaiveTime::try_from(ClockTime::new(-1, 0, 0)).is_err());
    }
}
