use crate::error::error;
use crate::{ClockTime, Error};
use jiff::civil::Time;

/// Truncates any subsecond precision.
impl From<Time> for ClockTime {
    fn from(value: Time) -> Self {
        ClockTime::new(
            value.hour() as i32,
            value.minute() as i32,
            value.second() as i32,
        )
    }
}

/// Fails when any field is outside its canonical range.
impl TryFrom<ClockTime> for Time {
    type Error = Error;

    fn try_from(value: ClockTime) -> Result<Self, Error> {
        let out_of_range = || error("clock time out of range for jiff::civil::Time");
        let hour = i8::try_from(value.hour()).map_err(|_| out_of_range())?;
        let minute = i8::try_from(value.minute()).map_err(|_| out_of_range())?;
        let second = i8::try_from(value.second()).map_err(|_| out_of_range())?;
        Time::new(hour, minute, second, 0).map_err(|_| out_of_range())
    }
}
