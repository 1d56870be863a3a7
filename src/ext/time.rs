use crate::error::error;
use crate::{ClockTime, Error};
use time::Time;

/// Truncates any subsecond precision.
impl From<Time> for ClockTime {
    fn from(value: Time) -> Self {
        let (hour, minute, second) = value.as_hms();
        ClockTime::new(hour as i32, minute as i32, second as i32)
    }
}

/// Fails when any field is outside its canonical range.
impl TryFrom<ClockTime> for Time {
    type Error = Error;

    fn try_from(value: ClockTime) -> Result<Self, Error> {
        let out_of_range = || error("clock time out of range for time::Time");
        let hour = u8::try_from(value.hour()).map_err(|_| out_of_range())?;
        let minute = u8::try_from(value.minute()).map_err(|_| out_of_range())?;
        let second = u8::try_from(value.second()).map_err(|_| out_of_range())?;
        Time::from_hms(hour, minute, second).map_err(|_| out_of_range())
    }
}
