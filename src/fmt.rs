use crate::error::{err, error};
use crate::{ClockTime, Error};
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

/// 12-hour rendering: `HH:MM:SS AM` or `HH:MM:SS PM`.
///
/// Stored hours 0 and 12 both display as 12; any other hour displays as
/// `hour % 12`. The suffix is `AM` iff the stored hour is below 12. Minutes
/// and seconds render raw, so out-of-range fields show up unwrapped: `{:02}`
/// is a minimum width, and values past two digits or below zero keep all
/// their digits and their sign.
impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let display_hour = if hour == 0 || hour == 12 {
            12
        } else {
            hour % 12
        };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        write!(
            f,
            "{:02}:{:02}:{:02} {}",
            display_hour,
            self.minute(),
            self.second(),
            suffix
        )
    }
}

impl ClockTime {
    /// Returns an adapter rendering the raw fields as 24-hour `HH:MM:SS`.
    pub const fn display_24(self) -> Display24 {
        Display24(self)
    }
}

/// Displays a [`ClockTime`] as 24-hour `HH:MM:SS`, without the hour
/// transformation or suffix of the 12-hour [`Display`] impl.
#[derive(Copy, Clone, Debug)]
pub struct Display24(ClockTime);

impl Display for Display24 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}

fn parse_field(field: Option<&str>) -> Result<i32, Error> {
    field
        .ok_or_else(|| error("expected 3 colon separated fields"))?
        .parse()
        .map_err(|_| error("expected an integer field"))
}

/// Parses the 24-hour `HH:MM:SS` form produced by [`ClockTime::display_24`].
///
/// Fields are stored verbatim like everywhere else, so out-of-range values
/// parse without error.
impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(':');
        let hour = parse_field(fields.next())?;
        let minute = parse_field(fields.next())?;
        let second = parse_field(fields.next())?;
        if fields.next().is_some() {
            return err("expected 3 colon separated fields");
        }
        Ok(Self::new(hour, minute, second))
    }
}
