use crate::ClockTime;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Serializes as the `(hour, minute, second)` tuple.
impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.hour(), self.minute(), self.second()).serialize(serializer)
    }
}

/// Deserializes the `(hour, minute, second)` tuple verbatim, without range
/// validation, matching the rest of the crate.
impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (hour, minute, second) = Deserialize::deserialize(deserializer)?;
        Ok(ClockTime::new(hour, minute, second))
    }
}
