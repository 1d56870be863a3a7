#![doc = include_str!("../README.md")]

mod cmp;
mod diff;
mod error;
mod ext;
mod fmt;
mod time;

pub use crate::error::Error;
pub use crate::fmt::Display24;
pub use crate::time::ClockTime;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
fn random_data<T>(n: usize) -> Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}

/// Random times with all three fields in canonical range.
#[cfg(test)]
fn random_times(n: usize) -> Vec<ClockTime> {
    random_data(n)
        .into_iter()
        .map(|(h, m, s): (u8, u8, u8)| {
            ClockTime::new((h % 24) as i32, (m % 60) as i32, (s % 60) as i32)
        })
        .collect()
}
