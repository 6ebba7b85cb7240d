//! Movie runtime as a whole number of minutes.
//!
//! On the wire a runtime is the JSON string `"<minutes> mins"`; in the
//! database it is a plain integer column. This module owns the codec
//! between the two forms. Range rules (nonzero, positive) belong to the
//! movie validator, not the codec.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Returned when a runtime value does not match `"<minutes> mins"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid runtime provided")]
pub struct InvalidRuntimeFormat;

/// A movie runtime in whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(i32);

impl Runtime {
    /// Wrap a raw minute count.
    pub fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    /// The number of minutes.
    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl FromStr for Runtime {
    type Err = InvalidRuntimeFormat;

    /// Accepts exactly two tokens split on a single ASCII space: an `i32`
    /// minute count followed by the literal `mins`. No trimming, no case
    /// folding, no alternate units.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, unit) = s.split_once(' ').ok_or(InvalidRuntimeFormat)?;
        if unit != "mins" {
            return Err(InvalidRuntimeFormat);
        }
        let minutes = count.parse::<i32>().map_err(|_| InvalidRuntimeFormat)?;
        Ok(Self(minutes))
    }
}

impl Serialize for Runtime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuntimeVisitor;

        impl Visitor<'_> for RuntimeVisitor {
            type Value = Runtime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string of the form \"<minutes> mins\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }

            // A bare number is the common mistake; report it as a format
            // defect rather than a generic type mismatch.
            fn visit_i64<E>(self, _: i64) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                Err(E::custom(InvalidRuntimeFormat))
            }

            fn visit_u64<E>(self, _: u64) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                Err(E::custom(InvalidRuntimeFormat))
            }

            fn visit_f64<E>(self, _: f64) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                Err(E::custom(InvalidRuntimeFormat))
            }
        }

        deserializer.deserialize_any(RuntimeVisitor)
    }
}
