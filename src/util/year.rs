//! Gregorian leap-year classification for input that may not be a year at
//! all.
//!
//! Input comes in as a [YearInput], which can hold whatever the caller had on
//! hand (a number, some text, a bool, nothing). The answer is a [LeapYear]:
//! either a classification or one of two validation failures, which callers
//! tell apart by variant.
//!
//! ```rust
//! use pokeutil::{is_leap_year, LeapYear};
//!
//! assert_eq!(is_leap_year(2000), LeapYear::LeapYear(true));
//! assert_eq!(is_leap_year(1900), LeapYear::LeapYear(false));
//! assert_eq!(is_leap_year("hi"), LeapYear::NotANumber);
//! assert_eq!(is_leap_year(-1).to_string(), "Year cannot be negative");
//! ```
//!
//! [YearInput]: enum.YearInput.html
//! [LeapYear]: enum.LeapYear.html

use crate::error::{Error, Result};
use log::trace;
use std::fmt;

/// An unvalidated year.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "with_serde", serde(untagged))]
pub enum YearInput {
    Int(
        #[cfg_attr(feature = "with_serde", serde(deserialize_with = "int_from_any"))]
        i128,
    ),
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

#[cfg(feature = "with_serde")]
fn int_from_any<'de, D>(deserializer: D) -> std::result::Result<i128, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct IntVisitor;

    impl<'de> serde::de::Visitor<'de> for IntVisitor {
        type Value = i128;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an integer")
        }

        fn visit_i64<E: serde::de::Error>(self, val: i64) -> std::result::Result<i128, E> {
            Ok(val.into())
        }

        fn visit_u64<E: serde::de::Error>(self, val: u64) -> std::result::Result<i128, E> {
            Ok(val.into())
        }
    }

    deserializer.deserialize_any(IntVisitor)
}

// integers stay exact; every one of these fits in an i128
macro_rules! year_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for YearInput {
                fn from(val: $ty) -> Self {
                    YearInput::Int(val as i128)
                }
            }
        )*
    };
}

year_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for YearInput {
    fn from(val: f32) -> Self {
        YearInput::Number(val.into())
    }
}

impl From<f64> for YearInput {
    fn from(val: f64) -> Self {
        YearInput::Number(val)
    }
}

impl From<&str> for YearInput {
    fn from(val: &str) -> Self {
        YearInput::Text(val.into())
    }
}

impl From<String> for YearInput {
    fn from(val: String) -> Self {
        YearInput::Text(val)
    }
}

impl From<bool> for YearInput {
    fn from(val: bool) -> Self {
        YearInput::Bool(val)
    }
}

impl<T: Into<YearInput>> From<Option<T>> for YearInput {
    fn from(val: Option<T>) -> Self {
        match val {
            Some(x) => x.into(),
            None => YearInput::Null,
        }
    }
}

impl fmt::Display for YearInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearInput::Int(int) => write!(f, "{}", int),
            YearInput::Number(num) => write!(f, "{}", num),
            YearInput::Text(text) => write!(f, "{}", text),
            YearInput::Bool(b) => write!(f, "{}", b),
            YearInput::Null => write!(f, "null"),
        }
    }
}

/// The outcome of classifying a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub enum LeapYear {
    /// The input was a usable year; `true` if it's a leap year
    LeapYear(bool),
    /// The input wasn't a number
    NotANumber,
    /// The input was a number below zero
    Negative,
}

impl LeapYear {
    /// The classification, if the input was valid.
    pub fn is_leap(&self) -> Option<bool> {
        match self {
            LeapYear::LeapYear(leap) => Some(*leap),
            _ => None,
        }
    }

    /// Turn the two validation failures into errors.
    pub fn into_result(self) -> Result<bool> {
        match self {
            LeapYear::LeapYear(leap) => Ok(leap),
            LeapYear::NotANumber => Err(Error::NotANumber),
            LeapYear::Negative => Err(Error::Negative),
        }
    }
}

impl fmt::Display for LeapYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeapYear::LeapYear(leap) => write!(f, "{}", leap),
            LeapYear::NotANumber => write!(f, "{}", Error::NotANumber),
            LeapYear::Negative => write!(f, "{}", Error::Negative),
        }
    }
}

/// Classify `year` under the Gregorian rule.
///
/// Checks run in order and the first hit wins: non-numbers, then negatives,
/// then divisibility by 400, 100 and 4. Integers are checked with an exact
/// remainder. Floats use the float remainder, so a fractional year is accepted
/// and comes back `false`.
pub fn is_leap_year<T: Into<YearInput>>(year: T) -> LeapYear {
    match year.into() {
        YearInput::Int(int) => classify_int(int),
        YearInput::Number(num) => classify_float(num),
        other => {
            trace!("is_leap_year() -- not a number: {:?}", other);
            LeapYear::NotANumber
        }
    }
}

fn classify_int(year: i128) -> LeapYear {
    if year < 0 {
        trace!("is_leap_year() -- negative year: {}", year);
        return LeapYear::Negative;
    }
    if year % 400 == 0 {
        return LeapYear::LeapYear(true);
    }
    if year % 100 == 0 {
        return LeapYear::LeapYear(false);
    }
    LeapYear::LeapYear(year % 4 == 0)
}

fn classify_float(year: f64) -> LeapYear {
    if year < 0.0 {
        trace!("is_leap_year() -- negative year: {}", year);
        return LeapYear::Negative;
    }
    if year % 400.0 == 0.0 {
        return LeapYear::LeapYear(true);
    }
    if year % 100.0 == 0.0 {
        return LeapYear::LeapYear(false);
    }
    LeapYear::LeapYear(year % 4.0 == 0.0)
}
