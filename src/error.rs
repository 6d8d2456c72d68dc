//! Errors for callers that would rather `?` their way out of a bad year than
//! match on [LeapYear][0].
//!
//! [0]: ../util/year/enum.LeapYear.html

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Please enter a number")]
    NotANumber,
    #[error("Year cannot be negative")]
    Negative,
}

pub type Result<T> = std::result::Result<T, Error>;
