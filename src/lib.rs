//! Three small, pure helpers: building PokéAPI URLs, decoding query strings
//! into maps and classifying leap years. None of them do I/O or keep state.

pub mod error;
pub mod util;

pub use util::{
    pokeapi::{make_url, POKEAPI_BASE},
    query::search_params_to_object,
    year::{is_leap_year, LeapYear, YearInput},
};
