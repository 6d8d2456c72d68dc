//! A set of standalone utility functions. Each submodule is independent of the
//! others.

pub mod pokeapi;
pub mod query;
pub mod year;
