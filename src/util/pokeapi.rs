//! Builds PokéAPI resource URLs.
//!
//! ```rust
//! use pokeutil::{make_url, POKEAPI_BASE};
//!
//! assert_eq!(make_url("pikachu"), "https://pokeapi.co/api/v2/pikachu");
//! assert!(make_url("pokemon/ditto").starts_with(POKEAPI_BASE));
//! ```

/// The base every PokéAPI URL starts with.
pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2/";

/// Append `name` to the PokéAPI base URL.
///
/// The name is used as-is: no escaping, no validation, and an empty name gives
/// back the bare base. Nothing is fetched.
pub fn make_url(name: &str) -> String {
    let mut url = String::with_capacity(POKEAPI_BASE.len() + name.len());
    url.push_str(POKEAPI_BASE);
    url.push_str(name);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls() {
        assert_eq!(make_url("pikachu"), "https://pokeapi.co/api/v2/pikachu");
        assert_eq!(make_url("bulbasaur"), "https://pokeapi.co/api/v2/bulbasaur");
    }

    #[test]
    fn leaves_name_alone() {
        let names = vec![
            "",
            "mr-mime",
            "pokemon/25",
            "type?page=2",
            "nidoran♀",
            "  spaces  ",
            "%20already%20encoded",
        ];
        for name in names {
            let url = make_url(name);
            assert!(url.starts_with(POKEAPI_BASE));
            assert_eq!(url.strip_prefix(POKEAPI_BASE), Some(name));
        }
        assert_eq!(make_url(""), POKEAPI_BASE);
    }
}
