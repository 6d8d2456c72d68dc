//! Turns a query string into a key/value map.
//!
//! Decoding is plain `application/x-www-form-urlencoded`: pairs split on `&`,
//! keys split from values on the first `=`, `+` becomes a space and percent
//! escapes are decoded. When a key shows up more than once, the last value
//! wins.
//!
//! ```rust
//! use pokeutil::search_params_to_object;
//!
//! let params = search_params_to_object("name=oliver&email=hello@oliverjam.es");
//! assert_eq!(params["name"], "oliver");
//! assert_eq!(params["email"], "hello@oliverjam.es");
//! ```

use log::trace;
use std::collections::HashMap;
use url::form_urlencoded;

/// Decode `params` into a map of key to value.
///
/// Never fails. A single leading `?` is ignored, empty segments are skipped,
/// a key without `=` maps to an empty string and bytes that don't decode to
/// UTF-8 are replaced with U+FFFD.
pub fn search_params_to_object(params: &str) -> HashMap<String, String> {
    let params = params.strip_prefix('?').unwrap_or(params);
    let mut object = HashMap::new();
    for (key, value) in form_urlencoded::parse(params.as_bytes()) {
        let key = key.into_owned();
        if object.contains_key(&key) {
            trace!("search_params_to_object() -- overwriting duplicate key {:?}", key);
        }
        object.insert(key, value.into_owned());
    }
    object
}
