use std::collections::HashMap;

use form_urlencoded::parse as form_parse;

/// Parses a form-urlencoded body into a map of decoded parameter values.
/// Pairs are split on `&` then `=`; a key that appears more than once keeps
/// only its last value.
pub fn parse_params(body: &[u8]) -> HashMap<String, String> {
    HashMap::from_iter(form_parse(body).into_owned())
}
