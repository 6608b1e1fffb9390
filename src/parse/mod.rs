/// Parsing errors.
pub mod error;

/// Reader for single lines.
pub(crate) mod line;
/// Request line path extraction and normalization.
pub(crate) mod request_line;
/// Reader for headers.
pub(crate) mod headers;
/// Reader for message bodies.
pub(crate) mod body;
/// Parser for form-urlencoded bodies.
pub(crate) mod params;
