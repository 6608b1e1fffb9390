/// HTTP header data types and functions.
pub mod header;
/// HTTP response data type and functions.
pub mod response;
