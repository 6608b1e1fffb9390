/// Name of the header that declares the length of a request body.
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Creates a map of headers.
/// ```
/// use webapp_server::common::header::HeaderMap;
/// use webapp_server::header_map;
///
/// let headers = header_map![
///    ("Content-Length", "5"),
///    ("Accept", "text/html"),
///    ("Content-Length", "59")
/// ];
///
/// assert_eq!(headers.get("Content-Length"), Some("59"));
/// assert_eq!(headers.get("Accept"), Some("text/html"));
/// assert_eq!(headers.len(), 2);
/// ```
#[macro_export]
macro_rules! header_map {
    () => { $crate::common::header::HeaderMap::new() };
    ($(($name:expr, $value:expr)),+ $(,)?) => {{
        let mut headers = $crate::common::header::HeaderMap::new();
        $(headers.insert($name.into(), $value.into());)+
        headers
    }}
}

/// A map of header names to values. Entries keep their insertion order, and
/// names are unique: inserting a name that is already present replaces its
/// value. Names are matched verbatim, with no case normalization.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Creates an empty header map.
    pub fn new() -> HeaderMap {
        HeaderMap::default()
    }

    /// Adds a header to the map. A repeated name keeps only the value given last.
    pub fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Gets the value of the header with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of headers in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the map contains no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
