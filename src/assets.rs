use std::fs;

/// The on-disk directory static assets are served from. Request paths are
/// appended to the root verbatim, so the root string should not end in a
/// slash.
#[derive(Debug, Clone)]
pub struct AssetRoot {
    root: String,
}

impl AssetRoot {
    /// Creates an asset root over the given directory.
    pub fn new(root: String) -> AssetRoot {
        AssetRoot { root }
    }

    /// Reads the whole asset at the given request path into memory. The path
    /// is joined to the root by string concatenation, not filesystem path
    /// joining, since request paths start with `/`.
    pub fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
        fs::read(format!("{}{}", self.root, path))
    }
}
