/// The config for an HTTP server.
pub struct Config {
    /// The address to bind the server listener to.
    pub addr: String,
    /// The directory static assets are served from.
    pub asset_root: String,
}
