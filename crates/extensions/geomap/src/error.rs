/// Errors raised while initializing the geomap extension.
#[derive(Debug, thiserror::Error)]
pub enum GeomapError {
    /// Invalid map configuration.
    #[error("geomap config error: {0}")]
    Config(String),
}
