pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod mcp;
pub mod normalize;

#[cfg(test)]
mod test_upstream;

/// Install the ring crypto provider for rustls.
///
/// reqwest is built without a default provider; safe to call repeatedly.
pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
