use thiserror::Error;

/// Server-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Registry(#[from] tickdeck_core::RegistryError),

    #[error("failed to bind {addr}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServeError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Registry(_) => 2,
            Self::Bind { .. } => 10,
            Self::Io(_) => 10,
        }
    }
}
