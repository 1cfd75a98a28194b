use thiserror::Error;

/// Error surface for server startup, configuration, and serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error at {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("roster error: {0}")]
    Roster(#[from] roster_core::RosterError),

    #[error("config error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub(crate) fn io_err(context: impl Into<String>, source: std::io::Error) -> ServerError {
    ServerError::Io {
        context: context.into(),
        source,
    }
}
