use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no cloud account variant selected: exactly one of aws, azure, gcp, alibaba must be set")]
    NoVariantSelected,

    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("yaml parse error in {path}: {source}")]
    YamlParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("domain error: {0}")]
    Domain(#[from] acctsync_domain::DomainError),
}
