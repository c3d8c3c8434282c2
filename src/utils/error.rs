use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{url} answered {status} after {attempts} attempt(s)")]
    StatusError {
        url: String,
        status: reqwest::StatusCode,
        attempts: u32,
    },

    #[error("fetching block list for {institution} from {url} failed")]
    FetchError {
        institution: String,
        url: String,
        #[source]
        source: Box<EtlError>,
    },

    #[error("cannot parse entry {value:?} from {institution}: {reason}")]
    ParseError {
        institution: String,
        value: String,
        reason: String,
    },

    #[error("resolving {domain} failed")]
    ResolveError {
        domain: String,
        #[source]
        source: Box<EtlError>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
