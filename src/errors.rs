use std::fmt;

/// Main error type for the Pokedex aggregation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    /// A remote read failed before any usable data arrived
    ResourceFetch(ResourceFetchError),
    /// A response arrived but lacked something the pipeline requires
    MalformedData(MalformedDataError),
    /// The configuration file could not be read or parsed
    Config(ConfigError),
}

/// Errors raised by the transport underneath the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceFetchError {
    /// The request never produced a response (connection refused, timeout, ...)
    Transport { url: String, details: String },
    /// The remote answered with a non-success status
    Status { url: String, status: u16 },
}

/// Errors related to the shape of fetched data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedDataError {
    /// The body could not be decoded into the expected record
    Undecodable { url: String, details: String },
    /// A field the pipeline depends on is absent
    MissingField(String),
    /// A view model could not be written out as JSON
    Unencodable(String),
}

/// Errors related to loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    /// The HTTP client could not be built from the configured settings
    HttpClient(String),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::ResourceFetch(err) => write!(f, "Resource fetch error: {}", err),
            PokedexError::MalformedData(err) => write!(f, "Malformed data error: {}", err),
            PokedexError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl fmt::Display for ResourceFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceFetchError::Transport { url, details } => {
                write!(f, "Request to {} failed: {}", url, details)
            }
            ResourceFetchError::Status { url, status } => {
                write!(f, "Request to {} returned status {}", url, status)
            }
        }
    }
}

impl fmt::Display for MalformedDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedDataError::Undecodable { url, details } => {
                write!(f, "Could not decode response from {}: {}", url, details)
            }
            MalformedDataError::MissingField(field) => write!(f, "Missing field: {}", field),
            MalformedDataError::Unencodable(details) => {
                write!(f, "Could not encode view as JSON: {}", details)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Could not read config: {}", details),
            ConfigError::Parse(details) => write!(f, "Could not parse config: {}", details),
            ConfigError::HttpClient(details) => {
                write!(f, "Could not build HTTP client: {}", details)
            }
        }
    }
}

impl std::error::Error for PokedexError {}
impl std::error::Error for ResourceFetchError {}
impl std::error::Error for MalformedDataError {}
impl std::error::Error for ConfigError {}

impl From<ResourceFetchError> for PokedexError {
    fn from(err: ResourceFetchError) -> Self {
        PokedexError::ResourceFetch(err)
    }
}

impl From<MalformedDataError> for PokedexError {
    fn from(err: MalformedDataError) -> Self {
        PokedexError::MalformedData(err)
    }
}

impl From<ConfigError> for PokedexError {
    fn from(err: ConfigError) -> Self {
        PokedexError::Config(err)
    }
}

impl PokedexError {
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, PokedexError::ResourceFetch(_))
    }

    pub fn is_malformed_data(&self) -> bool {
        matches!(self, PokedexError::MalformedData(_))
    }
}

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
