//! Error handling types
//!
//! A single [`Error`] enum is returned across every crate boundary. Authentication
//! and token failures are carried as typed kinds ([`AuthFailure`], [`TokenError`])
//! so callers can match on them instead of parsing messages.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a login attempt is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No credential record exists for the identity
    #[error("unknown identity")]
    UnknownIdentity,

    /// The password did not match the stored hash
    #[error("bad credentials")]
    BadCredentials,

    /// The account is locked after too many failed attempts
    #[error("account locked")]
    AccountLocked,

    /// The password matched but no role is assigned to the identity
    #[error("no role assigned")]
    NoRoleAssigned,
}

impl AuthFailure {
    /// Whether this failure must be reported as the generic "invalid credentials" signal
    ///
    /// Unknown identities and wrong passwords are indistinguishable to clients.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::UnknownIdentity | Self::BadCredentials)
    }
}

/// Reasons a bearer token is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// `now` is past the `exp` claim
    #[error("token expired")]
    Expired,

    /// The compact encoding or the claim set could not be parsed
    #[error("token malformed")]
    Malformed,

    /// The signature does not match the header and claims
    #[error("token signature invalid")]
    SignatureInvalid,
}

impl TokenError {
    /// Stable label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Malformed => "malformed",
            Self::SignatureInvalid => "signature_invalid",
        }
    }
}

/// Main error type for the account authentication service
#[derive(Error, Debug)]
pub enum Error {
    /// Login refused
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthFailure),

    /// Bearer token rejected
    #[error("Token rejected: {0}")]
    Token(#[from] TokenError),

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Resource already exists
    #[error("Already exists: {resource}")]
    AlreadyExists {
        /// The resource that already exists
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A conditional write kept losing against concurrent writers
    #[error("Write conflict: {message}")]
    Conflict {
        /// Description of the contended resource
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists<S: Into<String>>(resource: S) -> Self {
        Self::AlreadyExists {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a write conflict error
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The authentication failure kind, if this is one
    pub fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Auth(failure) => Some(*failure),
            _ => None,
        }
    }

    /// The token rejection kind, if this is one
    pub fn token_error(&self) -> Option<TokenError> {
        match self {
            Self::Token(err) => Some(*err),
            _ => None,
        }
    }
}
