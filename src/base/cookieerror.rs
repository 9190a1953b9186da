use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    // Model Errors
    #[error("`{name}` is a reserved cookie directive and cannot be used as a data key")]
    ReservedField { name: String },

    // Format Errors
    #[error("Expires value `{value}` does not match `ddd, dd MMM yyyy HH:mm:ss UTC`")]
    InvalidExpires { value: String },
    #[error("Max-Age value `{value}` is not a whole number of seconds")]
    InvalidMaxAge { value: String },

    // Parse Errors (strict mode only)
    #[error("Malformed cookie token `{token}`")]
    MalformedToken { token: String },

    // Interop Errors
    #[error("Cookie cannot be represented as an HTTP header value")]
    InvalidHeaderValue,
}

impl CookieError {
    pub fn reserved_field(name: impl Into<String>) -> Self {
        CookieError::ReservedField { name: name.into() }
    }

    pub fn invalid_expires(value: impl Into<String>) -> Self {
        CookieError::InvalidExpires {
            value: value.into(),
        }
    }

    pub fn invalid_max_age(value: impl Into<String>) -> Self {
        CookieError::InvalidMaxAge {
            value: value.into(),
        }
    }

    pub fn malformed_token(token: impl Into<String>) -> Self {
        CookieError::MalformedToken {
            token: token.into(),
        }
    }

    /// True for errors raised because a stored directive string does not
    /// follow its expected date or numeric layout.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            CookieError::InvalidExpires { .. } | CookieError::InvalidMaxAge { .. }
        )
    }
}

impl From<http::header::InvalidHeaderValue> for CookieError {
    fn from(_: http::header::InvalidHeaderValue) -> Self {
        CookieError::InvalidHeaderValue
    }
}
