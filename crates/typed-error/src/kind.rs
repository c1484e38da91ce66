//! Classification tags carried by [`TypedError`](crate::TypedError).
//!
//! A tag is a plain string compared by value. The well-known tags live as
//! associated constants; applications define their own the same way:
//!
//! ```rust
//! use typed_error::ErrorType;
//!
//! const RATE_LIMITED: ErrorType = ErrorType::from_static("RateLimited");
//! assert_eq!(RATE_LIMITED, ErrorType::new("RateLimited"));
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorType(Cow<'static, str>);

impl ErrorType {
    /// Default tag when no classification was given.
    pub const NO_TYPE: ErrorType = ErrorType::from_static("NoType");
    /// The request is malformed or otherwise rejected as a client error.
    pub const BAD_REQUEST: ErrorType = ErrorType::from_static("BadRequest");
    /// The requested resource does not exist.
    pub const NOT_FOUND: ErrorType = ErrorType::from_static("NotFound");
    /// A database query or connection failed.
    pub const DB_ERROR: ErrorType = ErrorType::from_static("DBError");
    /// The request lacks valid authentication credentials.
    pub const UNAUTHORIZED: ErrorType = ErrorType::from_static("Unauthorized");
    /// The caller is authenticated but has no access to the resource.
    pub const PERMISSION_DENIED: ErrorType = ErrorType::from_static("PermissionDenied");
    /// Catch-all for internal failures the service cannot handle.
    pub const SOMETHING_WENT_WRONG: ErrorType = ErrorType::from_static("SomethingWentWrong");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_no_type(&self) -> bool {
        *self == Self::NO_TYPE
    }

    /// Whether the tag describes a failure caused by the caller rather than
    /// by the service itself.
    pub fn is_client_error(&self) -> bool {
        [
            Self::BAD_REQUEST,
            Self::NOT_FOUND,
            Self::UNAUTHORIZED,
            Self::PERMISSION_DENIED,
        ]
        .contains(self)
    }
}

impl Default for ErrorType {
    fn default() -> Self {
        Self::NO_TYPE
    }
}

impl fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ErrorType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for ErrorType {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for ErrorType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
