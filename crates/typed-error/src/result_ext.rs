use crate::chain;
use crate::context::ContextValue;
use crate::kind::ErrorType;
use crate::policy::ErrorPolicy;
use crate::typed::{BoxError, TypedError};

/// Classify, wrap or annotate the error side of a `Result` inline.
///
/// ```rust
/// use typed_error::{ErrorType, ResultExt, get_type};
///
/// let parsed: Result<u16, _> = "70000".parse::<u16>();
/// let err = parsed
///     .wrap_err("invalid port", Some(ErrorType::BAD_REQUEST))
///     .with_context("port", "70000")
///     .unwrap_err();
/// assert_eq!(get_type(&err), ErrorType::BAD_REQUEST);
/// assert!(err.to_string().starts_with("invalid port: "));
/// ```
pub trait ResultExt<T> {
    fn wrap_err(
        self,
        message: impl Into<String>,
        kind: Option<ErrorType>,
    ) -> Result<T, TypedError>;

    fn with_type(self, kind: ErrorType) -> Result<T, TypedError>;

    fn with_context(
        self,
        key: impl Into<ContextValue>,
        value: impl Into<ContextValue>,
    ) -> Result<T, TypedError>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    fn wrap_err(
        self,
        message: impl Into<String>,
        kind: Option<ErrorType>,
    ) -> Result<T, TypedError> {
        self.map_err(|e| chain::wrap(e, message, kind))
    }

    fn with_type(self, kind: ErrorType) -> Result<T, TypedError> {
        self.map_err(|e| chain::set_type(e, kind))
    }

    fn with_context(
        self,
        key: impl Into<ContextValue>,
        value: impl Into<ContextValue>,
    ) -> Result<T, TypedError> {
        self.map_err(|e| chain::set_context(e, key, value))
    }
}

/// Report errors through an [`ErrorPolicy`] at a boundary while handing the
/// result back untouched.
pub trait EmitExt<T> {
    fn emit(self, policy: &impl ErrorPolicy) -> Self;

    /// Only emit when the error's tag is `kind`.
    fn emit_if(self, kind: &ErrorType, policy: &impl ErrorPolicy) -> Self;
}

impl<T> EmitExt<T> for Result<T, TypedError> {
    fn emit(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }

    fn emit_if(self, kind: &ErrorType, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            if e.kind() == kind {
                policy.emit(e);
            }
        }
        self
    }
}
