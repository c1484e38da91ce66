//! Pluggable emission of typed errors.
//!
//! The library never logs on its own. Applications install an
//! [`ErrorPolicy`] at their boundaries and decide there how errors are
//! reported: tracing events, metrics, a UI channel, or nothing at all.
//!
//! ```rust
//! use typed_error::{CombinedPolicy, EmitExt, NoopPolicy, Result, new};
//!
//! let policy = CombinedPolicy::new().push(NoopPolicy);
//! let r: Result<()> = Err(new("bad input", None));
//! assert!(r.emit(&policy).is_err());
//! ```

use crate::typed::TypedError;

pub trait ErrorPolicy: Send + Sync {
    /// Report the error; must not alter it.
    fn emit(&self, error: &TypedError);
}

#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn emit(&self, _error: &TypedError) {}
}

/// Emits one tracing event per error.
///
/// Client-side classifications (see [`ErrorType::is_client_error`]) are
/// logged at WARN, everything else at ERROR. The tag and the context pair
/// travel as structured fields.
///
/// [`ErrorType::is_client_error`]: crate::ErrorType::is_client_error
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn emit(&self, error: &TypedError) {
        use tracing::{Level, event};

        let kind = error.kind().as_str();
        let (field, value) = match error.context() {
            Some(ctx) => (Some(ctx.key.to_string()), Some(ctx.value.to_string())),
            None => (None, None),
        };
        let (field, value) = (field.as_deref(), value.as_deref());
        if error.kind().is_client_error() {
            event!(Level::WARN, error_type = kind, field, value, error = %error);
        } else {
            event!(Level::ERROR, error_type = kind, field, value, error = %error);
        }
    }
}

/// Delegates to every inner policy in insertion order.
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn add_boxed(mut self, policy: Box<dyn ErrorPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn emit(&self, error: &TypedError) {
        for p in &self.policies {
            p.emit(error);
        }
    }
}
