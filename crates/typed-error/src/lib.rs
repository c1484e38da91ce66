//! Classified, context-carrying errors that stay ordinary `std` errors.
//!
//! A [`TypedError`] pairs an [`ErrorType`] tag with the error it was built
//! around and at most one key/value [`Context`] pair. Chains grow through
//! [`wrap`] and unwind through `source()`, so `?`, `Box<dyn Error>` and any
//! other error-walking code keep working.
//!
//! ```rust
//! use typed_error::{ErrorType, get_type, is, new, set_context, to_json, unwrap, wrap};
//!
//! let root = new("connection refused", Some(ErrorType::DB_ERROR));
//! let err = wrap(root.clone(), "loading user", None);
//! assert_eq!(err.to_string(), "loading user: connection refused");
//! assert!(is(&err, &root));
//! assert_eq!(get_type(unwrap(&err).unwrap()), ErrorType::DB_ERROR);
//!
//! let err = set_context(err, "user_id", 42);
//! assert_eq!(to_json(&err), br#"{"field":"user_id","message":42,"type":"NoType"}"#);
//! ```

pub mod chain;
pub mod context;
pub mod kind;
pub mod policy;
pub mod present;
pub mod result_ext;
pub mod typed;

// public exports
pub use chain::{
    Chain, ErrorExt, as_typed, chain, get_context, get_type, is, message, new, same_type,
    set_context, set_type, unwrap, wrap,
};
pub use context::{Context, ContextValue};
pub use kind::ErrorType;
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
pub use present::{to_json, to_json_pretty, to_map};
pub use result_ext::{EmitExt, ResultExt};
pub use typed::{BoxError, ErrorId, PlainError, SharedError, TypedError};

pub type Result<T, E = TypedError> = std::result::Result<T, E>;
