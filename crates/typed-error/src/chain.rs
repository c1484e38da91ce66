//! Operations over any error, typed or not.
//!
//! Everything here takes `&(dyn Error + 'static)` so plain `std` errors,
//! boxed errors and [`TypedError`] chains mix freely. A link is "typed" when
//! it downcasts to [`TypedError`]; anything else is a native error.

use std::collections::BTreeMap;
use std::error::Error as StdError;

use crate::context::{Context, ContextValue};
use crate::kind::ErrorType;
use crate::typed::{BoxError, TypedError};

pub fn new(message: impl Into<String>, kind: Option<ErrorType>) -> TypedError {
    TypedError::new(message, kind)
}

pub fn wrap(
    err: impl Into<BoxError>,
    message: impl Into<String>,
    kind: Option<ErrorType>,
) -> TypedError {
    TypedError::wrap(err, message, kind)
}

/// One step down the chain, or `None` at its end.
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Full message text, every layer joined by `": "`.
pub fn message(err: &(dyn StdError + 'static)) -> String {
    err.to_string()
}

pub fn as_typed<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a TypedError> {
    err.downcast_ref::<TypedError>()
}

/// Iterates over `err` followed by each cause reachable through `source()`.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

fn same_instance(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    match (as_typed(a), as_typed(b)) {
        (Some(a), Some(b)) => a.id() == b.id(),
        // The vtable check keeps a struct and its first field apart.
        (None, None) => std::ptr::eq(a, b),
        _ => false,
    }
}

/// Whether `target` is the very same error instance as `err` or one of its
/// causes. Equal text is not enough.
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|link| same_instance(link, target))
}

/// True when both errors are typed and carry equal tags. Messages, identity
/// and causes are not compared, and neither chain is walked.
pub fn same_type(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    match (as_typed(err), as_typed(target)) {
        (Some(err), Some(target)) => err.kind() == target.kind(),
        _ => false,
    }
}

/// Tags `err`. An already typed error keeps its identity, message and
/// context; anything else is wrapped in a new node that displays and
/// unwraps exactly like `err`.
pub fn set_type(err: impl Into<BoxError>, kind: ErrorType) -> TypedError {
    let err: BoxError = err.into();
    match err.downcast::<TypedError>() {
        Ok(mut typed) => {
            typed.set_type(kind);
            *typed
        }
        Err(native) => TypedError::transparent(native, kind, Context::default()),
    }
}

/// [`ErrorType::NO_TYPE`] for anything that is not typed.
pub fn get_type(err: &(dyn StdError + 'static)) -> ErrorType {
    as_typed(err).map_or(ErrorType::NO_TYPE, |typed| typed.kind().clone())
}

/// Attaches a context pair, replacing any previous one. Same ownership rules
/// as [`set_type`]; new wrappers are tagged [`ErrorType::NO_TYPE`].
pub fn set_context(
    err: impl Into<BoxError>,
    key: impl Into<ContextValue>,
    value: impl Into<ContextValue>,
) -> TypedError {
    let err: BoxError = err.into();
    match err.downcast::<TypedError>() {
        Ok(mut typed) => {
            typed.set_context(key, value);
            *typed
        }
        Err(native) => {
            TypedError::transparent(native, ErrorType::NO_TYPE, Context::new(key, value))
        }
    }
}

/// `{"field": key, "message": value}` when `err` is typed and carries a
/// non-empty context.
pub fn get_context(
    err: &(dyn StdError + 'static),
) -> Option<BTreeMap<&'static str, ContextValue>> {
    let ctx = as_typed(err)?.context()?;
    Some(BTreeMap::from([
        ("field", ctx.key.clone()),
        ("message", ctx.value.clone()),
    ]))
}

/// Typed-error accessors as methods on any error.
pub trait ErrorExt {
    fn as_typed(&self) -> Option<&TypedError>;
    fn error_type(&self) -> ErrorType;
    fn chain(&self) -> Chain<'_>;
}

impl<E: StdError + 'static> ErrorExt for E {
    fn as_typed(&self) -> Option<&TypedError> {
        as_typed(self)
    }

    fn error_type(&self) -> ErrorType {
        get_type(self)
    }

    fn chain(&self) -> Chain<'_> {
        chain(self)
    }
}

impl ErrorExt for dyn StdError + 'static {
    fn as_typed(&self) -> Option<&TypedError> {
        as_typed(self)
    }

    fn error_type(&self) -> ErrorType {
        get_type(self)
    }

    fn chain(&self) -> Chain<'_> {
        chain(self)
    }
}

impl ErrorExt for dyn StdError + Send + Sync + 'static {
    fn as_typed(&self) -> Option<&TypedError> {
        as_typed(self)
    }

    fn error_type(&self) -> ErrorType {
        get_type(self)
    }

    fn chain(&self) -> Chain<'_> {
        chain(self)
    }
}
