use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::context::{Context, ContextValue};
use crate::kind::ErrorType;

/// Owned, type-erased error accepted by the constructors.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Shared cause held inside a chain; cloning a chain never deep-copies it.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// A bare message with no further cause. Terminates chains built by
/// [`TypedError::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PlainError(String);

impl PlainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Identity of a [`TypedError`] instance.
///
/// Assigned once at construction and kept across moves, clones and in-place
/// mutation, so it plays the role of a pointer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorId(u64);

impl ErrorId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ErrorId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
enum Origin {
    /// Displays as `"{message}: {cause}"`, unwraps to `cause`.
    Wrapped { message: String, cause: SharedError },
    /// Borrows display and `source()` from the inner error.
    Transparent(SharedError),
}

/// An error carrying a classification tag, its cause, and at most one
/// key/value context pair.
#[derive(Debug, Clone)]
pub struct TypedError {
    id: ErrorId,
    kind: ErrorType,
    origin: Origin,
    context: Context,
}

impl TypedError {
    fn from_origin(origin: Origin, kind: ErrorType, context: Context) -> Self {
        Self {
            id: ErrorId::next(),
            kind,
            origin,
            context,
        }
    }

    /// Leaf error whose message is `message`. The tag defaults to
    /// [`ErrorType::NO_TYPE`].
    pub fn new(message: impl Into<String>, kind: Option<ErrorType>) -> Self {
        let leaf: SharedError = Arc::new(PlainError::new(message));
        Self::from_origin(
            Origin::Transparent(leaf),
            kind.unwrap_or_default(),
            Context::default(),
        )
    }

    /// Wraps `cause` under `message`. The new node's tag does not depend on
    /// the tag of `cause`.
    pub fn wrap(
        cause: impl Into<BoxError>,
        message: impl Into<String>,
        kind: Option<ErrorType>,
    ) -> Self {
        let cause: BoxError = cause.into();
        let origin = Origin::Wrapped {
            message: message.into(),
            cause: Arc::from(cause),
        };
        Self::from_origin(origin, kind.unwrap_or_default(), Context::default())
    }

    /// Classifies `err` without changing how it displays or unwraps.
    pub(crate) fn transparent(err: BoxError, kind: ErrorType, context: Context) -> Self {
        Self::from_origin(Origin::Transparent(Arc::from(err)), kind, context)
    }

    pub fn id(&self) -> ErrorId {
        self.id
    }

    pub fn kind(&self) -> &ErrorType {
        &self.kind
    }

    pub fn set_type(&mut self, kind: ErrorType) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn with_type(mut self, kind: ErrorType) -> Self {
        self.kind = kind;
        self
    }

    /// The attached context, or `None` when none is set or the pair is empty.
    pub fn context(&self) -> Option<&Context> {
        self.context.non_empty()
    }

    /// Replaces any previous context.
    pub fn set_context(
        &mut self,
        key: impl Into<ContextValue>,
        value: impl Into<ContextValue>,
    ) -> &mut Self {
        self.context = Context::new(key, value);
        self
    }

    pub fn with_context(
        mut self,
        key: impl Into<ContextValue>,
        value: impl Into<ContextValue>,
    ) -> Self {
        self.set_context(key, value);
        self
    }

    pub fn clear_context(&mut self) -> &mut Self {
        self.context = Context::default();
        self
    }

    /// The error this node was built around: the wrapped cause for `wrap`,
    /// the classified error otherwise.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match &self.origin {
            Origin::Wrapped { cause, .. } => cause.as_ref(),
            Origin::Transparent(inner) => inner.as_ref(),
        }
    }
}

impl fmt::Display for TypedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Origin::Wrapped { message, cause } => write!(f, "{message}: {cause}"),
            Origin::Transparent(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl StdError for TypedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.origin {
            Origin::Wrapped { cause, .. } => Some(&**cause as &(dyn StdError + 'static)),
            Origin::Transparent(inner) => inner.source(),
        }
    }
}
