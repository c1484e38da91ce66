use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use typed_error::{
    ContextValue, ErrorType, PlainError, TypedError, get_context, get_type, is, message, new,
    same_type, set_context, set_type, to_map, unwrap, wrap,
};

const CUSTOM: ErrorType = ErrorType::from_static("CustomError");

fn context_map(field: &str, value: &str) -> BTreeMap<&'static str, ContextValue> {
    BTreeMap::from([("field", field.into()), ("message", value.into())])
}

fn boxed(err: impl std::error::Error + 'static) -> Box<dyn std::error::Error> {
    Box::new(err)
}

#[test]
fn new_without_type_is_untyped() {
    let err = new("test error", None);
    assert_eq!(err.to_string(), "test error");
    assert_eq!(get_type(&err), ErrorType::NO_TYPE);
}

#[test]
fn new_with_custom_type() {
    let err = new("test custom error", Some(CUSTOM));
    assert_eq!(message(&err), "test custom error");
    assert_eq!(get_type(&err), CUSTOM);
}

#[test]
fn wrap_one_level() {
    let err = wrap(new("original error", None), "child error", None);
    assert_eq!(err.to_string(), "child error: original error");
    let cause = unwrap(&err).unwrap();
    assert_eq!(cause.to_string(), "original error");
    assert!(unwrap(cause).is_none());
}

#[test]
fn wrap_two_levels() {
    let err = wrap(
        wrap(new("original error", None), "child error", None),
        "child error 2",
        None,
    );
    assert_eq!(err.to_string(), "child error 2: child error: original error");
    let first = unwrap(&err).unwrap();
    assert_eq!(first.to_string(), "child error: original error");
    let second = unwrap(first).unwrap();
    assert_eq!(second.to_string(), "original error");
    assert!(unwrap(second).is_none());
}

#[test]
fn wrap_native_error() {
    let err = wrap(PlainError::new("original error"), "child error", None);
    assert_eq!(err.to_string(), "child error: original error");
    let cause = unwrap(&err).unwrap();
    assert_eq!(cause.to_string(), "original error");
    assert!(unwrap(cause).is_none());
}

#[test]
fn three_wraps_join_most_recent_first() {
    let err = wrap(wrap(new("a", None), "b", None), "c", None);
    assert_eq!(message(&err), "c: b: a");
    let mut link = Some(&err as &(dyn std::error::Error + 'static));
    let mut steps = 0;
    while let Some(current) = link {
        link = unwrap(current);
        steps += 1;
    }
    assert_eq!(steps, 3);
}

#[test]
fn wrap_tag_is_independent_of_cause_tag() {
    let err = wrap(
        wrap(new("original error", Some(CUSTOM)), "child error", Some(CUSTOM)),
        "child error 2",
        None,
    );
    assert_eq!(get_type(&err), ErrorType::NO_TYPE);
    let first = unwrap(&err).unwrap();
    assert_eq!(get_type(first), CUSTOM);
    assert_eq!(get_type(unwrap(first).unwrap()), CUSTOM);
}

#[test]
fn set_context_round_trips() {
    let err = set_context(new("testing error context", None), "Key1", "Value1");
    assert_eq!(get_context(&err), Some(context_map("Key1", "Value1")));
}

#[test]
fn set_context_on_native_error_wraps_it() {
    let err = set_context(PlainError::new("generic error"), "Key1", "Value1");
    assert_eq!(get_context(&err), Some(context_map("Key1", "Value1")));
    assert_eq!(get_type(&err), ErrorType::NO_TYPE);
    assert_eq!(err.to_string(), "generic error");
}

#[test]
fn set_context_replaces_previous_pair() {
    let err = set_context(new("m", None), "first", 1);
    let err = set_context(err, "second", 2);
    assert_eq!(
        get_context(&err),
        Some(BTreeMap::from([
            ("field", ContextValue::from("second")),
            ("message", ContextValue::Int(2)),
        ]))
    );
}

#[test]
fn get_context_absent_without_context() {
    assert_eq!(get_context(&PlainError::new("generic error")), None);
    assert_eq!(get_context(&new("generic error", None)), None);
    let emptied = set_context(new("m", None), (), ());
    assert_eq!(get_context(&emptied), None);
}

#[test]
fn get_type_cases() {
    let cases = [
        (boxed(new("NoType error", None)), ErrorType::NO_TYPE),
        (boxed(new("DBError type", Some(ErrorType::DB_ERROR))), ErrorType::DB_ERROR),
        (boxed(PlainError::new("generic error")), ErrorType::NO_TYPE),
        (boxed(new("custom", Some(CUSTOM))), CUSTOM),
    ];
    for (err, want) in cases {
        assert_eq!(get_type(err.as_ref()), want, "for {err}");
    }
}

#[test]
fn set_type_cases() {
    let native = set_type(PlainError::new("generic error"), ErrorType::DB_ERROR);
    assert_eq!(get_type(&native), ErrorType::DB_ERROR);
    assert_eq!(native.to_string(), "generic error");

    let retyped = set_type(
        new("resource not found", Some(ErrorType::BAD_REQUEST)),
        ErrorType::NOT_FOUND,
    );
    assert_eq!(get_type(&retyped), ErrorType::NOT_FOUND);

    let from_untyped = set_type(new("resource not found", None), ErrorType::BAD_REQUEST);
    assert_eq!(get_type(&from_untyped), ErrorType::BAD_REQUEST);
}

#[test]
fn set_type_keeps_message_identity_and_context() {
    let original = set_context(new("m", Some(ErrorType::BAD_REQUEST)), "k", "v");
    let retyped = set_type(original.clone(), ErrorType::NOT_FOUND);
    assert_eq!(message(&retyped), "m");
    assert_eq!(retyped.id(), original.id());
    assert!(is(&retyped, &original));
    assert_eq!(get_context(&retyped), Some(context_map("k", "v")));
}

#[test]
fn set_type_in_place() {
    let mut err = new("m", None);
    let id = err.id();
    err.set_type(ErrorType::SOMETHING_WENT_WRONG)
        .set_context("request_id", "abc");
    assert_eq!(err.id(), id);
    assert_eq!(get_type(&err), ErrorType::SOMETHING_WENT_WRONG);
    assert_eq!(get_context(&err), Some(context_map("request_id", "abc")));
}

#[test]
fn is_cases() {
    assert!(!is(&new("test error", None), &new("test error", None)));
    let typed = new("test error", None);
    assert!(is(&typed, &typed));
    assert!(!is(&new("test error", None), &new("test error 2", None)));

    assert!(!is(&PlainError::new("test error"), &PlainError::new("test error")));
    let native = PlainError::new("test error");
    assert!(is(&native, &native));
    assert!(!is(&PlainError::new("test error"), &PlainError::new("test error 2")));
}

#[test]
fn is_finds_target_deep_in_chain() {
    let root = new("root", Some(ErrorType::DB_ERROR));
    let err = wrap(wrap(root.clone(), "query", None), "handler", None);
    assert!(is(&err, &root));
    assert!(!is(&err, &new("root", Some(ErrorType::DB_ERROR))));
}

#[derive(Debug)]
struct ReadErr {
    io: PlainError,
}

impl std::fmt::Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "read failed: {}", self.io)
    }
}

impl std::error::Error for ReadErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.io)
    }
}

#[test]
fn is_tells_a_native_error_from_its_first_field() {
    let outer = ReadErr {
        io: PlainError::new("disk"),
    };
    assert!(is(&outer, &outer.io));
    assert!(!is(&outer.io, &outer));
    assert!(is(&outer, &outer));
}

#[test]
fn same_type_cases() {
    assert!(same_type(&new("test error", None), &new("test error", None)));
    assert!(same_type(
        &new("test error", Some(ErrorType::NOT_FOUND)),
        &new("other text", Some(ErrorType::NOT_FOUND)),
    ));
    assert!(!same_type(
        &new("test error", Some(ErrorType::BAD_REQUEST)),
        &new("test error", Some(ErrorType::NOT_FOUND)),
    ));
    assert!(!same_type(
        &new("test error", Some(ErrorType::BAD_REQUEST)),
        &PlainError::new("test error"),
    ));
    assert!(!same_type(
        &PlainError::new("test error"),
        &new("test error", Some(ErrorType::BAD_REQUEST)),
    ));
    assert!(!same_type(
        &PlainError::new("test error"),
        &PlainError::new("test error")
    ));
}

#[test]
fn same_type_does_not_walk_chain() {
    let inner = new("a", Some(ErrorType::NOT_FOUND));
    let outer = wrap(inner.clone(), "b", None);
    assert!(!same_type(&outer, &inner));
}

#[test]
fn message_cases() {
    assert_eq!(message(&new("test-error", None)), "test-error");
    assert_eq!(message(&PlainError::new("test-error-1")), "test-error-1");
}

#[test]
fn errors_travel_through_question_mark() {
    fn load() -> typed_error::Result<()> {
        Err(new("missing row", Some(ErrorType::NOT_FOUND)))
    }

    fn handler() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        load()?;
        Ok(())
    }

    let err = handler().unwrap_err();
    let typed = err.downcast_ref::<TypedError>().unwrap();
    assert_eq!(typed.kind(), &ErrorType::NOT_FOUND);
    assert_eq!(to_map(err.as_ref())["type"], "NotFound");
}
