use crate::LocatedError;
use crate::SourcePosition;
use crate::resolve::ResolveError;

#[derive(Debug, thiserror::Error)]
#[error("not allowed")]
struct NotAllowed;

#[test]
fn resolver_error_is_located_at_the_given_positions() {
    let err = ResolveError::Resolver(Box::new(NotAllowed));
    let located = err.to_located_error(
        &[SourcePosition { line: 3, column: 5 }],
        &["example".to_string(), "a".to_string()],
    );

    assert!(!err.is_fault());
    assert_eq!(located, LocatedError {
        message: "not allowed".to_string(),
        locations: vec![SourcePosition { line: 3, column: 5 }],
        path: vec!["example".to_string(), "a".to_string()],
    });
}

#[test]
fn located_resolver_error_keeps_its_own_location() {
    let own = LocatedError::new("bad input")
        .with_locations([SourcePosition { line: 1, column: 1 }]);
    let err = ResolveError::Resolver(Box::new(own.clone()));

    let located = err.to_located_error(&[SourcePosition { line: 9, column: 9 }], &[]);

    assert_eq!(located, own);
}

#[test]
fn fault_is_rendered_as_is() {
    let fault = LocatedError::new("boom").with_path(vec!["example".to_string()]);
    let err = ResolveError::Fault(fault.clone());

    assert!(err.is_fault());
    assert_eq!(err.to_string(), "boom");
    assert_eq!(err.to_located_error(&[], &[]), fault);
}

#[test]
fn located_error_serialization_omits_empty_lists() {
    let err = LocatedError::new("boom");
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!({ "message": "boom" }),
    );

    let err = err
        .with_locations([SourcePosition { line: 2, column: 7 }])
        .with_path(vec!["example".to_string()]);
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!({
            "message": "boom",
            "locations": [{ "line": 2, "column": 7 }],
            "path": ["example"],
        }),
    );
}
