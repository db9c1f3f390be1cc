use crate::ast;
use crate::operation::ExecutionContext;
use crate::operation::ExecutionContextError;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::test::cost_schema;

type Result<T> = std::result::Result<T, ExecutionContextError>;

#[test]
fn shorthand_query_is_selected() -> Result<()> {
    let schema = cost_schema();
    let document = ast::query::parse(r#"
        { example { ...frag } }
        fragment frag on DataType { a }
    "#).unwrap();

    let ctx = ExecutionContext::new(&schema, &document, None)?;

    assert_eq!(ctx.operation_kind(), OperationKind::Query);
    assert_eq!(ctx.operation_name(), None);
    assert_eq!(ctx.operation_root_type().name(), "Query");
    assert_eq!(ctx.selection_set().items.len(), 1);
    assert_eq!(ctx.fragment("frag").map(|frag| frag.name.as_str()), Some("frag"));
    assert!(ctx.fragment("other").is_none());
    Ok(())
}

#[test]
fn named_operation_is_selected_among_many() -> Result<()> {
    let schema = SchemaBuilder::from_str(None, r#"
        type Query { a: Int }
        type Mutation { b: Int }
        type Subscription { c: Int }
    "#).unwrap().build().unwrap();
    let document = ast::query::parse(r#"
        query Q { a }
        mutation M { b }
        subscription S { c }
    "#).unwrap();

    let mutation_ctx = ExecutionContext::new(&schema, &document, Some("M"))?;
    assert_eq!(mutation_ctx.operation_kind(), OperationKind::Mutation);
    assert_eq!(mutation_ctx.operation_name(), Some("M"));
    assert_eq!(mutation_ctx.operation_root_type().name(), "Mutation");
    assert!(matches!(
        mutation_ctx.operation(),
        ast::query::OperationDefinition::Mutation(mutation) if mutation.name.as_deref() == Some("M"),
    ));

    let subscription_ctx = ExecutionContext::new(&schema, &document, Some("S"))?;
    assert_eq!(subscription_ctx.operation_kind(), OperationKind::Subscription);
    assert_eq!(subscription_ctx.operation_root_type().name(), "Subscription");
    Ok(())
}

#[test]
fn document_without_operations_is_an_error() {
    let schema = cost_schema();
    let document = ast::query::parse("fragment frag on DataType { a }").unwrap();

    assert_eq!(
        ExecutionContext::new(&schema, &document, None).unwrap_err(),
        ExecutionContextError::NoOperation,
    );
}

#[test]
fn anonymous_operation_cannot_be_selected_by_name() {
    let schema = cost_schema();
    let document = ast::query::parse("{ count }").unwrap();

    assert_eq!(
        ExecutionContext::new(&schema, &document, Some("count")).unwrap_err(),
        ExecutionContextError::UnknownOperationName {
            operation_name: "count".to_string(),
        },
    );
}

#[test]
fn subscription_without_root_type_is_an_error() {
    let schema = cost_schema();
    let document = ast::query::parse("subscription { count }").unwrap();

    let err = ExecutionContext::new(&schema, &document, None).unwrap_err();
    assert_eq!(err, ExecutionContextError::UndefinedRootOperationType {
        kind: OperationKind::Subscription,
    });
    assert_eq!(
        err.to_string(),
        "The schema does not define a root type for subscription operations",
    );
}
