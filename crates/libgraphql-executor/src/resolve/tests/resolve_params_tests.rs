use crate::SourcePosition;
use crate::ast;
use crate::resolve::ResolveInfo;

#[test]
fn info_from_field_asts_collects_every_location() {
    let document = ast::query::parse("{\n  a: example { b }\n  example { c }\n}").unwrap();
    let ast::query::Definition::Operation(
        ast::query::OperationDefinition::SelectionSet(selection_set),
    ) = &document.definitions[0] else {
        panic!("expected a shorthand query");
    };
    let fields = selection_set.items.iter().filter_map(|selection| match selection {
        ast::query::Selection::Field(field) => Some(field),
        _ => None,
    });

    let info = ResolveInfo::from_field_asts("Query", vec!["example".to_string()], fields);

    assert_eq!(info.field_name, "example");
    assert_eq!(info.parent_type, "Query");
    assert_eq!(info.path, vec!["example".to_string()]);
    assert_eq!(info.field_locations, vec![
        SourcePosition { line: 2, column: 3 },
        SourcePosition { line: 3, column: 3 },
    ]);
}
