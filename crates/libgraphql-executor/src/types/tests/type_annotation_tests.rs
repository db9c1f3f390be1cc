use crate::loc;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;

fn field_annotation(sdl_type: &str) -> TypeAnnotation {
    let schema = SchemaBuilder::from_str(
        None,
        format!("type Query {{ field: {sdl_type} }}").as_str(),
    ).unwrap().build().unwrap();
    schema
        .fields_of("Query")
        .and_then(|fields| fields.get("field"))
        .map(|field| field.type_annotation().to_owned())
        .unwrap()
}

#[test]
fn non_null_is_folded_into_nullability() {
    let annot = field_annotation("String!");
    let named = annot.as_named_annotation().unwrap();
    assert!(!named.nullable());
    assert_eq!(named.graphql_type_name(), "String");
    assert_eq!(annot.to_string(), "String!");
}

#[test]
fn innermost_named_annotation_unwraps_any_depth() {
    for sdl_type in ["Int", "Int!", "[Int]", "[Int!]!", "[[Int!]]!", "[[[Int]!]]"] {
        let annot = field_annotation(sdl_type);
        assert_eq!(annot.to_string(), sdl_type);
        assert_eq!(
            annot.innermost_named_type_annotation().graphql_type_name(),
            "Int",
            "unwrapping `{sdl_type}`",
        );
    }
}

#[test]
fn list_annotation_tracks_outer_and_inner_nullability() {
    let annot = field_annotation("[String]!");
    let list = annot.as_list_annotation().unwrap();
    assert!(!annot.nullable());
    assert!(list.inner_type_annotation().nullable());
    assert!(annot.as_named_annotation().is_none());
}

#[test]
fn innermost_type_resolves_against_the_schema() {
    let schema = SchemaBuilder::from_str(None, r#"
        type Query { items: [Item!]! }
        type Item { id: ID }
    "#).unwrap().build().unwrap();
    let items = schema.fields_of("Query").unwrap().get("items").unwrap();

    let item_type = items.type_annotation().innermost_type(&schema).unwrap();
    assert_eq!(item_type.name(), "Item");
    assert!(item_type.as_object_or_interface().is_some());
}

#[test]
fn dangling_named_annotation_resolves_to_none() {
    let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")
        .unwrap()
        .build()
        .unwrap();
    let annot = NamedTypeAnnotation {
        nullable: true,
        type_ref: NamedGraphQLTypeRef::new("Missing", loc::SourceLocation::GraphQLBuiltIn),
    };

    assert!(annot.graphql_type(&schema).is_none());
    assert!(TypeAnnotation::from(annot.clone()).innermost_type(&schema).is_none());
    assert!(matches!(
        annot.type_ref.deref(&schema),
        Err(crate::DerefByNameError::DanglingReference(name)) if name == "Missing",
    ));
    assert!(matches!(schema.resolve_named_type("Int"), Some(GraphQLType::Int)));
}
