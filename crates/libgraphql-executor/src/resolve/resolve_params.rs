use crate::ast;
use crate::SourcePosition;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

/// Arbitrary request-scoped data shared with every resolver of a request
/// (e.g. auth info, data loaders).
pub type ResolveContext = Arc<dyn Any + Send + Sync>;

/// Everything a [`FieldResolver`](crate::resolve::FieldResolver) is invoked
/// with.
#[derive(Clone, Debug, Default)]
pub struct ResolveParams {
    pub args: IndexMap<String, serde_json::Value>,
    pub context: Option<ResolveContext>,
    pub info: ResolveInfo,

    /// The already-resolved value of the parent object.
    pub source: serde_json::Value,
}

/// Describes the field being resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveInfo {
    /// Positions of every selection of this field in the query document. A
    /// panicking resolver's error is reported at these positions.
    pub field_locations: Vec<SourcePosition>,
    pub field_name: String,
    pub parent_type: String,

    /// Response path of the field (aliases, not field names).
    pub path: Vec<String>,
}
impl ResolveInfo {
    pub fn from_field_asts<'a>(
        parent_type: impl Into<String>,
        path: Vec<String>,
        field_asts: impl IntoIterator<Item = &'a ast::query::Field>,
    ) -> Self {
        let mut field_name = String::new();
        let mut field_locations = vec![];
        for field_ast in field_asts {
            if field_name.is_empty() {
                field_name = field_ast.name.to_string();
            }
            field_locations.push(field_ast.position.into());
        }

        Self {
            field_locations,
            field_name,
            parent_type: parent_type.into(),
            path,
        }
    }
}
