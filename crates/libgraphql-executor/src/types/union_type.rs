use crate::loc;
use crate::types::NamedGraphQLTypeRef;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// Unions expose no fields of their own, so they are never field-bearing.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) members: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn member_type_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|member_ref| member_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
