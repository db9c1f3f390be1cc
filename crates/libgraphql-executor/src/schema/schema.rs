use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug)]
pub struct Schema {
    /// Interface name -> names of the object types implementing it (sorted).
    pub(crate) implementations: HashMap<String, Vec<String>>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The fields of the named type, if it is a field-bearing (object or
    /// interface) type.
    pub fn fields_of(&self, type_name: &str) -> Option<&IndexMap<String, Field>> {
        self.types
            .get(type_name)
            .and_then(GraphQLType::as_object_or_interface)
            .map(|type_| type_.fields())
    }

    /// Names of the object types that implement the named interface. Empty
    /// when no such interface exists (or nothing implements it).
    pub fn implementations_of(&self, interface_name: &str) -> &[String] {
        self.implementations
            .get(interface_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type
            .as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
            .and_then(GraphQLType::as_object)
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// [`SchemaBuilder::build()`] refuses to build a schema without one, so
    /// this is only `None` for hand-assembled schemas.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.query_type
            .deref(self)
            .ok()
            .and_then(GraphQLType::as_object)
    }

    /// Look up a type by the name used in a type condition or type reference.
    pub fn resolve_named_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Look up a type by name and return it only if it is field-bearing.
    pub fn resolve_object_or_interface(
        &self,
        name: &str,
    ) -> Option<ObjectOrInterfaceType<'_>> {
        self.resolve_named_type(name)
            .and_then(GraphQLType::as_object_or_interface)
    }

    /// The root operation type for operations of the given kind.
    pub fn root_operation_type(&self, kind: &OperationKind) -> Option<&ObjectType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type
            .as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
            .and_then(GraphQLType::as_object)
    }
}
