use crate::loc;
use crate::resolve::FieldResolver;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) cost: u64,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, TypeAnnotation>,
    pub(crate) parent_type_name: String,
    pub(crate) resolver: Option<FieldResolver>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The flat, per-selection cost weight declared for this field (via the
    /// `@cost(weight: Int)` directive). Fields without a declared weight cost
    /// nothing.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A map from parameter name -> [`TypeAnnotation`], ordered as declared.
    pub fn parameters(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.parameters
    }

    /// The name of the object or interface type this field is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn resolver(&self) -> Option<&FieldResolver> {
        self.resolver.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
