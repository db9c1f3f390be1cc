use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// The common surface of the *field-bearing* types: [`ObjectType`](crate::types::ObjectType),
/// [`InterfaceType`](crate::types::InterfaceType), and the
/// [`ObjectOrInterfaceType`](crate::types::ObjectOrInterfaceType) view over
/// either.
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
