use crate::loc;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// A borrowed view over a *field-bearing* type: either an [`ObjectType`] or an
/// [`InterfaceType`].
#[derive(Clone, Copy, Debug)]
pub enum ObjectOrInterfaceType<'schema> {
    Interface(&'schema InterfaceType),
    Object(&'schema ObjectType),
}
impl<'schema> ObjectOrInterfaceType<'schema> {
    pub fn as_interface(&self) -> Option<&'schema InterfaceType> {
        if let Self::Interface(iface) = *self {
            Some(iface)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &'schema loc::SourceLocation {
        match *self {
            Self::Interface(iface) => iface.def_location(),
            Self::Object(obj) => obj.def_location(),
        }
    }

    pub fn description(&self) -> Option<&'schema str> {
        match *self {
            Self::Interface(iface) => iface.description(),
            Self::Object(obj) => obj.description(),
        }
    }

    /// Look up a single [`Field`] by name.
    pub fn field(&self, name: &str) -> Option<&'schema Field> {
        self.fields().get(name)
    }

    pub fn fields(&self) -> &'schema IndexMap<String, Field> {
        match *self {
            Self::Interface(iface) => iface.fields(),
            Self::Object(obj) => obj.fields(),
        }
    }

    pub fn interface_names(&self) -> Vec<&'schema str> {
        match *self {
            Self::Interface(iface) => iface.interface_names(),
            Self::Object(obj) => obj.interface_names(),
        }
    }

    pub fn name(&self) -> &'schema str {
        match *self {
            Self::Interface(iface) => iface.name(),
            Self::Object(obj) => obj.name(),
        }
    }
}

impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceType<'_> {
    fn def_location(&self) -> &loc::SourceLocation {
        ObjectOrInterfaceType::def_location(self)
    }

    fn description(&self) -> Option<&str> {
        ObjectOrInterfaceType::description(self)
    }

    fn fields(&self) -> &IndexMap<String, Field> {
        ObjectOrInterfaceType::fields(self)
    }

    fn interface_names(&self) -> Vec<&str> {
        ObjectOrInterfaceType::interface_names(self)
    }

    fn name(&self) -> &str {
        ObjectOrInterfaceType::name(self)
    }
}
