use crate::loc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type attempted to implement `{non_interface_type_name}`, \
        which is not defined as an interface"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type attempted to implement `{undefined_interface_name}`, \
        which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{parent_type_name}.{field_name}` was \
        declared with the `{invalid_type_name}` type"
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{union_type_name}` union includes `{member_type_name}`, which is \
        not an object type"
    )]
    InvalidUnionMemberType {
        member_type_name: String,
        union_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "`{undefined_type_name}` is referenced by `{referencing_path}` but is \
        not defined in the schema"
    )]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        referencing_path: String,
        undefined_type_name: String,
    },
}
