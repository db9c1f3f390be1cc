use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::resolve::FieldResolver;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Name of the directive used to declare a field's cost weight:
/// `field: Type @cost(weight: 10)`.
pub(crate) const COST_DIRECTIVE_NAME: &str = "cost";
const COST_WEIGHT_ARG_NAME: &str = "weight";

/// Utility for building a [Schema].
///
/// Types are loaded from SDL (via [`SchemaBuilder::load_str()`] or
/// [`SchemaBuilder::load_file()`]) and resolvers are attached with
/// [`SchemaBuilder::register_resolver()`]. Type extensions and resolver
/// registrations are only checked against the full set of types once
/// [`SchemaBuilder::build()`] is called, so load order does not matter.
#[derive(Debug)]
pub struct SchemaBuilder {
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    resolvers: Vec<PendingResolver>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(file_path.as_path(), ext)?;
        }

        for pending in std::mem::take(&mut self.resolvers) {
            self.attach_resolver(pending)?;
        }

        let errors = validate_types(&self.types);
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let query_type = match self.query_type.take() {
            Some(def) => def,
            None if self.types.contains_key("Query") => NamedTypeDefLocation {
                def_location: self.types["Query"].def_location().to_owned(),
                type_name: "Query".to_string(),
            },
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };
        let mutation_type = self.mutation_type.take().or_else(|| {
            self.default_root_type("Mutation")
        });
        let subscription_type = self.subscription_type.take().or_else(|| {
            self.default_root_type("Subscription")
        });

        for (kind, root_type) in [
            (OperationKind::Query, Some(&query_type)),
            (OperationKind::Mutation, mutation_type.as_ref()),
            (OperationKind::Subscription, subscription_type.as_ref()),
        ] {
            let Some(root_type) = root_type else { continue };
            match self.types.get(root_type.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => (),
                _ => return Err(SchemaBuildError::InvalidRootOperationType {
                    def_location: root_type.def_location.to_owned(),
                    operation: kind,
                    type_name: root_type.type_name.to_owned(),
                }),
            }
        }

        let implementations = collect_implementations(&self.types);
        log::debug!(
            "Built schema with {} types ({} interfaces with implementations).",
            self.types.len(),
            implementations.len(),
        );

        Ok(Schema {
            implementations,
            query_type: query_type.into_type_ref(),
            mutation_type: mutation_type.map(NamedTypeDefLocation::into_type_ref),
            subscription_type: subscription_type.map(NamedTypeDefLocation::into_type_ref),
            types: self.types,
        })
    }

    /// Shorthand for `SchemaBuilder::new().load_str(file_path, content)`.
    pub fn from_str(
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err,
                })?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            resolvers: vec![],
            str_load_counter: 0,
            subscription_type: None,
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    /// Attach a resolver callback to the `type_name.field_name` field. The
    /// field must exist on an object or interface type by the time
    /// [`SchemaBuilder::build()`] is called.
    pub fn register_resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: FieldResolver,
    ) -> Self {
        self.resolvers.push(PendingResolver {
            field_name: field_name.into(),
            resolver,
            type_name: type_name.into(),
        });
        self
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        def_location: loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: def_location,
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn attach_resolver(&mut self, pending: PendingResolver) -> Result<()> {
        let field = match self.types.get_mut(pending.type_name.as_str()) {
            Some(GraphQLType::Interface(InterfaceType(data)))
                | Some(GraphQLType::Object(ObjectType(data)))
                => data.fields.get_mut(pending.field_name.as_str()),
            _ => None,
        };

        match field {
            Some(field) => {
                field.resolver = Some(pending.resolver);
                Ok(())
            },
            None => Err(SchemaBuildError::ResolverForUndefinedField {
                field_name: pending.field_name,
                type_name: pending.type_name,
            }),
        }
    }

    fn default_root_type(&self, type_name: &str) -> Option<NamedTypeDefLocation> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedTypeDefLocation {
                def_location: obj_type.def_location().to_owned(),
                type_name: type_name.to_string(),
            }),
            _ => None,
        }
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_owned(), ext.position),
        };
        let extension_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, position).into();

        let Some(existing_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_loc,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                ),

            (GraphQLType::InputObject(_), TypeExtension::InputObject(_))
                | (GraphQLType::Scalar(_), TypeExtension::Scalar(_))
                => (),

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(ext)) =>
                merge_fields_and_interfaces(
                    data,
                    file_path,
                    &ext.implements_interfaces,
                    &ext.fields,
                    &extension_loc,
                )?,

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(ext)) =>
                merge_fields_and_interfaces(
                    data,
                    file_path,
                    &ext.implements_interfaces,
                    &ext.fields,
                    &extension_loc,
                )?,

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                union_type.members.extend(ext.types.iter().map(|member_name| {
                    NamedGraphQLTypeRef::new(member_name, extension_loc.clone())
                })),

            (_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                extension_loc,
            }),
        }

        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            // Directive definitions (including a `directive @cost(...)`
            // declaration) carry nothing the executor needs.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, schema_def.position).into();

        for (kind, type_name) in [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ] {
            let Some(type_name) = type_name else { continue };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: def_location.clone(),
                type_name,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        match type_def {
            TypeDefinition::Enum(def) => {
                let def_location = def_location(file_path, def.position);
                self.add_new_type(&def.name, def_location.clone(), GraphQLType::Enum(EnumType {
                    def_location,
                    name: def.name.to_owned(),
                    values: def.values.into_iter().map(|value| value.name).collect(),
                }))
            },

            TypeDefinition::InputObject(def) => {
                let def_location = def_location(file_path, def.position);
                self.add_new_type(&def.name, def_location.clone(), GraphQLType::InputObject(
                    InputObjectType {
                        def_location,
                        name: def.name.to_owned(),
                    },
                ))
            },

            TypeDefinition::Interface(def) => {
                let data = object_or_interface_data_from_ast(
                    file_path,
                    def.position,
                    &def.name,
                    def.description,
                    &def.implements_interfaces,
                    &def.fields,
                )?;
                self.add_new_type(
                    &def.name,
                    data.def_location.clone(),
                    GraphQLType::Interface(InterfaceType(data)),
                )
            },

            TypeDefinition::Object(def) => {
                let data = object_or_interface_data_from_ast(
                    file_path,
                    def.position,
                    &def.name,
                    def.description,
                    &def.implements_interfaces,
                    &def.fields,
                )?;
                self.add_new_type(
                    &def.name,
                    data.def_location.clone(),
                    GraphQLType::Object(ObjectType(data)),
                )
            },

            TypeDefinition::Scalar(def) => {
                let def_location = def_location(file_path, def.position);
                self.add_new_type(&def.name, def_location.clone(), GraphQLType::Scalar(
                    ScalarType {
                        def_location,
                        name: def.name.to_owned(),
                    },
                ))
            },

            TypeDefinition::Union(def) => {
                let def_location = def_location(file_path, def.position);
                self.add_new_type(&def.name, def_location.clone(), GraphQLType::Union(UnionType {
                    members: def.types.iter().map(|member_name| {
                        NamedGraphQLTypeRef::new(member_name, def_location.clone())
                    }).collect(),
                    def_location,
                    name: def.name.to_owned(),
                }))
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn def_location(file_path: &Path, pos: graphql_parser::Pos) -> loc::SourceLocation {
    loc::FilePosition::from_pos(file_path, pos).into()
}

fn object_or_interface_data_from_ast(
    file_path: &Path,
    position: graphql_parser::Pos,
    type_name: &str,
    description: Option<String>,
    implements_interfaces: &[String],
    ast_fields: &[ast::schema::Field],
) -> Result<ObjectOrInterfaceTypeData> {
    let def_location = def_location(file_path, position);
    let mut data = ObjectOrInterfaceTypeData {
        def_location: def_location.clone(),
        description,
        fields: IndexMap::new(),
        interfaces: vec![],
        name: type_name.to_string(),
    };
    merge_fields_and_interfaces(
        &mut data,
        file_path,
        implements_interfaces,
        ast_fields,
        &def_location,
    )?;
    Ok(data)
}

fn merge_fields_and_interfaces(
    data: &mut ObjectOrInterfaceTypeData,
    file_path: &Path,
    implements_interfaces: &[String],
    ast_fields: &[ast::schema::Field],
    interfaces_loc: &loc::SourceLocation,
) -> Result<()> {
    for iface_name in implements_interfaces {
        if data.interfaces.iter().any(|iface_ref| iface_ref.name() == iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: interfaces_loc.to_owned(),
                duplicated_interface_name: iface_name.to_string(),
                type_name: data.name.to_owned(),
            });
        }
        data.interfaces.push(NamedGraphQLTypeRef::new(
            iface_name,
            interfaces_loc.to_owned(),
        ));
    }

    for ast_field in ast_fields {
        let field = field_from_ast(file_path, data.name.as_str(), ast_field)?;
        if let Some(existing_field) = data.fields.get(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: data.name.to_owned(),
                field_name: field.name,
                field_def1: existing_field.def_location.to_owned(),
                field_def2: field.def_location,
            });
        }
        data.fields.insert(field.name.to_owned(), field);
    }

    Ok(())
}

fn field_from_ast(
    file_path: &Path,
    parent_type_name: &str,
    ast_field: &ast::schema::Field,
) -> Result<Field> {
    let field_loc = def_location(file_path, ast_field.position);
    if ast_field.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
            def_location: field_loc,
            field_name: ast_field.name.to_owned(),
            type_name: parent_type_name.to_string(),
        });
    }

    Ok(Field {
        cost: cost_from_directives(
            &field_loc,
            parent_type_name,
            ast_field.name.as_str(),
            &ast_field.directives,
        )?,
        def_location: field_loc.clone(),
        name: ast_field.name.to_owned(),
        parameters: ast_field.arguments.iter().map(|input_val| (
            input_val.name.to_owned(),
            TypeAnnotation::from_ast_type(
                &def_location(file_path, input_val.position),
                &input_val.value_type,
            ),
        )).collect(),
        parent_type_name: parent_type_name.to_string(),
        resolver: None,
        type_annotation: TypeAnnotation::from_ast_type(
            &field_loc,
            &ast_field.field_type,
        ),
    })
}

fn cost_from_directives(
    field_loc: &loc::SourceLocation,
    parent_type_name: &str,
    field_name: &str,
    directives: &[ast::schema::Directive],
) -> Result<u64> {
    let Some(cost_directive) = directives
        .iter()
        .find(|directive| directive.name == COST_DIRECTIVE_NAME) else {
        return Ok(0);
    };

    let weight = cost_directive.arguments
        .iter()
        .find(|(arg_name, _)| arg_name == COST_WEIGHT_ARG_NAME)
        .map(|(_, value)| value);

    if let Some(ast::schema::Value::Int(num)) = weight
        && let Some(weight) = num.as_i64().and_then(|n| u64::try_from(n).ok()) {
        return Ok(weight);
    }

    Err(SchemaBuildError::InvalidCostWeight {
        def_location: field_loc.to_owned(),
        field_name: field_name.to_string(),
        type_name: parent_type_name.to_string(),
        value: weight.map(|value| format!("{value:?}")),
    })
}

fn collect_implementations(
    types: &HashMap<String, GraphQLType>,
) -> HashMap<String, Vec<String>> {
    let mut implementations: HashMap<String, Vec<String>> = HashMap::new();
    for type_ in types.values() {
        if let GraphQLType::Object(obj_type) = type_ {
            for iface_name in obj_type.interface_names() {
                implementations
                    .entry(iface_name.to_string())
                    .or_default()
                    .push(obj_type.name().to_string());
            }
        }
    }
    for impl_names in implementations.values_mut() {
        impl_names.sort();
    }
    implementations
}

fn validate_types(types: &HashMap<String, GraphQLType>) -> Vec<TypeValidationError> {
    let mut type_names: Vec<&String> = types.keys().collect();
    type_names.sort();

    let mut errors = vec![];
    for type_name in type_names {
        match &types[type_name] {
            GraphQLType::Interface(InterfaceType(data))
                | GraphQLType::Object(ObjectType(data))
                => validate_object_or_interface(data, types, &mut errors),

            GraphQLType::Union(union_type) => {
                for member_name in union_type.member_type_names() {
                    match types.get(member_name) {
                        Some(GraphQLType::Object(_)) => (),
                        Some(_) => errors.push(TypeValidationError::InvalidUnionMemberType {
                            member_type_name: member_name.to_string(),
                            union_type_name: union_type.name().to_string(),
                            loc: union_type.def_location().to_owned(),
                        }),
                        None => errors.push(TypeValidationError::UndefinedTypeName {
                            ref_location: union_type.def_location().to_owned(),
                            referencing_path: union_type.name().to_string(),
                            undefined_type_name: member_name.to_string(),
                        }),
                    }
                }
            },

            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::InputObject(_)
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                => (),
        }
    }
    errors
}

fn validate_object_or_interface(
    data: &ObjectOrInterfaceTypeData,
    types: &HashMap<String, GraphQLType>,
    errors: &mut Vec<TypeValidationError>,
) {
    for iface_ref in &data.interfaces {
        match types.get(iface_ref.name()) {
            Some(GraphQLType::Interface(_)) => (),
            Some(non_iface) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                type_name: data.name.to_owned(),
                non_interface_type_name: non_iface.name().to_string(),
                loc: iface_ref.ref_location().to_owned(),
            }),
            None => errors.push(TypeValidationError::ImplementsUndefinedInterface {
                type_name: data.name.to_owned(),
                undefined_interface_name: iface_ref.name().to_string(),
                loc: iface_ref.ref_location().to_owned(),
            }),
        }
    }

    for field in data.fields.values() {
        let return_type_name =
            field.type_annotation.innermost_named_type_annotation().graphql_type_name();
        match types.get(return_type_name) {
            Some(return_type) if !return_type.is_output_type() =>
                errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    def_location: field.def_location.to_owned(),
                    field_name: field.name.to_owned(),
                    input_type_name: return_type_name.to_string(),
                    parent_type_name: data.name.to_owned(),
                }),
            Some(_) => (),
            None => errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: field.type_annotation.ref_location().to_owned(),
                referencing_path: format!("{}.{}", data.name, field.name),
                undefined_type_name: return_type_name.to_string(),
            }),
        }

        for (param_name, param_type) in &field.parameters {
            let param_type_name =
                param_type.innermost_named_type_annotation().graphql_type_name();
            match types.get(param_type_name) {
                Some(graphql_type) if !graphql_type.is_input_type() =>
                    errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                        def_location: param_type.ref_location().to_owned(),
                        field_name: field.name.to_owned(),
                        invalid_type_name: param_type_name.to_string(),
                        parameter_name: param_name.to_owned(),
                        parent_type_name: data.name.to_owned(),
                    }),
                Some(_) => (),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: param_type.ref_location().to_owned(),
                    referencing_path: format!("{}.{}({param_name}:)", data.name, field.name),
                    undefined_type_name: param_type_name.to_string(),
                }),
            }
        }
    }
}

#[derive(Debug)]
struct PendingResolver {
    field_name: String,
    resolver: FieldResolver,
    type_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) type_name: String,
}
impl NamedTypeDefLocation {
    fn into_type_ref(self) -> NamedGraphQLTypeRef {
        NamedGraphQLTypeRef::new(self.type_name, self.def_location)
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("The `{type_name}` type declares that it implements the \
            `{duplicated_interface_name}` interface more than once")]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("Multiple definitions of the {operation:?} root operation type were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SourceLocation,
    },

    #[error(
        "The `@cost` directive on `{type_name}.{field_name}` must specify a \
        non-negative integer `weight` (found {value:?})"
    )]
    InvalidCostWeight {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
        value: Option<String>,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type using an extension for a \
        different kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_loc: loc::SourceLocation,
    },

    #[error("The {operation:?} root operation type `{type_name}` must be a defined object type")]
    InvalidRootOperationType {
        def_location: loc::SourceLocation,
        operation: OperationKind,
        type_name: String,
    },

    #[error("No query root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema from `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("A resolver was registered for `{type_name}.{field_name}`, which is not a defined field")]
    ResolverForUndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error("Failed to read schema file `{}`: {err}", file.display())]
    SchemaFileReadError {
        file: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Schema type validation failed with {} error(s)", errors.len())]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
