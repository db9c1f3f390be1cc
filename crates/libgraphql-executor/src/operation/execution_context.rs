use crate::ast;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::ObjectType;
use std::collections::HashMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecutionContextError>;

/// Everything about a single request that stays fixed while it is analyzed
/// and executed: the [`Schema`], the selected operation, and the document's
/// fragment definitions keyed by name.
#[derive(Debug)]
pub struct ExecutionContext<'schema, 'doc> {
    fragments: HashMap<&'doc str, &'doc ast::query::FragmentDefinition>,
    operation: &'doc ast::query::OperationDefinition,
    operation_name: Option<&'doc str>,
    root_type: &'schema ObjectType,
    schema: &'schema Schema,
}
impl<'schema, 'doc> ExecutionContext<'schema, 'doc> {
    /// Select the operation to run from `document`.
    ///
    /// When `operation_name` is `None` the document must contain exactly one
    /// operation.
    pub fn new(
        schema: &'schema Schema,
        document: &'doc ast::query::Document,
        operation_name: Option<&str>,
    ) -> Result<Self> {
        let mut fragments = HashMap::new();
        let mut operations = vec![];
        for def in &document.definitions {
            match def {
                ast::query::Definition::Fragment(frag_def) => {
                    fragments.insert(frag_def.name.as_str(), frag_def);
                },
                ast::query::Definition::Operation(op_def) =>
                    operations.push((operation_def_name(op_def), op_def)),
            }
        }

        let (selected_name, operation) = match operation_name {
            Some(requested_name) => operations
                .into_iter()
                .find(|(name, _)| *name == Some(requested_name))
                .ok_or_else(|| ExecutionContextError::UnknownOperationName {
                    operation_name: requested_name.to_string(),
                })?,

            None => {
                let mut operations = operations.into_iter();
                match (operations.next(), operations.next()) {
                    (Some(operation), None) => operation,
                    (None, _) => return Err(ExecutionContextError::NoOperation),
                    (Some(_), Some(_)) => return Err(
                        ExecutionContextError::OperationNameRequired {
                            operation_count: 2 + operations.count(),
                        },
                    ),
                }
            },
        };

        let kind = OperationKind::from_ast(operation);
        let root_type = schema
            .root_operation_type(&kind)
            .ok_or(ExecutionContextError::UndefinedRootOperationType { kind })?;

        log::trace!(
            "Selected {kind} operation `{}` ({} fragment(s) in document).",
            selected_name.unwrap_or("<anonymous>"),
            fragments.len(),
        );

        Ok(Self {
            fragments,
            operation,
            operation_name: selected_name,
            root_type,
            schema,
        })
    }

    /// Look up a fragment definition from the document by name.
    pub fn fragment(&self, name: &str) -> Option<&'doc ast::query::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub fn operation(&self) -> &'doc ast::query::OperationDefinition {
        self.operation
    }

    pub fn operation_kind(&self) -> OperationKind {
        OperationKind::from_ast(self.operation)
    }

    /// The name of the selected operation, or `None` for an anonymous one.
    pub fn operation_name(&self) -> Option<&'doc str> {
        self.operation_name
    }

    /// The [`ObjectType`] the selected operation's root selection set is
    /// evaluated against.
    pub fn operation_root_type(&self) -> &'schema ObjectType {
        self.root_type
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// The selected operation's root selection set.
    pub fn selection_set(&self) -> &'doc ast::query::SelectionSet {
        use ast::query::OperationDefinition;
        match self.operation {
            OperationDefinition::Mutation(mutation) => &mutation.selection_set,
            OperationDefinition::Query(query) => &query.selection_set,
            OperationDefinition::SelectionSet(selection_set) => selection_set,
            OperationDefinition::Subscription(subscription) => &subscription.selection_set,
        }
    }
}

fn operation_def_name(operation: &ast::query::OperationDefinition) -> Option<&str> {
    use ast::query::OperationDefinition;
    match operation {
        OperationDefinition::Mutation(mutation) => mutation.name.as_deref(),
        OperationDefinition::Query(query) => query.name.as_deref(),
        OperationDefinition::SelectionSet(_) => None,
        OperationDefinition::Subscription(subscription) => subscription.name.as_deref(),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionContextError {
    #[error("The document does not contain any operations")]
    NoOperation,

    #[error(
        "The document contains {operation_count} operations, so an operation \
        name must be provided"
    )]
    OperationNameRequired {
        operation_count: usize,
    },

    #[error("The schema does not define a root type for {kind} operations")]
    UndefinedRootOperationType {
        kind: OperationKind,
    },

    #[error("The document does not contain an operation named `{operation_name}`")]
    UnknownOperationName {
        operation_name: String,
    },
}
