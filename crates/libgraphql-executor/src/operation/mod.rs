mod execution_context;
mod operation_kind;

pub use execution_context::ExecutionContext;
pub use execution_context::ExecutionContextError;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod tests;
