pub mod ast;
pub mod cost;
mod execution_result;
pub mod loc;
mod located_error;
mod named_ref;
pub mod operation;
pub mod resolve;
pub mod schema;
pub mod types;

pub use execution_result::ExecutionResult;
pub use located_error::LocatedError;
pub use located_error::SourcePosition;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
