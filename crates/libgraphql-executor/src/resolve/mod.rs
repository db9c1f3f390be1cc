//! Concurrent execution of field resolvers.
//!
//! A [`ResolveManager`] owns a bounded request queue drained by a fixed set
//! of long-lived worker threads. When the queue is full, [`ResolveManager::submit`]
//! starts one more short-lived worker (which exits once it finds the queue
//! empty) rather than blocking. Resolvers commonly submit further requests
//! for their child fields, so capping the number of workers could leave every
//! worker waiting on work that no worker is free to run.
//!
//! Each request is answered with exactly one [`ResolveResponse`] on the
//! request's own reply channel, including when its resolver panics.

mod field_resolver;
mod resolve_error;
mod resolve_manager;
mod resolve_manager_config;
mod resolve_params;
mod resolve_request;

pub use field_resolver::BoxError;
pub use field_resolver::FieldResolver;
pub use field_resolver::ResolverResult;
pub use resolve_error::ResolveError;
pub use resolve_manager::ResolveManager;
pub use resolve_manager::ResolveManagerError;
pub use resolve_manager_config::ResolveManagerConfig;
pub use resolve_params::ResolveContext;
pub use resolve_params::ResolveInfo;
pub use resolve_params::ResolveParams;
pub(crate) use resolve_request::ResolveRequest;
pub use resolve_request::ResolveResponse;

#[cfg(test)]
mod tests;
