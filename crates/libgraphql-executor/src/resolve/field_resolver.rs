use crate::resolve::ResolveParams;
use std::sync::Arc;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What a resolver hands back: the resolved value, or an application-level
/// error that is forwarded to the caller unchanged.
pub type ResolverResult = Result<serde_json::Value, BoxError>;

type ResolverFn = dyn Fn(ResolveParams) -> ResolverResult + Send + Sync;

/// A shareable field-resolver callback.
#[derive(Clone)]
pub struct FieldResolver(Arc<ResolverFn>);
impl FieldResolver {
    pub fn new<F>(resolver_fn: F) -> Self
    where
        F: Fn(ResolveParams) -> ResolverResult + Send + Sync + 'static,
    {
        Self(Arc::new(resolver_fn))
    }

    pub fn call(&self, params: ResolveParams) -> ResolverResult {
        (self.0)(params)
    }
}
impl std::fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldResolver").finish_non_exhaustive()
    }
}
