use crate::LocatedError;
use crate::SourcePosition;
use crate::resolve::BoxError;

/// The failure half of a [`ResolveResponse`](crate::resolve::ResolveResponse).
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The resolver panicked. The panic was caught on the worker and turned
    /// into an error located at the field's position(s) in the query.
    #[error("{0}")]
    Fault(LocatedError),

    /// The resolver returned an error of its own.
    #[error("{0}")]
    Resolver(BoxError),
}
impl ResolveError {
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Render this error as a response error entry. Faults already carry their
    /// own location; resolver errors are located at the given positions unless
    /// the resolver itself returned a [`LocatedError`].
    pub fn to_located_error(
        &self,
        locations: &[SourcePosition],
        path: &[String],
    ) -> LocatedError {
        match self {
            Self::Fault(err) => err.clone(),
            Self::Resolver(err) => match err.downcast_ref::<LocatedError>() {
                Some(located) => located.clone(),
                None => LocatedError::new(err.to_string())
                    .with_locations(locations.iter().copied())
                    .with_path(path.to_vec()),
            },
        }
    }
}
