use crate::LocatedError;
use crate::SourcePosition;
use crate::resolve::FieldResolver;
use crate::resolve::ResolveError;
use crate::resolve::ResolveParams;
use crossbeam_channel::Sender;
use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;

/// One unit of resolution work, queued on a
/// [`ResolveManager`](crate::resolve::ResolveManager).
#[derive(Debug)]
pub(crate) struct ResolveRequest {
    pub(crate) name: String,
    pub(crate) params: ResolveParams,
    pub(crate) reply: Sender<ResolveResponse>,
    pub(crate) resolver: FieldResolver,
}
impl ResolveRequest {
    /// Run the resolver and send its [`ResolveResponse`]. A panicking resolver
    /// is reported as a [`ResolveError::Fault`]; the calling worker survives.
    pub(crate) fn run(self) {
        let Self { name, params, reply, resolver } = self;
        let span = tracing::debug_span!("resolve_field", name = name.as_str());
        let _guard = span.enter();

        let field_locations = params.info.field_locations.clone();
        let path = params.info.path.clone();
        let result =
            match panic::catch_unwind(AssertUnwindSafe(|| resolver.call(params))) {
                Ok(Ok(value)) => Ok(value),

                Ok(Err(err)) => {
                    log::debug!("Resolver for `{name}` returned an error: {err}");
                    Err(ResolveError::Resolver(err))
                },

                Err(payload) => {
                    let err = fault_from_panic(payload, field_locations, path);
                    log::error!("Resolver for `{name}` panicked: {}", err.message);
                    Err(ResolveError::Fault(err))
                },
            };

        if reply.send(ResolveResponse { name, result }).is_err() {
            log::trace!("Reply channel was dropped before the response was sent.");
        }
    }
}

fn fault_from_panic(
    payload: Box<dyn Any + Send>,
    locations: Vec<SourcePosition>,
    path: Vec<String>,
) -> LocatedError {
    let payload = match payload.downcast::<LocatedError>() {
        Ok(err) => return *err,
        Err(payload) => payload,
    };

    let message =
        if let Some(msg) = payload.downcast_ref::<&'static str>() {
            msg.to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.to_owned()
        } else {
            "Resolver panicked with a non-string payload".to_string()
        };

    LocatedError::new(message)
        .with_locations(locations)
        .with_path(path)
}

/// The single response delivered for each submitted request.
#[derive(Debug)]
pub struct ResolveResponse {
    /// The logical name the request was submitted under, so that responses
    /// sharing one reply channel can be told apart.
    pub name: String,
    pub result: Result<serde_json::Value, ResolveError>,
}
impl ResolveResponse {
    pub fn error(&self) -> Option<&ResolveError> {
        self.result.as_ref().err()
    }

    pub fn value(&self) -> Option<&serde_json::Value> {
        self.result.as_ref().ok()
    }
}
