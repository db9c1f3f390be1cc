use crate::LocatedError;
use crate::resolve::FieldResolver;
use crate::resolve::ResolveError;
use crate::resolve::ResolveManagerConfig;
use crate::resolve::ResolveParams;
use crate::resolve::ResolveRequest;
use crate::resolve::ResolveResponse;
use crossbeam_channel::Receiver;
use crossbeam_channel::SendError;
use crossbeam_channel::Sender;
use crossbeam_channel::TrySendError;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

type Result<T> = std::result::Result<T, ResolveManagerError>;

/// Runs field resolvers on a self-scaling set of worker threads.
///
/// A fixed number of permanent workers block on a bounded queue for as long
/// as the manager exists. Submitting into a full queue first starts a
/// transient worker that drains the queue and exits as soon as it finds it
/// empty, so a submitter never waits on a free slot for longer than it takes
/// to start one thread. The number of transient workers is deliberately not
/// capped (see the [module docs](crate::resolve)).
#[derive(Debug)]
pub struct ResolveManager {
    config: ResolveManagerConfig,
    requests_rx: Receiver<ResolveRequest>,
    requests_tx: Sender<ResolveRequest>,
    transient_workers_started: AtomicUsize,
}
impl ResolveManager {
    pub fn new(config: ResolveManagerConfig) -> Result<Self> {
        if config.queue_capacity == 0 {
            return Err(ResolveManagerError::ZeroQueueCapacity);
        }
        if config.permanent_workers == 0 {
            return Err(ResolveManagerError::NoPermanentWorkers);
        }
        if config.thread_name_prefix.contains('\0') {
            return Err(ResolveManagerError::InvalidThreadNamePrefix {
                prefix: config.thread_name_prefix.clone(),
            });
        }

        let (requests_tx, requests_rx) =
            crossbeam_channel::bounded(config.queue_capacity);

        // Permanent workers exit once every sender is gone, so a partially
        // started pool winds itself down when this returns early.
        for worker_idx in 0..config.permanent_workers {
            let requests_rx = requests_rx.clone();
            thread::Builder::new()
                .name(format!("{}-{worker_idx}", config.thread_name_prefix))
                .spawn(move || permanent_worker(requests_rx))
                .map_err(ResolveManagerError::WorkerSpawn)?;
        }

        log::debug!(
            "Started {} permanent resolver workers over a queue of {}.",
            config.permanent_workers,
            config.queue_capacity,
        );

        Ok(Self {
            config,
            requests_rx,
            requests_tx,
            transient_workers_started: AtomicUsize::new(0),
        })
    }

    pub fn config(&self) -> &ResolveManagerConfig {
        &self.config
    }

    /// Submit one resolver invocation and wait for its response.
    pub fn resolve(
        &self,
        name: impl Into<String>,
        resolver: FieldResolver,
        params: ResolveParams,
    ) -> ResolveResponse {
        let name = name.into();
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        self.submit(name.clone(), reply_tx, resolver, params);
        reply_rx.recv().unwrap_or_else(|_| ResolveResponse {
            name,
            result: Err(ResolveError::Fault(LocatedError::new(
                "Resolver worker exited without sending a response",
            ))),
        })
    }

    /// Queue one resolver invocation. Exactly one [`ResolveResponse`] for it
    /// will be sent on `reply`.
    ///
    /// This never blocks for longer than it takes to start one transient
    /// worker, and may be called from within a running resolver.
    pub fn submit(
        &self,
        name: impl Into<String>,
        reply: Sender<ResolveResponse>,
        resolver: FieldResolver,
        params: ResolveParams,
    ) {
        let request = ResolveRequest {
            name: name.into(),
            params,
            reply,
            resolver,
        };

        let request = match self.requests_tx.try_send(request) {
            Ok(()) => return,
            Err(TrySendError::Full(request)) => {
                self.start_transient_worker();
                request
            },
            Err(TrySendError::Disconnected(request)) => request,
        };

        if let Err(SendError(request)) = self.requests_tx.send(request) {
            // Unreachable while `self` holds a receiver, but the response must
            // still be delivered.
            log::warn!(
                "Resolver queue disconnected; resolving `{}` inline.",
                request.name,
            );
            request.run();
        }
    }

    /// How many transient workers have been started over the lifetime of this
    /// manager.
    pub fn transient_workers_started(&self) -> usize {
        self.transient_workers_started.load(Ordering::Relaxed)
    }

    fn start_transient_worker(&self) {
        let worker_idx = self.transient_workers_started.load(Ordering::Relaxed);
        let requests_rx = self.requests_rx.clone();
        let spawn_result = thread::Builder::new()
            .name(format!(
                "{}-transient-{worker_idx}",
                self.config.thread_name_prefix,
            ))
            .spawn(move || transient_worker(requests_rx));

        match spawn_result {
            Ok(_) => {
                self.transient_workers_started.fetch_add(1, Ordering::Relaxed);
                log::trace!(
                    "Resolver queue full; started transient worker #{worker_idx}.",
                );
            },

            // Permanent workers will still drain the queue; the submitter just
            // waits on them instead.
            Err(err) => log::error!(
                "Failed to start a transient resolver worker: {err}",
            ),
        }
    }
}

fn permanent_worker(requests: Receiver<ResolveRequest>) {
    while let Ok(request) = requests.recv() {
        request.run();
    }
    log::trace!("Resolver queue closed; permanent worker exiting.");
}

fn transient_worker(requests: Receiver<ResolveRequest>) {
    while let Ok(request) = requests.try_recv() {
        request.run();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveManagerError {
    #[error("Resolver thread name prefix must not contain a NUL byte: {prefix:?}")]
    InvalidThreadNamePrefix {
        prefix: String,
    },

    #[error("A resolve manager needs at least one permanent worker")]
    NoPermanentWorkers,

    #[error("Failed to start a resolver worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("A resolve manager's queue capacity must be greater than zero")]
    ZeroQueueCapacity,
}
