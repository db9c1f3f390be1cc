/// Tunables for a [`ResolveManager`](crate::resolve::ResolveManager).
///
/// Deserializable so it can be embedded in a server's own configuration;
/// omitted keys take their default values.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveManagerConfig {
    /// Number of requests the shared queue holds before submitters start
    /// spinning up transient workers.
    pub queue_capacity: usize,

    /// Number of long-lived workers draining the queue.
    pub permanent_workers: usize,

    /// Worker threads are named `{thread_name_prefix}-{n}` (permanent) and
    /// `{thread_name_prefix}-transient-{n}` (transient).
    pub thread_name_prefix: String,
}
impl ResolveManagerConfig {
    pub const DEFAULT_QUEUE_CAPACITY: usize = 10;
}
impl Default for ResolveManagerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: Self::DEFAULT_QUEUE_CAPACITY,
            permanent_workers: 2 * Self::DEFAULT_QUEUE_CAPACITY,
            thread_name_prefix: "graphql-resolver".to_string(),
        }
    }
}
