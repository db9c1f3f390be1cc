use crate::resolve::FieldResolver;
use crate::resolve::ResolveError;
use crate::resolve::ResolveManager;
use crate::resolve::ResolveManagerConfig;
use crate::resolve::ResolveParams;
use crate::resolve::ResolveResponse;
use crate::test::init_logging;
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, crate::resolve::ResolveManagerError>;

fn value_resolver(value: serde_json::Value) -> FieldResolver {
    FieldResolver::new(move |_| Ok(value.clone()))
}

/// A resolver that reports that it started and then blocks until `gate` is
/// signalled (or dropped).
fn gated_resolver(
    started: crossbeam_channel::Sender<()>,
    gate: crossbeam_channel::Receiver<()>,
    value: serde_json::Value,
) -> FieldResolver {
    FieldResolver::new(move |_| {
        let _ = started.send(());
        let _ = gate.recv();
        Ok(value.clone())
    })
}

fn small_manager() -> Result<ResolveManager> {
    init_logging();
    ResolveManager::new(ResolveManagerConfig {
        queue_capacity: 1,
        permanent_workers: 1,
        thread_name_prefix: "test-resolver".to_string(),
    })
}

#[test]
fn resolve_returns_the_resolver_value() -> Result<()> {
    init_logging();
    let manager = ResolveManager::new(ResolveManagerConfig::default())?;

    let response = manager.resolve(
        "example.a",
        FieldResolver::new(|params| Ok(serde_json::json!({ "echo": params.args["size"] }))),
        ResolveParams {
            args: [("size".to_string(), serde_json::json!(3))].into_iter().collect(),
            ..Default::default()
        },
    );

    assert_eq!(response.name, "example.a");
    assert_eq!(response.value(), Some(&serde_json::json!({ "echo": 3 })));
    assert_eq!(manager.transient_workers_started(), 0);
    Ok(())
}

#[test]
fn resolver_error_is_forwarded_unchanged() -> Result<()> {
    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("forbidden: {0}")]
    struct Forbidden(String);

    init_logging();
    let manager = ResolveManager::new(ResolveManagerConfig::default())?;
    let response = manager.resolve(
        "secret",
        FieldResolver::new(|_| Err(Forbidden("secret".to_string()).into())),
        ResolveParams::default(),
    );

    match response.error() {
        Some(ResolveError::Resolver(err)) => assert_eq!(
            err.downcast_ref::<Forbidden>(),
            Some(&Forbidden("secret".to_string())),
        ),
        other => panic!("expected a resolver error, got {other:?}"),
    }
    assert!(response.value().is_none());
    Ok(())
}

#[test]
fn panicking_resolver_does_not_take_down_its_worker() -> Result<()> {
    let manager = small_manager()?;

    let response = manager.resolve("boom", FieldResolver::new(|_| panic!("boom")), ResolveParams::default());
    assert!(response.error().is_some_and(ResolveError::is_fault));

    // The single permanent worker is still around to serve this one.
    let response = manager.resolve("after", value_resolver(serde_json::json!(1)), ResolveParams::default());
    assert_eq!(response.value(), Some(&serde_json::json!(1)));
    Ok(())
}

#[test]
fn full_queue_starts_a_transient_worker() -> Result<()> {
    let manager = small_manager()?;
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
    let (started_tx, started_rx) = crossbeam_channel::unbounded();
    let (gate_tx, gate_rx) = crossbeam_channel::bounded::<()>(0);

    // Occupy the only permanent worker.
    manager.submit(
        "blocked",
        reply_tx.clone(),
        gated_resolver(started_tx, gate_rx, serde_json::json!("blocked")),
        ResolveParams::default(),
    );
    started_rx.recv().unwrap();

    // Fills the single queue slot.
    manager.submit("queued", reply_tx.clone(), value_resolver(serde_json::json!("queued")), ResolveParams::default());
    assert_eq!(manager.transient_workers_started(), 0);

    // Finds the queue full.
    manager.submit("overflow", reply_tx.clone(), value_resolver(serde_json::json!("overflow")), ResolveParams::default());
    assert_eq!(manager.transient_workers_started(), 1);

    // The transient worker drains the queued request while the permanent
    // worker is still blocked.
    assert_eq!(reply_rx.recv().unwrap().name, "queued");

    drop(gate_tx);
    let mut names = HashSet::new();
    for _ in 0..2 {
        let response = reply_rx.recv().unwrap();
        assert_eq!(response.value(), Some(&serde_json::json!(response.name)));
        names.insert(response.name);
    }
    assert_eq!(names, HashSet::from(["blocked".to_string(), "overflow".to_string()]));
    Ok(())
}

#[test]
fn responses_arrive_in_completion_order() -> Result<()> {
    init_logging();
    let manager = ResolveManager::new(ResolveManagerConfig::default())?;
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
    let (started_tx, started_rx) = crossbeam_channel::unbounded();
    let (gate_tx, gate_rx) = crossbeam_channel::bounded::<()>(0);

    manager.submit(
        "slow",
        reply_tx.clone(),
        gated_resolver(started_tx, gate_rx, serde_json::json!("slow")),
        ResolveParams::default(),
    );
    started_rx.recv().unwrap();
    manager.submit("fast", reply_tx, value_resolver(serde_json::json!("fast")), ResolveParams::default());

    assert_eq!(reply_rx.recv().unwrap().name, "fast");
    gate_tx.send(()).unwrap();
    assert_eq!(reply_rx.recv().unwrap().name, "slow");
    Ok(())
}

#[test]
fn every_request_gets_exactly_one_response() -> Result<()> {
    const REQUEST_COUNT: usize = 50;

    let manager = ResolveManager::new(ResolveManagerConfig {
        queue_capacity: 2,
        permanent_workers: 1,
        ..Default::default()
    })?;
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
    for idx in 0..REQUEST_COUNT {
        let resolver = if idx % 7 == 0 {
            FieldResolver::new(move |_| panic!("request {idx} failed"))
        } else {
            value_resolver(serde_json::json!(idx))
        };
        manager.submit(format!("field{idx}"), reply_tx.clone(), resolver, ResolveParams::default());
    }
    drop(reply_tx);

    // Iteration ends once every request (and so every reply sender) is gone.
    let responses: Vec<ResolveResponse> = reply_rx.iter().collect();
    assert_eq!(responses.len(), REQUEST_COUNT);

    let names: HashSet<&str> = responses.iter().map(|resp| resp.name.as_str()).collect();
    assert_eq!(names.len(), REQUEST_COUNT);
    let fault_count = responses.iter().filter(|resp| resp.error().is_some()).count();
    assert_eq!(fault_count, REQUEST_COUNT.div_ceil(7));
    Ok(())
}

#[test]
fn resolvers_can_submit_child_requests() -> Result<()> {
    init_logging();
    let manager = Arc::new(ResolveManager::new(ResolveManagerConfig::default())?);

    let child_manager = Arc::clone(&manager);
    let parent = FieldResolver::new(move |_| {
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        for idx in 0..3 {
            child_manager.submit(
                format!("child{idx}"),
                reply_tx.clone(),
                value_resolver(serde_json::json!(idx)),
                ResolveParams::default(),
            );
        }
        drop(reply_tx);

        let mut values: Vec<i64> = reply_rx
            .iter()
            .filter_map(|resp| resp.value().and_then(serde_json::Value::as_i64))
            .collect();
        values.sort();
        Ok(serde_json::json!(values))
    });

    let response = manager.resolve("parent", parent, ResolveParams::default());
    assert_eq!(response.value(), Some(&serde_json::json!([0, 1, 2])));
    Ok(())
}

#[test]
fn concurrent_submitters_each_get_their_own_response() -> Result<()> {
    init_logging();
    let manager = ResolveManager::new(ResolveManagerConfig {
        queue_capacity: 4,
        permanent_workers: 2,
        ..Default::default()
    })?;
    let resolver = FieldResolver::new(|params| Ok(params.source));

    let mismatches = (0..200_u64)
        .into_par_iter()
        .filter(|idx| {
            let response = manager.resolve(
                format!("field{idx}"),
                resolver.clone(),
                ResolveParams {
                    source: serde_json::json!(idx),
                    ..Default::default()
                },
            );
            response.name != format!("field{idx}")
                || response.value() != Some(&serde_json::json!(idx))
        })
        .count();

    assert_eq!(mismatches, 0);
    Ok(())
}
