//! Concurrent first access to a shared proxy.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use tweetkit::http::StatusCode;
use tweetkit::prelude::*;
use tweetkit::types::User;

#[test]
fn racing_readers_build_once() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();
    let json = JsonFactory::default();
    let proxy: Deferred<User> = Deferred::from_fn(
        ObjectKind::User,
        RawResponse::from_body(StatusCode::OK, r#"{"id": 99, "screen_name": "racer"}"#),
        move |raw: &RawResponse| {
            counter.fetch_add(1, Ordering::SeqCst);
            // Widen the race window.
            thread::sleep(Duration::from_millis(20));
            json.create_user(raw)
        },
    );

    thread::scope(|s| {
        for _ in 0..16 {
            s.spawn(|| {
                assert_eq!(proxy.screen_name, "racer");
            });
        }
    });

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert!(proxy.is_materialized());
}

#[test]
fn proxies_move_across_threads() {
    let factory = LazyFactory::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let body = format!(r#"{{"id": {i}, "text": "from {i}"}}"#);
            let proxy = factory.create_status(RawResponse::from_body(StatusCode::OK, body));
            thread::spawn(move || proxy.id)
        })
        .collect();

    let ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}
