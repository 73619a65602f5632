//! The sequence contract of list proxies.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use tweetkit::http::StatusCode;
use tweetkit::prelude::*;
use tweetkit::types::Status;

fn counted_status_list(body: &'static str, builds: Arc<AtomicUsize>) -> DeferredList<Status> {
    let json = JsonFactory::default();
    Deferred::from_fn(
        ObjectKind::Statuses,
        RawResponse::from_body(StatusCode::OK, body),
        move |raw: &RawResponse| {
            builds.fetch_add(1, Ordering::SeqCst);
            json.create_status_list(raw)
        },
    )
}

#[test]
fn three_element_fixture_contract() {
    let builds = Arc::new(AtomicUsize::new(0));
    let mut list = counted_status_list(include_str!("fixtures/status_list.json"), builds.clone());
    assert_eq!(builds.load(Ordering::SeqCst), 0);

    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.get(1).map(|s| s.text.as_str()), Some("second & more"));

    let ids: Vec<i64> = list.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    let tail: Vec<i64> = list.iter_from(1).map(|s| s.id).collect();
    assert_eq!(tail, vec![2, 1]);

    list.clear();
    assert_eq!(list.len(), 0);
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn mutation_before_first_read_builds_first() {
    let builds = Arc::new(AtomicUsize::new(0));
    let mut list = counted_status_list(include_str!("fixtures/status_list.json"), builds.clone());

    let removed = list.remove(0);
    assert_eq!(removed.id, 3);
    assert_eq!(list.len(), 2);
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn membership_and_search_by_value() {
    let list = LazyFactory::default()
        .create_status_list(RawResponse::from_body(StatusCode::OK, include_str!("fixtures/status_list.json")));
    let second = list[1].clone();

    assert!(list.contains(&second));
    assert!(list.contains_all([&list[0], &list[2]]));
    assert_eq!(list.index_of(&second), Some(1));
    assert_eq!(list.last_index_of(&second), Some(1));
    assert_eq!(list.sub_list(1..3).len(), 2);
    assert_eq!(list.to_vec().len(), 3);
}

#[test]
fn bulk_operations_through_proxy() {
    let mut list = LazyFactory::default()
        .create_status_list(RawResponse::from_body(StatusCode::OK, include_str!("fixtures/status_list.json")));
    let first = list[0].clone();
    let last = list[2].clone();

    assert!(list.remove_all(&[first.clone()]));
    assert_eq!(list.len(), 2);
    list.insert_all(0, [first.clone()]);
    assert_eq!(list[0], first);
    assert!(list.retain_all(&[first.clone(), last.clone()]));
    assert_eq!(list.to_vec(), vec![first.clone(), last]);
    assert!(list.remove_item(&first));
    assert!(!list.remove_item(&first));
    assert_eq!(list.len(), 1);
}

#[test]
fn list_proxy_equality_follows_items() {
    let factory = LazyFactory::default();
    let body = include_str!("fixtures/status_list.json");
    let a = factory.create_status_list(RawResponse::from_body(StatusCode::OK, body));
    let b = factory.create_status_list(RawResponse::from_body(StatusCode::NON_AUTHORITATIVE_INFORMATION, body));
    assert_eq!(a, b);
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Insert(usize, i32),
    Remove(usize),
    Set(usize, i32),
    RemoveItem(i32),
    RetainAll(Vec<i32>),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Remove),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => (-3i32..3).prop_map(Op::RemoveItem),
        1 => prop::collection::vec(-3i32..3, 0..4).prop_map(Op::RetainAll),
        1 => Just(Op::Clear),
    ]
}

fn int_list(items: Vec<i32>) -> DeferredList<i32> {
    Deferred::from_fn(
        ObjectKind::Custom("ints"),
        RawResponse::from_body(StatusCode::OK, ""),
        move |_: &RawResponse| Ok(ResponseList::new(items.clone())),
    )
}

proptest! {
    // Property: any sequence of edits leaves the proxy equal to the same edits on a Vec.
    #[test]
    fn prop_proxy_matches_vec_model(
        initial in prop::collection::vec(-3i32..3, 0..8),
        ops in prop::collection::vec(op(), 0..24),
    ) {
        let mut model = initial.clone();
        let mut list = int_list(initial);

        for op in ops {
            match op {
                Op::Push(v) => {
                    model.push(v);
                    list.push(v);
                }
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    model.insert(i, v);
                    list.insert(i, v);
                }
                Op::Remove(i) if !model.is_empty() => {
                    let i = i % model.len();
                    prop_assert_eq!(model.remove(i), list.remove(i));
                }
                Op::Set(i, v) if !model.is_empty() => {
                    let i = i % model.len();
                    let old = std::mem::replace(&mut model[i], v);
                    prop_assert_eq!(old, list.set(i, v));
                }
                Op::RemoveItem(v) => {
                    let expected = match model.iter().position(|x| *x == v) {
                        Some(i) => {
                            model.remove(i);
                            true
                        }
                        None => false,
                    };
                    prop_assert_eq!(expected, list.remove_item(&v));
                }
                Op::RetainAll(keep) => {
                    let before = model.len();
                    model.retain(|x| keep.contains(x));
                    prop_assert_eq!(before != model.len(), list.retain_all(&keep));
                }
                Op::Clear => {
                    model.clear();
                    list.clear();
                }
                Op::Remove(_) | Op::Set(..) => {}
            }
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(list.to_vec(), model);
    }
}
