extern crate foo_rum_frontend;

use std::cell::RefCell;
use std::sync::Once;

use foo_rum_frontend::clock::FixedClock;
use foo_rum_frontend::local_store::LocalStore;
use foo_rum_frontend::models::{Post, User};
use foo_rum_frontend::storage::MemoryStorage;
use log::{Level, LevelFilter, Log, Metadata, Record};

const NOW: u64 = 1_700_000_000_000;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

// Records are kept per test thread so parallel tests don't see each other.
struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INIT: Once = Once::new();

fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

fn errors() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

fn post() -> Post {
    Post {
        id: "100".into(),
        author: "Ada".into(),
        timestamp: "now".into(),
        content: "hello".into(),
        emoji: "😊".into(),
        likes: 0,
        comments: 0,
        shares: 0,
        created_at: NOW,
    }
}

fn user() -> User {
    User {
        id: "42".into(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "secret1".into(),
        avatar: None,
    }
}

#[test]
fn quota_rejected_save_post_is_logged() {
    capture_logs();
    let store = LocalStore::with_clock(MemoryStorage::with_quota(16), FixedClock(NOW));

    store.save_post(post());

    let errors = errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to save post:"));
    assert!(errors[0].contains("quota exceeded"));
}

#[test]
fn failed_session_clear_is_logged() {
    capture_logs();
    let session = serde_json::to_string(&user()).unwrap();
    let storage = MemoryStorage::read_only(&[("foo-rum-current-user", session.as_str())]);
    let store = LocalStore::with_clock(&storage, FixedClock(NOW));

    store.set_current_user(None);

    let errors = errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to set current user:"));
    // the session survives in storage
    assert_eq!(store.get_current_user(), Some(user()));
}

#[test]
fn every_failing_write_reports_its_operation() {
    capture_logs();
    let store = LocalStore::with_clock(MemoryStorage::read_only(&[]), FixedClock(NOW));

    store.save_post(post());
    store.update_post("1", Default::default());
    store.save_user(user());
    store.set_current_user(Some(&user()));

    let errors = errors();
    let prefixes = [
        "Failed to save post:",
        "Failed to update post:",
        "Failed to save user:",
        "Failed to set current user:",
    ];
    assert_eq!(errors.len(), prefixes.len());
    for (message, prefix) in errors.iter().zip(prefixes) {
        assert!(message.starts_with(prefix), "{message}");
    }
}

#[test]
fn successful_writes_log_no_errors() {
    capture_logs();
    let store = LocalStore::with_clock(MemoryStorage::new(), FixedClock(NOW));

    store.save_post(post());
    store.set_current_user(Some(&user()));
    store.set_current_user(None);

    assert!(errors().is_empty());
}
