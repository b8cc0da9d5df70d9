use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use talentbridge_profile::notice::NoticeHost;
use talentbridge_profile::task::Scoped;
use tokio::time::sleep;

#[tokio::test]
async fn notice_clears_itself_after_the_ttl() {
    let notices = NoticeHost::new(Duration::from_millis(50));
    notices.show("Saved");

    assert_eq!(notices.current().as_deref(), Some("Saved"));

    sleep(Duration::from_millis(120)).await;
    assert_eq!(notices.current(), None);
}

#[tokio::test]
async fn new_notice_supersedes_the_previous_timer() {
    let notices = NoticeHost::new(Duration::from_millis(100));
    notices.show("first");

    // Shown late enough that the first timer would fire mid-display if it
    // were still alive.
    sleep(Duration::from_millis(60)).await;
    notices.show("second");

    sleep(Duration::from_millis(60)).await;
    assert_eq!(notices.current().as_deref(), Some("second"));

    sleep(Duration::from_millis(120)).await;
    assert_eq!(notices.current(), None);
}

#[tokio::test]
async fn notice_shown_as_the_previous_timer_expires_is_not_lost() {
    let notices = NoticeHost::new(Duration::from_millis(40));
    notices.show("first");

    // Land the second show right on the first timer's expiry, so the old
    // timer may already be awake when it is superseded.
    sleep(Duration::from_millis(40)).await;
    notices.show("second");

    sleep(Duration::from_millis(20)).await;
    assert_eq!(notices.current().as_deref(), Some("second"));
}

#[tokio::test]
async fn clear_cancels_the_pending_timer() {
    let notices = NoticeHost::new(Duration::from_millis(50));
    notices.show("Saved");
    notices.clear();

    assert_eq!(notices.current(), None);

    sleep(Duration::from_millis(120)).await;
    assert_eq!(notices.current(), None);
}

#[tokio::test]
async fn dropping_a_scoped_task_aborts_it() {
    let finished = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&finished);

    let task = Scoped::spawn(async move {
        sleep(Duration::from_millis(50)).await;
        flag.store(true, Ordering::SeqCst);
    });
    drop(task);

    sleep(Duration::from_millis(120)).await;
    assert!(!finished.load(Ordering::SeqCst));
}

#[tokio::test]
async fn scoped_join_returns_the_output() {
    let task = Scoped::spawn(async { 7 });
    assert_eq!(task.join().await, Some(7));
}
