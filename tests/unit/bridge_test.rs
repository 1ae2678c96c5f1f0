//! Unit tests for the cross-context mailbox.

use serde_json::json;
use zoomkeeper::bridge::mailbox;

#[tokio::test]
async fn test_posted_message_is_delivered() {
    let (outbox, mut inbox) = mailbox();
    outbox.post(json!({"page": "file:///docs/index.html"}));

    let msg = inbox.recv().await.expect("delivered");
    assert_eq!(msg["page"], "file:///docs/index.html");
}

#[tokio::test]
async fn test_each_send_delivered_at_most_once() {
    let (outbox, mut inbox) = mailbox();
    outbox.post(json!({"scrollY": 1}));
    outbox.post(json!({"scrollY": 2}));

    assert!(inbox.try_recv().is_some());
    assert!(inbox.try_recv().is_some());
    assert!(inbox.try_recv().is_none());
}

#[test]
fn test_post_to_torn_down_peer_is_silently_lost() {
    let (outbox, inbox) = mailbox();
    drop(inbox);

    // No panic, no error surface: the message is simply gone.
    outbox.post(json!({"restoreScrollY": 450}));
}

#[test]
fn test_try_recv_on_empty_mailbox() {
    let (_outbox, mut inbox) = mailbox();
    assert!(inbox.try_recv().is_none());
}

#[tokio::test]
async fn test_recv_returns_none_after_sender_dropped() {
    let (outbox, mut inbox) = mailbox();
    outbox.post(json!({"scrollY": 7}));
    drop(outbox);

    assert!(inbox.recv().await.is_some());
    assert!(inbox.recv().await.is_none());
}
