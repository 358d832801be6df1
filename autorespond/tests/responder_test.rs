//! Integration tests for [`autorespond::AutoResponder`].
//!
//! Covers the dispatch rule (self-authored, gate, exact case-insensitive match), the rendered
//! command outcomes, and the full set → disable → enable → remove lifecycle.

use autorespond::{AutoResponder, AutorespondCommand, GateTransition, Tone};
use tempfile::TempDir;

async fn temp_responder() -> (TempDir, AutoResponder) {
    let dir = TempDir::new().expect("create temp dir");
    let responder = AutoResponder::open(dir.path().join("database").join("automessage.json"))
        .await
        .expect("open responder");
    (dir, responder)
}

fn set(trigger: &str, response: &str) -> AutorespondCommand {
    AutorespondCommand::Set {
        trigger: trigger.to_string(),
        response: response.to_string(),
    }
}

/// **Test: the documented lifecycle scenario end to end.**
///
/// empty → set("hello","hi!") → get("HELLO") is "hi!" → disable → no reply → enable → reply →
/// remove("hello") → get("hello") is nothing.
#[tokio::test]
async fn test_lifecycle_scenario() {
    let (_dir, responder) = temp_responder().await;
    assert!(responder.list().await.is_empty());

    responder.set("hello", "hi!").await.unwrap();
    assert_eq!(responder.get("HELLO").await, Some("hi!".to_string()));

    assert_eq!(responder.disable(), GateTransition::Changed);
    assert_eq!(responder.handle_message(false, "hello").await, None);

    assert_eq!(responder.enable(), GateTransition::Changed);
    assert_eq!(
        responder.handle_message(false, "hello").await,
        Some("hi!".to_string())
    );

    responder.remove("hello").await.unwrap();
    assert_eq!(responder.get("hello").await, None);
}

/// **Test: self-authored messages never get a reply, in either gate state.**
#[tokio::test]
async fn test_self_authored_never_answered() {
    let (_dir, responder) = temp_responder().await;
    responder.set("hello", "hi!").await.unwrap();

    assert_eq!(responder.handle_message(true, "hello").await, None);
    responder.disable();
    assert_eq!(responder.handle_message(true, "hello").await, None);
    responder.enable();
    assert_eq!(responder.handle_message(true, "hello").await, None);
}

/// **Test: dispatch returns the stored response unmodified for any casing, and nothing for partial matches.**
#[tokio::test]
async fn test_dispatch_matching() {
    let (_dir, responder) = temp_responder().await;
    responder.set("Good Night", "Sleep WELL").await.unwrap();

    assert_eq!(
        responder.handle_message(false, "GOOD NIGHT").await,
        Some("Sleep WELL".to_string())
    );
    assert_eq!(responder.handle_message(false, "good night!").await, None);
    assert_eq!(responder.handle_message(false, "night").await, None);
}

/// **Test: the gate is not persisted; a freshly opened responder is enabled.**
#[tokio::test]
async fn test_gate_resets_on_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("automessage.json");

    let first = AutoResponder::open(&path).await.unwrap();
    first.set("hello", "hi!").await.unwrap();
    first.disable();
    drop(first);

    let second = AutoResponder::open(&path).await.unwrap();
    assert!(second.gate().is_enabled());
    assert_eq!(
        second.handle_message(false, "hello").await,
        Some("hi!".to_string())
    );
}

/// **Test: set command renders the trigger as typed and the response verbatim.**
#[tokio::test]
async fn test_execute_set() {
    let (_dir, responder) = temp_responder().await;

    let reply = responder.execute(set("Hello", "Hi there")).await.unwrap();

    assert_eq!(reply.tone, Tone::Success);
    assert_eq!(
        reply.render(),
        "✅ Auto-Respond Set\nTrigger: `Hello`\nResponse: Hi there"
    );
}

/// **Test: show distinguishes the empty store from a listing, which follows insertion order.**
#[tokio::test]
async fn test_execute_show() {
    let (_dir, responder) = temp_responder().await;

    let empty = responder.execute(AutorespondCommand::Show).await.unwrap();
    assert!(empty.fields.is_empty());
    assert_eq!(
        empty.description.as_deref(),
        Some("No auto-respond messages set.")
    );

    responder.execute(set("Ping", "pong")).await.unwrap();
    responder.execute(set("hello", "hi!")).await.unwrap();

    let listing = responder.execute(AutorespondCommand::Show).await.unwrap();
    assert_eq!(listing.tone, Tone::Info);
    assert_eq!(listing.description, None);
    assert_eq!(
        listing.render(),
        "ℹ️ Auto-Respond Messages\nping: pong\nhello: hi!"
    );
}

/// **Test: removing a missing trigger is an error reply and leaves the store untouched.**
#[tokio::test]
async fn test_execute_remove() {
    let (_dir, responder) = temp_responder().await;
    responder.execute(set("hello", "hi!")).await.unwrap();
    let before = responder.list().await;

    let missing = responder
        .execute(AutorespondCommand::Remove {
            trigger: "bye".to_string(),
        })
        .await
        .unwrap();
    assert!(missing.is_error());
    assert_eq!(
        missing.description.as_deref(),
        Some("That auto-respond message does not exist.")
    );
    assert_eq!(responder.list().await, before);

    let removed = responder
        .execute(AutorespondCommand::Remove {
            trigger: "HELLO".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(removed.tone, Tone::Success);
    assert_eq!(
        removed.description.as_deref(),
        Some("Auto-respond message 'HELLO' removed.")
    );
    assert!(responder.list().await.is_empty());
}

/// **Test: enable/disable report redundant requests differently from real transitions.**
#[tokio::test]
async fn test_execute_enable_disable() {
    let (_dir, responder) = temp_responder().await;

    let already_enabled = responder.execute(AutorespondCommand::Enable).await.unwrap();
    assert_eq!(already_enabled.tone, Tone::Notice);
    assert_eq!(
        already_enabled.description.as_deref(),
        Some("Auto-respond messages are already enabled. To disable, use /autorespond disable.")
    );

    let disabled = responder.execute(AutorespondCommand::Disable).await.unwrap();
    assert_eq!(disabled.title, "Auto-Respond Disabled");
    assert!(!responder.gate().is_enabled());

    let already_disabled = responder.execute(AutorespondCommand::Disable).await.unwrap();
    assert!(already_disabled.is_error());
    assert_eq!(
        already_disabled.description.as_deref(),
        Some("Auto-respond messages are already disabled.")
    );

    let enabled = responder.execute(AutorespondCommand::Enable).await.unwrap();
    assert_eq!(enabled.title, "Auto-Respond Enabled");
    assert!(responder.gate().is_enabled());
}

/// **Test: storage failures other than not-found are returned to the caller.**
#[tokio::test]
async fn test_execute_surfaces_storage_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("automessage.json");
    let responder = AutoResponder::open(&path).await.unwrap();
    responder.set("hello", "hi!").await.unwrap();
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let err = responder
        .execute(AutorespondCommand::Remove {
            trigger: "hello".to_string(),
        })
        .await
        .unwrap_err();

    assert!(!err.is_not_found());
    assert_eq!(responder.get("hello").await, Some("hi!".to_string()));
}
