//! Integration tests for Telegram handlers using teloxide_tests
//!
//! These tests simulate real Telegram interactions without hitting the API,
//! driving the actual dispatcher schema against a temporary SQLite database.
//! Run with: cargo test --test handlers_integration_test

use serial_test::serial;
use std::sync::Arc;
use teloxide_tests::{MockBot, MockCallbackQuery, MockMessageText};
use tempfile::TempDir;

use earlybird::core::config::Config;
use earlybird::storage::{create_pool, get_connection};
use earlybird::telegram::{schema, HandlerDeps, Messages};

/// Creates test dependencies backed by a SQLite database in a temp dir.
///
/// The guide file path points inside the temp dir and does not exist, so
/// successful registrations exercise the textual fallback branch.
fn create_test_deps() -> (TempDir, HandlerDeps) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("contacts.sqlite");
    let guide_path = dir.path().join("guide.pdf");

    let db_pool = Arc::new(create_pool(db_path.to_str().unwrap()).expect("Failed to create test database"));

    let config = Arc::new(Config {
        bot_token: "123456:TEST".to_string(),
        database_path: db_path.to_string_lossy().into_owned(),
        log_file_path: dir.path().join("app.log").to_string_lossy().into_owned(),
        guide_file_path: guide_path.to_string_lossy().into_owned(),
        bot_api_url: None,
    });

    let deps = HandlerDeps::new(db_pool, config, Arc::new(Messages::default()));
    (dir, deps)
}

/// Counts stored rows for a user directly in SQLite.
fn row_count(deps: &HandlerDeps) -> i64 {
    let conn = get_connection(&deps.db_pool).expect("Failed to get connection");
    conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))
        .expect("Failed to count contacts")
}

#[tokio::test]
#[serial]
async fn test_start_command_sends_welcome_with_button() {
    let (_dir, deps) = create_test_deps();
    let messages = deps.messages.clone();

    let message = MockMessageText::new().text("/start");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    let sent_messages = &responses.sent_messages;

    assert_eq!(sent_messages.len(), 1, "Should send exactly one message");

    let msg = &sent_messages[0];
    let text = msg.text().expect("Message should have text");
    assert_eq!(text, messages.welcome);

    let markup = msg.reply_markup().expect("Should have inline keyboard");
    let keyboard = &markup.inline_keyboard;
    assert_eq!(keyboard.len(), 1, "Should have one row");
    assert_eq!(keyboard[0][0].text, messages.send_telegram_button);
}

#[tokio::test]
#[serial]
async fn test_invalid_contact_is_reprompted_without_store_write() {
    let (_dir, deps) = create_test_deps();
    let messages = deps.messages.clone();
    let deps_check = deps.clone();

    let message = MockMessageText::new().text("not-a-contact");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 1);
    assert_eq!(
        responses.sent_messages[0].text().unwrap(),
        messages.invalid_format,
        "Should re-prompt with the format example"
    );

    assert_eq!(row_count(&deps_check), 0, "No store write must occur");
}

#[tokio::test]
#[serial]
async fn test_valid_email_is_stored_and_thanked() {
    let (_dir, deps) = create_test_deps();
    let messages = deps.messages.clone();
    let deps_check = deps.clone();

    let message = MockMessageText::new().text("alice@example.com");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    let sent = &responses.sent_messages;

    // Thank-you followed by the guide fallback (guide file is absent in tests)
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].text().unwrap(), messages.thanks);
    assert_eq!(sent[1].text().unwrap(), messages.guide_fallback);

    assert_eq!(row_count(&deps_check), 1, "Exactly one record stored");
}

#[tokio::test]
#[serial]
async fn test_valid_handle_is_stored_and_thanked() {
    let (_dir, deps) = create_test_deps();
    let messages = deps.messages.clone();
    let deps_check = deps.clone();

    let message = MockMessageText::new().text("@bob_99");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages[0].text().unwrap(), messages.thanks);
    assert_eq!(row_count(&deps_check), 1);
}

#[tokio::test]
#[serial]
async fn test_resubmission_yields_duplicate_notice_and_no_new_row() {
    let (_dir, deps) = create_test_deps();
    let messages = deps.messages.clone();
    let deps_check = deps.clone();

    let submissions = vec![
        MockMessageText::new().text("@bob_99"),
        MockMessageText::new().text("@bob_99"),
    ];
    let mut bot = MockBot::new(submissions, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    let sent = &responses.sent_messages;

    // First submission: thanks + fallback; second: duplicate notice only
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].text().unwrap(), messages.thanks);
    assert_eq!(sent[1].text().unwrap(), messages.guide_fallback);
    assert_eq!(sent[2].text().unwrap(), messages.already_registered);

    assert_eq!(row_count(&deps_check), 1, "Row count unchanged by resubmission");
}

#[tokio::test]
#[serial]
async fn test_surrounding_whitespace_is_trimmed() {
    let (_dir, deps) = create_test_deps();
    let messages = deps.messages.clone();
    let deps_check = deps.clone();

    let message = MockMessageText::new().text("  alice@example.com  ");
    let mut bot = MockBot::new(message, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages[0].text().unwrap(), messages.thanks);
    assert_eq!(row_count(&deps_check), 1);
}

#[tokio::test]
#[serial]
async fn test_send_telegram_callback_is_answered() {
    let (_dir, deps) = create_test_deps();

    let callback = MockCallbackQuery::new().data("send_telegram");
    let mut bot = MockBot::new(callback, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert!(
        !responses.answered_callback_queries.is_empty(),
        "Should answer callback query"
    );
}

#[tokio::test]
#[serial]
async fn test_unrelated_callback_is_ignored() {
    let (_dir, deps) = create_test_deps();
    let deps_check = deps.clone();

    let callback = MockCallbackQuery::new().data("menu:something_else");
    let mut bot = MockBot::new(callback, schema(deps));

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert!(responses.sent_messages.is_empty());
    assert_eq!(row_count(&deps_check), 0);
}
