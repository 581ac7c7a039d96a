//! Integration tests for the matches page command surface

mod support;

use buidlmatch_app::commands;
use buidlmatch_core::SwipeDirection;

use crate::support::test_context;

#[tokio::test(flavor = "multi_thread")]
async fn matches_start_empty() {
    let test = test_context().await;

    let matches = commands::get_matches(&test.ctx).await.expect("load matches");
    assert!(matches.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn accepted_candidates_appear_oldest_first() {
    let test = test_context().await;

    commands::swipe(&test.ctx, SwipeDirection::Accept).await;
    commands::swipe(&test.ctx, SwipeDirection::Reject).await;
    commands::swipe(&test.ctx, SwipeDirection::Accept).await;

    let matches = commands::get_matches(&test.ctx).await.expect("load matches");
    let names: Vec<&str> = matches.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Chen", "Marcus Johnson"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn contact_links_cover_present_handles_only() {
    let test = test_context().await;

    // Sarah Kim has no GitHub handle
    commands::swipe(&test.ctx, SwipeDirection::Reject).await;
    let sarah = commands::swipe(&test.ctx, SwipeDirection::Accept).await.expect("accepted");

    let links = commands::contact_links(&sarah);
    assert!(links.github.is_none());
    assert_eq!(links.twitter.as_deref(), Some("https://twitter.com/sarahkim_web3"));
    assert_eq!(links.telegram.as_deref(), Some("https://t.me/sarahkim"));
    assert!(links.twitter_intent.starts_with("https://twitter.com/intent/tweet?text="));
    assert!(links.telegram_share.contains("t.me/share/url"));
    assert!(links.twitter_intent.contains("Sarah%20Kim"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_check_reports_wired_components() {
    let test = test_context().await;

    let status = commands::health_check(&test.ctx).await;
    assert!(status.is_healthy);
    assert_eq!(status.components.len(), 2);
    assert!(status.components.iter().all(|c| c.is_healthy));
}
