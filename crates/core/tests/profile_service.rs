//! Profile service integration tests against the in-memory store.

mod support;

use std::sync::Arc;

use buidlmatch_core::{ProfileService, ProfileStore};
use buidlmatch_domain::{BuidlMatchError, ProfileDraft, Role};
use support::InMemoryProfileStore;

fn complete_draft() -> ProfileDraft {
    ProfileDraft {
        name: "Ada Lovelace".into(),
        role: Some(Role::Developer),
        bio: "First programmer, looking for a hardware co-founder".into(),
        skills: vec!["Rust".into(), "ZK Proofs".into()],
        ..ProfileDraft::default()
    }
}

fn service() -> (ProfileService, Arc<InMemoryProfileStore>) {
    let store = Arc::new(InMemoryProfileStore::new());
    let service = ProfileService::new(Arc::clone(&store) as Arc<dyn ProfileStore>);
    (service, store)
}

#[tokio::test(flavor = "multi_thread")]
async fn creating_a_profile_persists_it_and_marks_current_user() {
    let (service, store) = service();

    let profile = service.create_profile(complete_draft()).await.unwrap();

    assert!(profile.is_current_user);
    assert_eq!(store.persisted_profiles(), vec![profile.clone()]);
    assert_eq!(store.current_user(), Some(profile));
}

#[tokio::test(flavor = "multi_thread")]
async fn identifier_derives_from_creation_time_millis() {
    let (service, _store) = service();
    let before = chrono::Utc::now().timestamp_millis();

    let profile = service.create_profile(complete_draft()).await.unwrap();

    let after = chrono::Utc::now().timestamp_millis();
    assert!(profile.id >= before && profile.id <= after);
}

#[tokio::test(flavor = "multi_thread")]
async fn incomplete_draft_is_rejected_at_the_boundary() {
    let (service, store) = service();

    let mut draft = complete_draft();
    draft.skills.clear();

    let err = service.create_profile(draft).await.unwrap_err();
    assert!(matches!(err, BuidlMatchError::InvalidInput(_)));
    assert!(store.persisted_profiles().is_empty());
    assert!(store.current_user().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn matches_are_read_straight_from_the_store() {
    let (service, store) = service();
    assert!(service.matches().await.unwrap().is_empty());

    let profile = service.create_profile(complete_draft()).await.unwrap();
    store.save_matches(vec![profile.clone()]).await.unwrap();

    assert_eq!(service.matches().await.unwrap(), vec![profile]);
}
