use super::*;
use crate::game::session::{Mode, Status};

#[tokio::test]
async fn new_state_has_no_rooms() {
    let state = AppState::new();
    assert!(state.rooms.read().await.is_empty());
}

#[tokio::test]
async fn default_equals_new() {
    let a = AppState::new();
    let b = AppState::default();
    assert_eq!(a.rooms.read().await.len(), b.rooms.read().await.len());
}

#[tokio::test]
async fn seed_room_inserts_waiting_session() {
    let state = test_helpers::test_app_state();
    let session = test_helpers::seed_room(&state, 42, Mode::HumanVsHuman).await;
    assert_eq!(state.rooms.read().await.len(), 1);
    assert_eq!(session.lock().await.status(), Status::WaitingForPlayers);
}

#[tokio::test]
async fn clones_share_the_room_map() {
    let state = AppState::new();
    let clone = state.clone();
    test_helpers::seed_room(&state, 7, Mode::HumanVsAi).await;
    assert_eq!(clone.rooms.read().await.len(), 1);
}
