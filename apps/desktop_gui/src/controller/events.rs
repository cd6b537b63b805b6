//! Backend events consumed by the user directory UI.

use shared::{
    domain::UserId,
    protocol::{UserRecord, UserUpdate},
};

/// Worker-to-UI notifications. Success events carry exactly what the UI
/// replays into the roster: a created record comes back with the
/// server-assigned id, an update echoes the request's own partial payload.
#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    BackendStartupFailed(String),
    RosterLoaded(Vec<UserRecord>),
    UserCreated(UserRecord),
    UserUpdated { user_id: UserId, changes: UserUpdate },
    UserDeleted(UserId),
}
