use serde::{Deserialize, Serialize};
use shared::{
    domain::UserId,
    protocol::{UserRecord, UserUpdate},
};

/// One step of the roster's lifecycle. Unknown action kinds decode to
/// `Unsupported`, which leaves the roster untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RosterAction {
    Set(Vec<UserRecord>),
    Add(UserRecord),
    Edit { id: UserId, updates: UserUpdate },
    Delete { id: UserId },
    #[serde(other)]
    Unsupported,
}

/// Pure reduction of the roster by one action. No side effects, no
/// failure conditions; ids are trusted to be unique upstream.
pub fn reduce(mut roster: Vec<UserRecord>, action: RosterAction) -> Vec<UserRecord> {
    match action {
        RosterAction::Set(users) => users,
        RosterAction::Add(user) => {
            roster.push(user);
            roster
        }
        RosterAction::Edit { id, updates } => {
            for user in roster.iter_mut() {
                if user.id == id {
                    updates.apply_to(user);
                }
            }
            roster
        }
        RosterAction::Delete { id } => {
            roster.retain(|user| user.id != id);
            roster
        }
        RosterAction::Unsupported => roster,
    }
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
