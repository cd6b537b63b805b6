//! Backend commands queued from UI to backend worker.

use shared::{
    domain::UserId,
    protocol::{UserDraft, UserUpdate},
};

pub enum BackendCommand {
    ListUsers,
    CreateUser { draft: UserDraft },
    UpdateUser { user_id: UserId, changes: UserUpdate },
    DeleteUser { user_id: UserId },
}
