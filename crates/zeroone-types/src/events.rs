use serde::{Deserialize, Serialize};

use crate::models::CurrentUser;

/// Events published by the session container to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// A user signed in (or a stored token was restored)
    SignedIn { user: CurrentUser },

    /// The session was cleared
    SignedOut,

    /// The unread notification count changed
    UnreadCount { count: u64 },
}
