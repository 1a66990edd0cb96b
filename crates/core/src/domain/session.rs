use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
}

/// The persisted authentication blob. The token is an openly mock value;
/// nothing verifies it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub profile: UserProfile,
    pub token: String,
    pub signed_in_at: DateTime<Utc>,
}
