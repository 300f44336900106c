use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Graduated permission attached to an album share.
///
/// The variants are ordered weakest to strongest, so `add` implies
/// `comment` implies `view` through the derived `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SharePermission {
    View,
    Comment,
    Add,
}

impl fmt::Display for SharePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharePermission::View => write!(f, "view"),
            SharePermission::Comment => write!(f, "comment"),
            SharePermission::Add => write!(f, "add"),
        }
    }
}

/// Represents one user's grant on an album.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub id: i64,
    pub album_id: i64,
    pub user_id: i64,
    pub permission: SharePermission,
    pub created_at: DateTime<Utc>,
}

/// Share row joined with the grantee's name and email, for share management.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareWithUser {
    pub id: i64,
    pub album_id: i64,
    pub user_id: i64,
    pub permission: SharePermission,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_are_ordered_weakest_to_strongest() {
        assert!(SharePermission::View < SharePermission::Comment);
        assert!(SharePermission::Comment < SharePermission::Add);
        assert!(SharePermission::Add >= SharePermission::Comment);
    }

    #[test]
    fn permission_serializes_lowercase() -> color_eyre::Result<()> {
        assert_eq!(serde_json::to_string(&SharePermission::Add)?, "\"add\"");
        let parsed: SharePermission = serde_json::from_str("\"comment\"")?;
        assert_eq!(parsed, SharePermission::Comment);
        Ok(())
    }
}
