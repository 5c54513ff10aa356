use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ids::CommunityId;

/// Name of the community every user owns privately.
///
/// Matching is exact and case-sensitive.
pub const RESERVED_PERSONAL_COMMUNITY_NAME: &str = "Personal";

/// A study group owning zero or more decks.
///
/// Communities are created and destroyed by the server; the client only reads
/// them, so there is no validation on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    id: CommunityId,
    #[serde(rename = "community_name")]
    name: String,
    description: String,
    #[serde(rename = "date_creation", default, deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(rename = "user_count")]
    member_count: u32,
    card_count: u32,
}

impl Community {
    #[must_use]
    pub fn new(
        id: CommunityId,
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
        member_count: u32,
        card_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            created_at: Some(created_at),
            member_count,
            card_count,
        }
    }

    #[must_use]
    pub fn id(&self) -> CommunityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `None` when the server sent no RFC 3339 timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub fn member_count(&self) -> u32 {
        self.member_count
    }

    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    /// True when this is the user's private community.
    #[must_use]
    pub fn is_personal(&self) -> bool {
        self.name == RESERVED_PERSONAL_COMMUNITY_NAME
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Other(IgnoredAny),
}

/// Unreadable creation dates are dropped rather than failing the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(raw) => DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        RawTimestamp::Other(_) => None,
    })
}
