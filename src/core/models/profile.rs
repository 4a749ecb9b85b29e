//! User profile model
//!
//! The anonymous identity of the signed-in user. The serialized shape is the
//! JSON object stored under `<namespace>User`, so field names are camelCase
//! and optional fields are simply left out when unset.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::post::{Author, DEFAULT_AVATAR};

/// Avatars a user may pick at signup or when editing their profile
pub const AVATARS: [&str; 16] = [
    "😎", "🦉", "👑", "🔍", "🦊", "🐱", "🐼", "🦁", "🐯", "🦄", "🐲", "🐺", "🦅", "🦋", "🐢", "🐬",
];

/// Whether a glyph is one of the selectable avatars
#[must_use]
pub fn is_known_avatar(avatar: &str) -> bool {
    AVATARS.contains(&avatar)
}

/// A signed-in user's anonymous profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User id, e.g. `user1702000000000`
    pub id: String,
    /// Anonymous display name
    pub anonymous_name: String,
    /// College, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    /// Session flag
    #[serde(default)]
    pub is_logged_in: bool,
    /// Avatar glyph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Accumulated points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
    /// When the username last changed
    #[serde(default, with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub last_username_change: Option<DateTime<Utc>>,
    /// Verified-gossiper badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_gossiper: Option<bool>,
    /// Signup date
    #[serde(default, with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub join_date: Option<DateTime<Utc>>,
    /// Hours spent in the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

impl UserProfile {
    /// Create a bare profile with only the required fields
    #[must_use]
    pub fn new(id: impl Into<String>, anonymous_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            anonymous_name: anonymous_name.into(),
            college: None,
            is_logged_in: true,
            avatar: None,
            points: None,
            last_username_change: None,
            verified_gossiper: None,
            join_date: None,
            time_spent: None,
        }
    }

    /// Points, counting an unset total as zero
    #[must_use]
    pub fn points(&self) -> u64 {
        self.points.unwrap_or(0)
    }

    /// Add points to the running total
    pub fn award_points(&mut self, amount: u64) {
        self.points = Some(self.points().saturating_add(amount));
    }

    /// Avatar, falling back to the default glyph
    #[must_use]
    pub fn avatar(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }

    /// Whether the verified-gossiper badge is set
    #[must_use]
    pub fn is_verified_gossiper(&self) -> bool {
        self.verified_gossiper.unwrap_or(false)
    }

    /// The identity this user's posts are shown under
    #[must_use]
    pub fn as_author(&self) -> Author {
        Author::new(&self.id, &self.anonymous_name, self.avatar())
    }

    /// Calendar months between the last rename and `now`
    ///
    /// Day of month is ignored: Dec 31 to Jan 1 counts as one month.
    #[must_use]
    pub fn months_since_username_change(&self, now: DateTime<Utc>) -> Option<i32> {
        self.last_username_change.map(|last| month_delta(last, now))
    }

    /// Whether the username may be changed at `now`
    #[must_use]
    pub fn can_change_username(&self, now: DateTime<Utc>) -> bool {
        self.months_since_username_change(now).is_none_or(|months| months >= 1)
    }
}

/// Calendar month difference `to - from`
#[must_use]
pub fn month_delta(from: DateTime<Utc>, to: DateTime<Utc>) -> i32 {
    let years = to.year() - from.year();
    let months = i32::try_from(to.month()).unwrap_or(0) - i32::try_from(from.month()).unwrap_or(0);
    years * 12 + months
}

/// Parse a stored date, either RFC 3339 or a bare `YYYY-MM-DD`
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

mod flexible_date {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| super::parse_date(&s).ok_or_else(|| D::Error::custom(format!("invalid date: {s}"))))
            .transpose()
    }
}
