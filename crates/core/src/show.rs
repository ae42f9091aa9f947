//! The `Show` record and the request bodies that create and modify it.
//!
//! Request bodies arrive as [`ShowFields`], where every field is optional.
//! Creation requires both fields; [`ShowFields::into_new_show`] reports
//! which ones are missing as a [`MissingFields`] value so the HTTP layer
//! can pick the right message. Updates accept any subset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::DbId;

/// Name of the record-store collection holding shows.
pub const SHOWS_COLLECTION: &str = "shows";

/// A stored show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: DbId,
    pub name: String,
    pub episodes_seen: i64,
}

/// Request body for `POST /shows` and `POST /shows/{id}`.
///
/// A key that is absent or explicitly `null` deserializes to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowFields {
    pub name: Option<String>,
    pub episodes_seen: Option<i64>,
}

/// A fully specified show, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub name: String,
    pub episodes_seen: i64,
}

/// A partial update. `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes_seen: Option<i64>,
}

/// Which required fields a create request left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFields {
    Both,
    Name,
    EpisodesSeen,
}

impl MissingFields {
    /// Client-facing message for this validation failure.
    pub fn message(self) -> &'static str {
        match self {
            MissingFields::Both => "Parameters missing",
            MissingFields::Name => "Name parameter missing",
            MissingFields::EpisodesSeen => "Episodes seen parameter missing",
        }
    }
}

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl ShowFields {
    /// Validate a create request. Both fields must be present.
    pub fn into_new_show(self) -> Result<NewShow, MissingFields> {
        match (self.name, self.episodes_seen) {
            (Some(name), Some(episodes_seen)) => Ok(NewShow {
                name,
                episodes_seen,
            }),
            (None, None) => Err(MissingFields::Both),
            (None, Some(_)) => Err(MissingFields::Name),
            (Some(_), None) => Err(MissingFields::EpisodesSeen),
        }
    }

    /// Keep only the fields the client actually sent.
    pub fn into_update(self) -> ShowUpdate {
        ShowUpdate {
            name: self.name,
            episodes_seen: self.episodes_seen,
        }
    }
}

impl NewShow {
    /// Record-store field mapping (without `id`; the store assigns it).
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::from(self.name.clone()));
        fields.insert("episodes_seen".into(), Value::from(self.episodes_seen));
        fields
    }
}

impl ShowUpdate {
    /// Record-store partial mapping containing only the keys to replace.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(name) = &self.name {
            fields.insert("name".into(), Value::from(name.clone()));
        }
        if let Some(episodes_seen) = self.episodes_seen {
            fields.insert("episodes_seen".into(), Value::from(episodes_seen));
        }
        fields
    }
}

/// Shows with at least `min_episodes` episodes seen, in their original order.
pub fn filter_min_episodes(shows: Vec<Show>, min_episodes: i64) -> Vec<Show> {
    shows
        .into_iter()
        .filter(|show| show.episodes_seen >= min_episodes)
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn fields(body: Value) -> ShowFields {
        serde_json::from_value(body).unwrap()
    }

    fn show(id: DbId, name: &str, episodes_seen: i64) -> Show {
        Show {
            id,
            name: name.to_string(),
            episodes_seen,
        }
    }

    #[test]
    fn empty_body_is_missing_both() {
        assert_matches!(fields(json!({})).into_new_show(), Err(MissingFields::Both));
    }

    #[test]
    fn name_only_is_missing_episodes() {
        assert_matches!(
            fields(json!({"name": "X"})).into_new_show(),
            Err(MissingFields::EpisodesSeen)
        );
    }

    #[test]
    fn episodes_only_is_missing_name() {
        assert_matches!(
            fields(json!({"episodes_seen": 1})).into_new_show(),
            Err(MissingFields::Name)
        );
    }

    #[test]
    fn null_counts_as_missing() {
        assert_matches!(
            fields(json!({"name": null, "episodes_seen": 3})).into_new_show(),
            Err(MissingFields::Name)
        );
    }

    #[test]
    fn complete_body_validates() {
        let new_show = fields(json!({"name": "X", "episodes_seen": 1}))
            .into_new_show()
            .unwrap();
        assert_eq!(
            new_show,
            NewShow {
                name: "X".into(),
                episodes_seen: 1
            }
        );
    }

    #[test]
    fn missing_field_messages() {
        assert_eq!(MissingFields::Both.message(), "Parameters missing");
        assert_eq!(MissingFields::Name.message(), "Name parameter missing");
        assert_eq!(
            MissingFields::EpisodesSeen.to_string(),
            "Episodes seen parameter missing"
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let update = fields(json!({"episodes_seen": 5, "id": 99, "rating": 4})).into_update();
        assert_eq!(update.to_fields(), json!({"episodes_seen": 5}).as_object().cloned().unwrap());
    }

    #[test]
    fn update_keeps_only_present_keys() {
        let update = fields(json!({"name": "Renamed"})).into_update();
        assert_eq!(update.name.as_deref(), Some("Renamed"));
        assert!(update.episodes_seen.is_none());
        assert_eq!(update.to_fields().len(), 1);
        assert!(fields(json!({})).into_update().to_fields().is_empty());
    }

    #[test]
    fn filter_preserves_order() {
        let shows = vec![show(1, "a", 5), show(2, "b", 1), show(3, "c", 7), show(4, "d", 3)];
        let ids: Vec<DbId> = filter_min_episodes(shows, 3).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn filter_can_return_nothing() {
        assert!(filter_min_episodes(vec![show(1, "a", 2)], 10).is_empty());
    }
}
