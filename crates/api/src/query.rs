//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /shows` (`?minEpisodes=`).
///
/// Kept as a raw string so a non-integer value can be answered with an
/// envelope rather than a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ShowListParams {
    #[serde(rename = "minEpisodes")]
    pub min_episodes: Option<String>,
}
