//! Wire types for the match-analytics API, shared between the fetch glue in
//! the frontend and the trace builders in `viz`.
//!
//! Everything here lives for a single render call; nothing is persisted.

/// A player placed on the normalized 0-100 pitch plane.
///
/// The roster endpoint (`/api/players`) returns players without coordinates,
/// so `x`/`y` fall back to 0 when absent.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNode {
    pub player_id: String,
    pub name: String,
    #[serde(default)]
    pub shirt_no: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Aggregated passes between two players of the same response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PassLink {
    pub source: String,
    pub target: String,
    pub count: u32,
}

/// One completed pass into the penalty box.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPass {
    pub x: f64,
    pub y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// A shot attempt. `xg` is model output and may be missing entirely.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "xG", default)]
    pub xg: Option<f64>,
}

/// Response of `GET /api/pass-network?url=&team=`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PassNetwork {
    pub nodes: Vec<PlayerNode>,
    pub links: Vec<PassLink>,
}

/// Response of `GET /api/box-passes?url=&team=`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxPasses {
    pub passes: Vec<BoxPass>,
}

/// Response of `GET /api/shots?url=&team=`. Goals are a subset of all shot
/// attempts, delivered as their own list so they can be styled separately.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShotMap {
    pub shots: Vec<ShotEvent>,
    pub goals: Vec<ShotEvent>,
}

/// The slice of `GET /api/match?url=` consumed for team validation. The
/// endpoint returns more (league, season, ...) which is ignored here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchInfo {
    pub home: String,
    pub away: String,
}
