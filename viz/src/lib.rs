//! The visualization adapter: turns analytics JSON into render-ready trace
//! descriptors for a pitch-shaped 2D drawing surface.
//!
//! Every builder is a pure function of its input; nothing in this crate does
//! IO or keeps state between calls. Data-quality gaps (links pointing at
//! unknown players, missing xG values) degrade via defaults instead of
//! failing the whole render, with `tracing` events as the only evidence.

pub mod box_passes;
pub mod layout;
pub mod pass_network;
pub mod shot_map;

pub use layout::Layout;

/// Dark pitch palette, matching the page theme.
pub mod theme {
    pub const PAPER: &str = "#0f1115";
    pub const FONT: &str = "#e5e7eb";

    pub const NODE_FILL: &str = "#3b82f6";
    pub const NODE_OUTLINE: &str = "#ffffff";
    pub const LINK: &str = "#9ca3af";

    pub const BOX_PASS: &str = "#22c55e";

    pub const SHOT_FILL: &str = "#e5e7eb";
    pub const SHOT_OUTLINE: &str = "#666666";
    pub const GOAL_FILL: &str = "#ef4444";
    pub const GOAL_OUTLINE: &str = "#000000";
}

/// One drawable element of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Line(LineTrace),
    Markers(MarkerTrace),
}

/// A single line segment in pitch coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTrace {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Stroke width in surface pixels.
    pub width: f64,
    pub color: &'static str,
    pub hover: Option<String>,
}

/// A group of markers sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTrace {
    /// Legend name ("Shots", "Goals"), if the group has one.
    pub name: Option<&'static str>,
    pub points: Vec<MarkerPoint>,
    pub fill: &'static str,
    pub outline: &'static str,
    pub outline_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
    /// Marker diameter in surface pixels.
    pub size: f64,
    /// Text drawn next to the marker (shirt number).
    pub label: Option<String>,
    pub hover: Option<String>,
}

/// The three visualization kinds the page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizKind {
    PassNetwork,
    BoxPasses,
    ShotMap,
}

impl VizKind {
    /// Path segment of the backing endpoint under `/api/`.
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::PassNetwork => "pass-network",
            Self::BoxPasses => "box-passes",
            Self::ShotMap => "shots",
        }
    }

    pub fn title(&self, team: &str) -> String {
        match self {
            Self::PassNetwork => format!("Pass Network – {}", team),
            Self::BoxPasses => format!("Successful Box Passes – {}", team),
            Self::ShotMap => format!("Shots & Goals – {}", team),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVizKind(pub String);

impl core::fmt::Display for UnknownVizKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown visualization kind '{}'", self.0)
    }
}

impl core::str::FromStr for VizKind {
    type Err = UnknownVizKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass-network" => Ok(Self::PassNetwork),
            "box-passes" => Ok(Self::BoxPasses),
            "shots" => Ok(Self::ShotMap),
            other => Err(UnknownVizKind(other.to_owned())),
        }
    }
}

/// A fetched response, tagged with the kind it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum VizData {
    PassNetwork(common::PassNetwork),
    BoxPasses(common::BoxPasses),
    ShotMap(common::ShotMap),
}

impl VizData {
    pub fn kind(&self) -> VizKind {
        match self {
            Self::PassNetwork(_) => VizKind::PassNetwork,
            Self::BoxPasses(_) => VizKind::BoxPasses,
            Self::ShotMap(_) => VizKind::ShotMap,
        }
    }
}

/// Everything the drawing surface needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPayload {
    pub layout: Layout,
    pub traces: Vec<Trace>,
}

/// Single dispatch point over the visualization kinds.
pub fn render(data: &VizData, team: &str) -> RenderPayload {
    let traces = match data {
        VizData::PassNetwork(network) => pass_network::build(&network.nodes, &network.links),
        VizData::BoxPasses(passes) => box_passes::build(&passes.passes),
        VizData::ShotMap(shots) => shot_map::build(&shots.shots, &shots.goals),
    };

    RenderPayload {
        layout: layout::pitch(Some(data.kind().title(team))),
        traces,
    }
}
