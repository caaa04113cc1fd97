use common::ShotEvent;

use crate::{theme, MarkerPoint, MarkerTrace, Trace};

const XG_SCALE: f64 = 60.0;

const SHOT_FLOOR: f64 = 6.0;
const SHOT_DEFAULT_XG: f64 = 0.07;
const SHOT_OUTLINE_WIDTH: f64 = 1.0;

const GOAL_FLOOR: f64 = 8.0;
const GOAL_DEFAULT_XG: f64 = 0.2;
const GOAL_OUTLINE_WIDTH: f64 = 1.5;

/// Builds the two shot-map marker traces, shots first so the goal markers
/// are not occluded by them.
pub fn build(shots: &[ShotEvent], goals: &[ShotEvent]) -> Vec<Trace> {
    vec![
        Trace::Markers(MarkerTrace {
            name: Some("Shots"),
            points: points(shots, SHOT_FLOOR, SHOT_DEFAULT_XG),
            fill: theme::SHOT_FILL,
            outline: theme::SHOT_OUTLINE,
            outline_width: SHOT_OUTLINE_WIDTH,
        }),
        Trace::Markers(MarkerTrace {
            name: Some("Goals"),
            points: points(goals, GOAL_FLOOR, GOAL_DEFAULT_XG),
            fill: theme::GOAL_FILL,
            outline: theme::GOAL_OUTLINE,
            outline_width: GOAL_OUTLINE_WIDTH,
        }),
    ]
}

fn points(events: &[ShotEvent], floor: f64, default_xg: f64) -> Vec<MarkerPoint> {
    events
        .iter()
        .map(|event| MarkerPoint {
            x: event.x,
            y: event.y,
            size: marker_size(event.xg, floor, default_xg),
            label: None,
            hover: event.xg.map(|xg| format!("xG {:.2}", xg)),
        })
        .collect()
}

/// `max(floor, xg * scale)`, with a fixed default when the model produced no
/// xG for the event. Negative xG is clamped to 0 so the floor keeps the
/// point visible.
fn marker_size(xg: Option<f64>, floor: f64, default_xg: f64) -> f64 {
    let xg = xg.unwrap_or(default_xg).max(0.0);
    (xg * XG_SCALE).max(floor)
}
