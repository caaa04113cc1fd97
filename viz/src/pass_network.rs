use common::{PassLink, PlayerNode};

use crate::{theme, LineTrace, MarkerPoint, MarkerTrace, Trace};

const MIN_LINK_WIDTH: f64 = 1.0;
const MAX_LINK_WIDTH: f64 = 8.0;
const NODE_SIZE: f64 = 18.0;
const NODE_OUTLINE_WIDTH: f64 = 2.0;

/// Builds the pass-network traces: one line per resolvable link, then one
/// marker per player, so markers draw on top of the lines.
///
/// Links whose endpoints are not part of `nodes` are skipped, not errored:
/// the upstream data regularly references players without an averaged
/// position. Links with a zero pass count violate the `count >= 1` contract
/// and are skipped as well.
pub fn build(nodes: &[PlayerNode], links: &[PassLink]) -> Vec<Trace> {
    let mut traces = Vec::with_capacity(links.len() + nodes.len());

    for link in links {
        if link.count == 0 {
            tracing::warn!(
                source = %link.source,
                target = %link.target,
                "link with zero pass count"
            );
            continue;
        }

        let source = nodes.iter().find(|n| n.player_id == link.source);
        let target = nodes.iter().find(|n| n.player_id == link.target);
        let (source, target) = match (source, target) {
            (Some(s), Some(t)) => (s, t),
            _ => {
                tracing::debug!(
                    source = %link.source,
                    target = %link.target,
                    "link references unknown player"
                );
                continue;
            }
        };

        traces.push(Trace::Line(LineTrace {
            from: (source.x, source.y),
            to: (target.x, target.y),
            width: link_width(link.count),
            color: theme::LINK,
            hover: Some(format!("{} passes", link.count)),
        }));
    }

    for node in nodes {
        traces.push(Trace::Markers(MarkerTrace {
            name: None,
            points: vec![MarkerPoint {
                x: node.x,
                y: node.y,
                size: NODE_SIZE,
                label: node.shirt_no.clone(),
                hover: Some(node.name.clone()),
            }],
            fill: theme::NODE_FILL,
            outline: theme::NODE_OUTLINE,
            outline_width: NODE_OUTLINE_WIDTH,
        }));
    }

    traces
}

/// Linear in the pass count, capped at both ends.
fn link_width(count: u32) -> f64 {
    (count as f64 / 2.0).clamp(MIN_LINK_WIDTH, MAX_LINK_WIDTH)
}
