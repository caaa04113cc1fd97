use common::BoxPass;

use crate::{theme, LineTrace, Trace};

const PASS_WIDTH: f64 = 2.0;
const HOVER: &str = "Successful box pass";

/// One line trace per completed pass into the box. An empty input renders a
/// blank pitch.
pub fn build(passes: &[BoxPass]) -> Vec<Trace> {
    passes
        .iter()
        .map(|pass| {
            Trace::Line(LineTrace {
                from: (pass.x, pass.y),
                to: (pass.end_x, pass.end_y),
                width: PASS_WIDTH,
                color: theme::BOX_PASS,
                hover: Some(HOVER.to_owned()),
            })
        })
        .collect()
}
