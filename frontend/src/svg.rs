//! Pure SVG writer for render payloads. Keeping this free of any DOM types
//! means the whole drawing path is testable on the host.

use core::fmt::Write;

use viz::{layout::Layout, LineTrace, MarkerTrace, Trace};

/// Fixed surface width in pixels; the height follows from the layout ranges
/// and its scale ratio.
pub const WIDTH: f64 = 640.0;

pub fn height(layout: &Layout) -> f64 {
    plot_height(layout) + layout.margin.top + layout.margin.bottom
}

fn plot_width(layout: &Layout) -> f64 {
    WIDTH - layout.margin.left - layout.margin.right
}

fn plot_height(layout: &Layout) -> f64 {
    let x_span = layout.x_range.1 - layout.x_range.0;
    let y_span = layout.y_range.1 - layout.y_range.0;
    plot_width(layout) * (y_span / x_span) * layout.scale_ratio
}

/// Pitch x to surface pixels.
pub fn project_x(layout: &Layout, x: f64) -> f64 {
    let (min, max) = layout.x_range;
    layout.margin.left + (x - min) / (max - min) * plot_width(layout)
}

/// Pitch y to surface pixels. SVG y runs downward, pitch y runs upward.
pub fn project_y(layout: &Layout, y: f64) -> f64 {
    let (min, max) = layout.y_range;
    layout.margin.top + (max - y) / (max - min) * plot_height(layout)
}

/// Serializes one render payload into a standalone `<svg>` document. Traces
/// are drawn in order, so earlier traces sit below later ones.
pub fn document(layout: &Layout, traces: &[Trace]) -> String {
    let (w, h) = (WIDTH, height(layout));

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
    );
    let _ = write!(
        out,
        "<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>",
        layout.paper_color,
    );

    if layout.axes_visible {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\"/>",
            layout.margin.left,
            layout.margin.top,
            plot_width(layout),
            plot_height(layout),
            layout.font_color,
        );
    }

    if let Some(title) = &layout.title {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"18\">{}</text>",
            layout.margin.left,
            layout.margin.top - 14.0,
            layout.font_color,
            escape(title),
        );
    }

    for trace in traces {
        match trace {
            Trace::Line(line) => write_line(&mut out, layout, line),
            Trace::Markers(markers) => write_markers(&mut out, layout, markers),
        }
    }

    out.push_str("</svg>");
    out
}

fn write_line(out: &mut String, layout: &Layout, line: &LineTrace) {
    let _ = write!(
        out,
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\">",
        project_x(layout, line.from.0),
        project_y(layout, line.from.1),
        project_x(layout, line.to.0),
        project_y(layout, line.to.1),
        line.color,
        line.width,
    );
    if let Some(hover) = &line.hover {
        let _ = write!(out, "<title>{}</title>", escape(hover));
    }
    out.push_str("</line>");
}

fn write_markers(out: &mut String, layout: &Layout, markers: &MarkerTrace) {
    out.push_str("<g");
    if let Some(name) = markers.name {
        let _ = write!(out, " data-name=\"{}\"", escape(name));
    }
    out.push('>');

    for point in &markers.points {
        let cx = project_x(layout, point.x);
        let cy = project_y(layout, point.y);
        let radius = point.size / 2.0;

        let _ = write!(
            out,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\">",
            cx, cy, radius, markers.fill, markers.outline, markers.outline_width,
        );
        if let Some(hover) = &point.hover {
            let _ = write!(out, "<title>{}</title>", escape(hover));
        }
        out.push_str("</circle>");

        if let Some(label) = &point.label {
            let _ = write!(
                out,
                "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"11\" text-anchor=\"middle\">{}</text>",
                cx,
                cy - radius - 4.0,
                layout.font_color,
                escape(label),
            );
        }
    }

    out.push_str("</g>");
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
