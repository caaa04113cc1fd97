use crate::theme;

/// Describes the chart surface itself: ranges, aspect, theme, title.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: Option<String>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// y units per x unit. 1 keeps the pitch square.
    pub scale_ratio: f64,
    pub axes_visible: bool,
    pub paper_color: &'static str,
    pub font_color: &'static str,
    pub margin: Margin,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// The fixed pitch diagram layout: 0-100 square plane, hidden axes, dark
/// theme. Only the title varies between renders.
pub fn pitch(title: Option<String>) -> Layout {
    Layout {
        title,
        x_range: (0.0, 100.0),
        y_range: (0.0, 100.0),
        scale_ratio: 1.0,
        axes_visible: false,
        paper_color: theme::PAPER,
        font_color: theme::FONT,
        margin: Margin {
            left: 20.0,
            right: 20.0,
            top: 40.0,
            bottom: 20.0,
        },
    }
}
