//! Shared chart theming used by all three charts.

/// Series palette; slightly brighter variants for dark mode.
pub fn series_colors(dark_mode: bool) -> [&'static str; 3] {
    if dark_mode {
        [
            "#22d3b3", // brighter teal
            "#7ba3ff", // brighter blue
            "#ffc733", // brighter yellow
        ]
    } else {
        [
            "#00b4a0", // teal
            "#648fff", // blue
            "#ffb000", // yellow
        ]
    }
}

/// Returns (title, axis, grid) text colors for the current theme.
pub fn text_colors(dark_mode: bool) -> (&'static str, &'static str, &'static str) {
    if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    }
}
