//! Fixed chart color palette.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

pub const CHART_PALETTE: [&str; 15] = [
    "#4A90D9", "#06C755", "#E74C3C", "#F39C12", "#9B59B6", "#1ABC9C", "#34495E", "#E91E63", "#00BCD4", "#FF5722",
    "#795548", "#607D8B", "#3F51B5", "#8BC34A", "#FFC107",
];

/// The first `count` palette colors. Requests beyond the palette size get the
/// whole palette; colors are never repeated.
pub fn chart_colors(count: usize) -> &'static [&'static str] {
    &CHART_PALETTE[..count.min(CHART_PALETTE.len())]
}
