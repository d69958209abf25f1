//! Fixed color palettes offered by the color controls.

/// Skin tones, light to dark.
pub const SKIN_COLORS: &[&str] = &[
    "#f2d6cb", "#ddb7a0", "#ce967d", "#bb876f", "#aa816f", "#a67358", "#ad6453", "#74453d",
    "#5c3937",
];

/// Natural hair colors.
pub const HAIR_COLORS: &[&str] = &[
    "#272421", "#3D2314", "#5A3825", "#CC9966", "#2C1608", "#B55239", "#e9c67b", "#D7BF91",
];

/// Shave shadow strengths, transparent to 50% black.
pub const SHAVE_COLORS: &[&str] = &[
    "rgba(0,0,0,0)",
    "rgba(0,0,0,0.1)",
    "rgba(0,0,0,0.2)",
    "rgba(0,0,0,0.3)",
    "rgba(0,0,0,0.4)",
    "rgba(0,0,0,0.5)",
];

/// Jersey color triples: primary, secondary, accent.
pub const JERSEY_COLORS: &[[&str; 3]] = &[
    ["#98002E", "#BC9B6A", "#FFFFFF"],
    ["#F56600", "#522D80", "#FFFFFF"],
    ["#00274C", "#FFCB05", "#FFFFFF"],
    ["#BA0C2F", "#000000", "#FFFFFF"],
    ["#0021A5", "#FA4616", "#FFFFFF"],
    ["#782F40", "#CEB888", "#FFFFFF"],
    ["#461D7C", "#FDD023", "#FFFFFF"],
    ["#9E1B32", "#828A8F", "#FFFFFF"],
    ["#003087", "#FFFFFF", "#B3A369"],
    ["#154734", "#FFB81C", "#FFFFFF"],
    ["#4B2E83", "#B7A57A", "#FFFFFF"],
    ["#CC0033", "#5F6A72", "#FFFFFF"],
];

/// Placeholder color used before the first projection.
pub const PLACEHOLDER_COLOR: &str = "#000000";

pub(crate) fn owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}
