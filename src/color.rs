use image::Rgb;

/// 8-bit RGB, the only color depth the canvas uses.
pub type Color = Rgb<u8>;

/// Numeral color inside list-template circles, independent of scheme.
pub const WHITE: Color = Rgb([255, 255, 255]);

/// A named set of semantic colors consumed by the template renderers.
///
/// Every scheme defines all six roles; templates pick the roles they need
/// (`gradient_*` only matters to the gradient template, `solid` to the rest).
#[derive(Clone, Copy, Debug)]
pub struct ColorScheme {
    pub name: &'static str,
    pub gradient_top: Color,
    pub gradient_bottom: Color,
    pub solid: Color,
    pub text: Color,
    pub accent: Color,
    pub text_on_gradient: Color,
}

/// Process-wide read-only scheme registry. Entries are never added or
/// modified at runtime.
pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "warm",
        gradient_top: Rgb([255, 154, 120]),
        gradient_bottom: Rgb([255, 99, 132]),
        solid: Rgb([255, 240, 235]),
        text: Rgb([60, 20, 10]),
        accent: Rgb([255, 99, 132]),
        text_on_gradient: Rgb([255, 255, 255]),
    },
    ColorScheme {
        name: "cool",
        gradient_top: Rgb([102, 126, 234]),
        gradient_bottom: Rgb([118, 75, 162]),
        solid: Rgb([235, 238, 255]),
        text: Rgb([20, 20, 60]),
        accent: Rgb([102, 126, 234]),
        text_on_gradient: Rgb([255, 255, 255]),
    },
    ColorScheme {
        name: "green",
        gradient_top: Rgb([67, 206, 162]),
        gradient_bottom: Rgb([24, 164, 140]),
        solid: Rgb([235, 250, 245]),
        text: Rgb([10, 50, 40]),
        accent: Rgb([24, 164, 140]),
        text_on_gradient: Rgb([255, 255, 255]),
    },
    ColorScheme {
        name: "neutral",
        gradient_top: Rgb([90, 90, 90]),
        gradient_bottom: Rgb([50, 50, 50]),
        solid: Rgb([245, 245, 245]),
        text: Rgb([30, 30, 30]),
        accent: Rgb([90, 90, 90]),
        text_on_gradient: Rgb([255, 255, 255]),
    },
];

pub fn scheme_by_name(name: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|s| s.name == name)
}

pub fn scheme_names() -> Vec<&'static str> {
    COLOR_SCHEMES.iter().map(|s| s.name).collect()
}
