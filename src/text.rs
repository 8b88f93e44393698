use crate::{
    canvas::{self, Canvas},
    color::Color,
    font::FontHandle,
};

/// Inter-line spacing as a fraction of the line height.
pub const LINE_SPACING_RATIO: f32 = 0.4;

/// Greedily wrap `text` into lines no wider than `max_width` pixels.
///
/// Wrapping is character-granular: CJK text carries no inter-word spaces,
/// and Latin runs inside mixed text must still break at any position. Each
/// character is consumed exactly once, so a single character wider than
/// `max_width` lands alone on its own line instead of looping.
pub fn wrap(text: &str, font: &FontHandle<'_>, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if font.text_width(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// A wrapped run of text plus the vertical metrics needed to stack it.
#[derive(Clone, Debug)]
pub struct LineBlock {
    pub lines: Vec<String>,
    pub line_height: u32,
    pub line_spacing: u32,
}

impl LineBlock {
    pub fn new(text: &str, font: &FontHandle<'_>, max_width: u32) -> Self {
        let line_height = font.line_height();
        Self {
            lines: wrap(text, font, max_width),
            line_height,
            line_spacing: spacing_for(line_height),
        }
    }

    pub fn total_height(&self) -> u32 {
        self.lines.len() as u32 * (self.line_height + self.line_spacing)
    }
}

pub fn spacing_for(line_height: u32) -> u32 {
    (line_height as f32 * LINE_SPACING_RATIO) as u32
}

/// Vertical origin that centers a block of `total_height` in a region,
/// flooring on odd remainders.
pub fn centered_start_y(total_height: u32, region_height: u32) -> i32 {
    (i64::from(region_height) - i64::from(total_height)).div_euclid(2) as i32
}

/// Draw auto-wrapped text with every line centered independently
/// (ragged-left, even-center). Returns the y cursor after the block.
pub fn draw_centered(
    canvas: &mut Canvas,
    text: &str,
    font: &FontHandle<'_>,
    y: i32,
    color: Color,
    max_width: u32,
) -> i32 {
    let block = LineBlock::new(text, font, max_width);
    let mut y = y;
    for line in &block.lines {
        let line_width = font.text_width(line);
        let x = (i64::from(canvas.width()) - i64::from(line_width)).div_euclid(2) as i32;
        canvas::draw_text(canvas, color, x, y, font, line);
        y += (block.line_height + block.line_spacing) as i32;
    }
    y
}

/// Draw auto-wrapped text left-aligned at a fixed `x`. Returns the y cursor
/// after the block.
pub fn draw_left(
    canvas: &mut Canvas,
    text: &str,
    font: &FontHandle<'_>,
    x: i32,
    y: i32,
    color: Color,
    max_width: u32,
) -> i32 {
    let block = LineBlock::new(text, font, max_width);
    let mut y = y;
    for line in &block.lines {
        canvas::draw_text(canvas, color, x, y, font, line);
        y += (block.line_height + block.line_spacing) as i32;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontHandle;

    // Fallback metrics: 10 px font means 5 px per ASCII char, 10 px per CJK.
    fn font() -> FontHandle<'static> {
        FontHandle::fallback(10.0)
    }

    #[test]
    fn wrap_reassembles_input_exactly() {
        let text = "Rust实战指南，从入门到发布abc";
        let lines = wrap(text, &font(), 30);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn wrap_lines_respect_the_limit() {
        let f = font();
        let lines = wrap("写作是一门手艺abcdef", &f, 30);
        for line in &lines {
            assert!(
                f.text_width(line) <= 30 || line.chars().count() == 1,
                "line '{line}' too wide"
            );
        }
    }

    #[test]
    fn wrap_breaks_latin_mid_word() {
        let lines = wrap("abcdef", &font(), 10);
        assert_eq!(lines, vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn wrap_single_wide_char_gets_own_line() {
        let f = FontHandle::fallback(50.0);
        let lines = wrap("测测", &f, 20);
        assert_eq!(lines, vec!["测", "测"]);
    }

    #[test]
    fn wrap_empty_text_yields_no_lines() {
        assert!(wrap("", &font(), 100).is_empty());
    }

    #[test]
    fn block_total_height_counts_spacing_per_line() {
        let block = LineBlock::new("测测测", &font(), 10);
        assert_eq!(block.lines.len(), 3);
        assert_eq!(block.line_height, 10);
        assert_eq!(block.line_spacing, 4);
        assert_eq!(block.total_height(), 42);
    }

    #[test]
    fn spacing_truncates() {
        assert_eq!(spacing_for(96), 38);
        assert_eq!(spacing_for(10), 4);
        assert_eq!(spacing_for(0), 0);
    }

    #[test]
    fn centered_start_y_floors() {
        assert_eq!(centered_start_y(400, 1660), 630);
        assert_eq!(centered_start_y(333, 1660), 663);
        assert_eq!(centered_start_y(334, 1660), 663);
        // A block taller than the region starts above it.
        assert_eq!(centered_start_y(1661, 1660), -1);
    }

    #[test]
    fn draw_centered_advances_cursor_per_line() {
        let mut img = crate::canvas::new_canvas(image::Rgb([0, 0, 0]));
        let f = font();
        let after = draw_centered(&mut img, "测测测", &f, 100, image::Rgb([255, 255, 255]), 10);
        assert_eq!(after, 100 + 3 * 14);
    }
}
