use crate::{
    canvas::{self, Canvas, HEIGHT, PADDING, TEXT_AREA_WIDTH, WIDTH},
    color::{ColorScheme, WHITE},
    font::FontCollection,
    template::{self, Template, MAX_LIST_ITEMS},
    text::{self, LineBlock},
};

/// Read-only inputs consumed by exactly one template variant per render.
pub struct TemplateInputs<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub items: Option<&'a [String]>,
    pub scheme: &'static ColorScheme,
    pub fonts: &'a FontCollection,
}

/// Compose a fully painted fixed-size canvas. Deterministic for identical
/// inputs; never fails for a validated template/scheme pair.
pub fn render(template: Template, inputs: &TemplateInputs<'_>) -> Canvas {
    match template {
        Template::Gradient => render_gradient(inputs),
        Template::Minimal => render_minimal(inputs),
        Template::List => render_list(inputs),
        Template::Bold => render_bold(inputs),
    }
}

/// Gradient hero: two-color backdrop, title+subtitle centered as one block.
fn render_gradient(inputs: &TemplateInputs<'_>) -> Canvas {
    let scheme = inputs.scheme;
    let mut img = canvas::new_canvas(scheme.gradient_top);
    canvas::fill_vertical_gradient(&mut img, scheme.gradient_top, scheme.gradient_bottom);

    let title_font = inputs.fonts.select(96.0, true);
    let text_color = scheme.text_on_gradient;

    // The subtitle joins the centering budget before anything is drawn, so
    // title and subtitle move as one visual unit.
    let title_block = LineBlock::new(inputs.title, &title_font, TEXT_AREA_WIDTH);
    let mut total_height = title_block.total_height();
    let sub_font = inputs.subtitle.map(|_| inputs.fonts.select(48.0, false));
    if let Some(sub_font) = &sub_font {
        total_height += 80 + sub_font.line_height();
    }

    let start_y = text::centered_start_y(total_height, HEIGHT);
    let y = text::draw_centered(
        &mut img,
        inputs.title,
        &title_font,
        start_y,
        text_color,
        TEXT_AREA_WIDTH,
    );

    if let (Some(subtitle), Some(sub_font)) = (inputs.subtitle, &sub_font) {
        text::draw_centered(&mut img, subtitle, sub_font, y + 40, text_color, TEXT_AREA_WIDTH);
    }

    // Short accent rule floating above the block.
    let center_x = WIDTH as i32 / 2;
    canvas::draw_hline(&mut img, center_x - 100, center_x + 100, start_y - 60, 3, text_color);

    img
}

/// Minimal: solid backdrop, title in the upper third, accent bar at bottom.
fn render_minimal(inputs: &TemplateInputs<'_>) -> Canvas {
    let scheme = inputs.scheme;
    let mut img = canvas::new_canvas(scheme.solid);

    let title_font = inputs.fonts.select(88.0, true);
    let start_y = (HEIGHT / 3) as i32;
    let y = text::draw_centered(
        &mut img,
        inputs.title,
        &title_font,
        start_y,
        scheme.text,
        TEXT_AREA_WIDTH,
    );

    if let Some(subtitle) = inputs.subtitle {
        let sub_font = inputs.fonts.select(44.0, false);
        text::draw_centered(&mut img, subtitle, &sub_font, y + 50, scheme.accent, TEXT_AREA_WIDTH);
    }

    canvas::fill_rect(
        &mut img,
        PADDING as i32,
        (HEIGHT - 120) as i32,
        TEXT_AREA_WIDTH,
        8,
        scheme.accent,
    );

    img
}

/// Numbered list: accent band with the title, up to six numbered entries.
fn render_list(inputs: &TemplateInputs<'_>) -> Canvas {
    let scheme = inputs.scheme;
    let mut img = canvas::new_canvas(scheme.solid);

    canvas::fill_rect(&mut img, 0, 0, WIDTH, 200, scheme.accent);

    let title_font = inputs.fonts.select(72.0, true);
    let item_font = inputs.fonts.select(52.0, false);
    let num_font = inputs.fonts.select(56.0, true);

    text::draw_centered(
        &mut img,
        inputs.title,
        &title_font,
        60,
        scheme.text_on_gradient,
        TEXT_AREA_WIDTH,
    );

    let extracted;
    let items: &[String] = match inputs.items {
        Some(items) if !items.is_empty() => items,
        _ => {
            let source = inputs
                .subtitle
                .filter(|s| !s.is_empty())
                .unwrap_or(inputs.title);
            extracted = template::extract_list_items(source);
            &extracted
        }
    };

    let mut y: i32 = 280;
    let item_x = (PADDING + 80) as i32;
    let item_max_width = TEXT_AREA_WIDTH - 100;

    for (i, item) in items.iter().take(MAX_LIST_ITEMS).enumerate() {
        let number = (i + 1).to_string();
        let circle_x = (PADDING + 20) as i32;
        let radius = 28;
        canvas::fill_circle(&mut img, (circle_x, y + radius - 4), radius, scheme.accent);

        let num_width = num_font.text_width(&number) as i32;
        canvas::draw_text(&mut img, WHITE, circle_x - num_width / 2, y - 2, &num_font, &number);

        y = text::draw_left(&mut img, item, &item_font, item_x, y, scheme.text, item_max_width);
        y += 30;
    }

    img
}

/// Bold poster: oversized title on a full-width band over the middle half.
fn render_bold(inputs: &TemplateInputs<'_>) -> Canvas {
    let scheme = inputs.scheme;
    let mut img = canvas::new_canvas(scheme.solid);

    canvas::fill_rect(&mut img, 0, (HEIGHT / 4) as i32, WIDTH, HEIGHT / 2, scheme.accent);

    let title_font = inputs.fonts.select(128.0, true);
    let max_width = TEXT_AREA_WIDTH - 40;

    // The band is symmetric about the canvas center, so centering on the
    // canvas lands the block centered in the band.
    let block = LineBlock::new(inputs.title, &title_font, max_width);
    let start_y = text::centered_start_y(block.total_height(), HEIGHT);
    text::draw_centered(
        &mut img,
        inputs.title,
        &title_font,
        start_y,
        scheme.text_on_gradient,
        max_width,
    );

    if let Some(subtitle) = inputs.subtitle {
        let sub_font = inputs.fonts.select(48.0, false);
        let sub_y = (HEIGHT * 3 / 4 + 60) as i32;
        text::draw_centered(&mut img, subtitle, &sub_font, sub_y, scheme.text, TEXT_AREA_WIDTH);
    }

    img
}
