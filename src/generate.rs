use std::path::PathBuf;

use crate::{
    canvas::Canvas,
    color,
    error::{CovergenError, CovergenResult},
    font::FontCollection,
    model::CoverSpec,
    output,
    render::{self, TemplateInputs},
    template::Template,
};

/// Validate inputs, resolve the font collection once, and dispatch to the
/// selected template variant.
///
/// Unknown template or color names fail here, before any canvas is
/// allocated. Font-resolution shortfalls never fail; they degrade the
/// render instead.
pub fn render_cover(spec: &CoverSpec) -> CovergenResult<Canvas> {
    spec.validate()?;
    let template: Template = spec.template.parse()?;
    let scheme = color::scheme_by_name(&spec.color)
        .ok_or_else(|| CovergenError::validation(format!("unknown color '{}'", spec.color)))?;

    let fonts = FontCollection::locate();
    let inputs = TemplateInputs {
        title: &spec.title,
        subtitle: spec.subtitle.as_deref(),
        items: spec.items.as_deref(),
        scheme,
        fonts: &fonts,
    };

    Ok(render::render(template, &inputs))
}

/// Render and write, honoring the spec's output path or the timestamped
/// default. Returns the path actually written, which is the JPEG sibling
/// when the PNG exceeded the size ceiling.
pub fn write_cover(spec: &CoverSpec) -> CovergenResult<PathBuf> {
    let img = render_cover(spec)?;
    let path = spec
        .output
        .clone()
        .unwrap_or_else(output::default_output_path);
    output::save_with_size_limit(&img, &path)
}
