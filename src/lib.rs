//! Covergen renders fixed-size (1242×1660, 3:4 portrait) social cover
//! images from a short title, an optional subtitle or list items, a named
//! template and a named color scheme.
//!
//! Rendering is deterministic: identical inputs produce identical pixels,
//! with the resolved font as the only host dependency. Font resolution
//! never fails — a missing CJK font degrades the render instead of
//! aborting it.
#![forbid(unsafe_code)]

pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod generate;
pub mod model;
pub mod output;
pub mod render;
pub mod template;
pub mod text;

pub use canvas::{Canvas, HEIGHT, PADDING, TEXT_AREA_WIDTH, WIDTH};
pub use color::{COLOR_SCHEMES, Color, ColorScheme, scheme_by_name, scheme_names};
pub use error::{CovergenError, CovergenResult};
pub use font::{FontCollection, FontHandle};
pub use generate::{render_cover, write_cover};
pub use model::CoverSpec;
pub use render::{TemplateInputs, render};
pub use template::{MAX_LIST_ITEMS, Template, extract_list_items};
pub use text::{LineBlock, wrap};
