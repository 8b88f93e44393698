use std::{
    io::Read as _,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    time::{Duration, Instant},
};

use ab_glyph::{Font as _, FontRef, PxScale, ScaleFont as _};

/// Well-known install locations for the PingFang collection. macOS moved the
/// file between major releases, so both are probed.
pub const FONT_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Supplemental/PingFang.ttc",
];

const FONT_FILE_NAME: &str = "PingFang.ttc";

/// CJK families accepted when querying the system font database.
const CJK_FAMILIES: &[&str] = &[
    "PingFang SC",
    "Noto Sans CJK SC",
    "Source Han Sans SC",
    "WenQuanYi Micro Hei",
];

/// Face family must report this script-region tag to be selected.
const REQUIRED_SCRIPT_TAG: &str = "SC";

/// Upper bound on collection face indices scanned during selection.
const FACE_INDEX_LIMIT: u32 = 30;

/// Hard ceiling on the external font-catalog query.
const CATALOG_TIMEOUT: Duration = Duration::from_secs(5);

/// Vertical extent of this glyph defines the line box; CJK glyphs report the
/// font's true line height better than Latin ones.
const REFERENCE_GLYPH: char = '测';

/// A CJK font collection located on the host system, or nothing.
///
/// Resolution never fails: an empty collection degrades every [`select`]
/// call to the glyphless fallback handle instead of erroring.
///
/// [`select`]: FontCollection::select
pub struct FontCollection {
    data: Option<Vec<u8>>,
}

struct Strategy {
    name: &'static str,
    run: fn() -> Option<PathBuf>,
}

/// Ordered resolution strategies; the first hit wins and later entries are
/// never consulted.
const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "well-known-paths",
        run: well_known_paths,
    },
    Strategy {
        name: "fc-list",
        run: catalog_query,
    },
    Strategy {
        name: "fontdb",
        run: system_font_db,
    },
];

impl FontCollection {
    /// Locate a CJK font on this system, trying each strategy in order.
    pub fn locate() -> Self {
        for strategy in STRATEGIES {
            let Some(path) = (strategy.run)() else {
                continue;
            };
            match std::fs::read(&path) {
                Ok(data) => {
                    tracing::debug!(
                        strategy = strategy.name,
                        path = %path.display(),
                        "font collection located"
                    );
                    return Self { data: Some(data) };
                }
                Err(err) => {
                    tracing::debug!(
                        strategy = strategy.name,
                        path = %path.display(),
                        %err,
                        "font file unreadable, trying next strategy"
                    );
                }
            }
        }

        tracing::warn!("no CJK font found, rendering falls back to glyphless boxes");
        Self { data: None }
    }

    /// An intentionally empty collection; every `select` yields the fallback
    /// handle. Useful for deterministic layout tests.
    pub fn none() -> Self {
        Self { data: None }
    }

    /// Use caller-provided font bytes instead of system discovery.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data: Some(data) }
    }

    /// Select a face at `px` pixels, preferring `Semibold` when `bold` and
    /// `Regular` otherwise.
    ///
    /// Scans collection faces until one reports an `SC` family with the
    /// requested style. Scan exhaustion falls back to face index 0, an
    /// unreadable collection to the glyphless handle. Never fails.
    pub fn select(&self, px: f32, bold: bool) -> FontHandle<'_> {
        let Some(data) = self.data.as_deref() else {
            return FontHandle::fallback(px);
        };

        let style = if bold { "Semibold" } else { "Regular" };
        let faces = ttf_parser::fonts_in_collection(data)
            .unwrap_or(1)
            .min(FACE_INDEX_LIMIT);

        for index in 0..faces {
            let Ok(face) = ttf_parser::Face::parse(data, index) else {
                break;
            };
            let (family, subfamily) = face_names(&face);
            let family_ok = family.is_some_and(|f| f.contains(REQUIRED_SCRIPT_TAG));
            let style_ok = subfamily.is_some_and(|s| s.contains(style));
            if family_ok && style_ok {
                if let Ok(font) = FontRef::try_from_slice_and_index(data, index) {
                    return FontHandle::outline(font, px);
                }
            }
        }

        match FontRef::try_from_slice_and_index(data, 0) {
            Ok(font) => FontHandle::outline(font, px),
            Err(_) => FontHandle::fallback(px),
        }
    }
}

fn face_names(face: &ttf_parser::Face<'_>) -> (Option<String>, Option<String>) {
    let mut family = None;
    let mut subfamily = None;
    for name in face.names() {
        if !name.is_unicode() {
            continue;
        }
        match name.name_id {
            ttf_parser::name_id::FAMILY if family.is_none() => family = name.to_string(),
            ttf_parser::name_id::SUBFAMILY if subfamily.is_none() => {
                subfamily = name.to_string();
            }
            _ => {}
        }
    }
    (family, subfamily)
}

fn well_known_paths() -> Option<PathBuf> {
    FONT_SEARCH_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}

/// Query the system font catalog via `fc-list`, bounded by a hard deadline.
///
/// stdout is drained on a reader thread while the parent polls the child, so
/// a catalog larger than the pipe buffer cannot stall the query. A missing
/// utility or a timeout behaves exactly like "not found".
fn catalog_query() -> Option<PathBuf> {
    let mut child = Command::new("fc-list")
        .arg("--format=%{file}\n")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let mut stdout = child.stdout.take()?;
    let reader = std::thread::spawn(move || {
        let mut buf = String::new();
        let _ = stdout.read_to_string(&mut buf);
        buf
    });

    let deadline = Instant::now() + CATALOG_TIMEOUT;
    let finished = loop {
        match child.try_wait() {
            Ok(Some(_)) => break true,
            Ok(None) if Instant::now() >= deadline => break false,
            Ok(None) => std::thread::sleep(Duration::from_millis(50)),
            Err(_) => break false,
        }
    };
    if !finished {
        let _ = child.kill();
        let _ = child.wait();
    }

    // The kill above closes the pipe, so the join cannot hang.
    let output = reader.join().ok()?;
    if !finished {
        return None;
    }

    output
        .lines()
        .find(|line| line.contains(FONT_FILE_NAME))
        .map(|line| PathBuf::from(line.trim()))
}

fn system_font_db() -> Option<PathBuf> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let families: Vec<fontdb::Family<'_>> =
        CJK_FAMILIES.iter().map(|n| fontdb::Family::Name(n)).collect();
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = db.query(&query)?;
    match db.face_source(id) {
        Some((fontdb::Source::File(path), _)) | Some((fontdb::Source::SharedFile(path, _), _)) => {
            Some(path)
        }
        _ => None,
    }
}

/// A selected face bound to a pixel size.
///
/// Metrics are pure functions of the handle, so repeated measurement within
/// one render is consistent.
#[derive(Clone)]
pub struct FontHandle<'a> {
    pub(crate) face: FaceKind<'a>,
    pub(crate) scale: PxScale,
}

#[derive(Clone)]
pub(crate) enum FaceKind<'a> {
    Outline(FontRef<'a>),
    /// Glyphless terminal fallback: em-box advances (full width for
    /// non-ASCII, half width for ASCII), drawn as hollow tofu boxes.
    Fallback,
}

impl<'a> FontHandle<'a> {
    fn outline(font: FontRef<'a>, px: f32) -> Self {
        Self {
            face: FaceKind::Outline(font),
            scale: PxScale::from(px),
        }
    }

    pub fn fallback(px: f32) -> Self {
        Self {
            face: FaceKind::Fallback,
            scale: PxScale::from(px),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.face, FaceKind::Fallback)
    }

    pub fn px(&self) -> f32 {
        self.scale.y
    }

    /// Rendered width of `text` in pixels.
    pub fn text_width(&self, text: &str) -> u32 {
        match &self.face {
            FaceKind::Outline(font) => {
                let scaled = font.as_scaled(self.scale);
                let mut width = 0.0f32;
                let mut prev = None;
                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = prev {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width.ceil() as u32
            }
            FaceKind::Fallback => {
                let width: f32 = text.chars().map(|c| self.char_advance(c)).sum();
                width.ceil() as u32
            }
        }
    }

    /// Height of the line box, taken from the reference CJK glyph's outline
    /// bounds (its vertical extent tracks the real line box, unlike Latin
    /// x-height glyphs).
    pub fn line_height(&self) -> u32 {
        match &self.face {
            FaceKind::Outline(font) => {
                let scaled = font.as_scaled(self.scale);
                let glyph = scaled.scaled_glyph(REFERENCE_GLYPH);
                match scaled.outline_glyph(glyph) {
                    Some(outlined) => outlined.px_bounds().height().ceil() as u32,
                    // Reference glyph missing from this face (non-CJK
                    // index-0 fallback): use the font's nominal extent.
                    None => (scaled.ascent() - scaled.descent()).ceil() as u32,
                }
            }
            FaceKind::Fallback => self.scale.y.round() as u32,
        }
    }

    pub(crate) fn char_advance(&self, ch: char) -> f32 {
        match &self.face {
            FaceKind::Outline(font) => {
                let scaled = font.as_scaled(self.scale);
                scaled.h_advance(scaled.glyph_id(ch))
            }
            FaceKind::Fallback => {
                if ch.is_ascii() {
                    self.scale.y * 0.5
                } else {
                    self.scale.y
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_selects_fallback() {
        let fonts = FontCollection::none();
        assert!(fonts.select(96.0, true).is_fallback());
        assert!(fonts.select(48.0, false).is_fallback());
    }

    #[test]
    fn garbage_bytes_select_fallback() {
        let fonts = FontCollection::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(fonts.select(72.0, false).is_fallback());
    }

    #[test]
    fn fallback_metrics_are_em_box() {
        let handle = FontHandle::fallback(40.0);
        assert_eq!(handle.text_width("测试"), 80);
        assert_eq!(handle.text_width("ab"), 40);
        assert_eq!(handle.text_width("测a"), 60);
        assert_eq!(handle.line_height(), 40);
    }

    #[test]
    fn fallback_width_of_empty_text_is_zero() {
        assert_eq!(FontHandle::fallback(64.0).text_width(""), 0);
    }
}
