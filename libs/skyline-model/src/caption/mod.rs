//! # Caption Producer
//!
//! Renders the subject identifier and the year label into off-screen
//! grayscale canvases and extrudes the lit pixels into voxels on the front
//! face of the base.
//!
//! Text is drawn white on black, starting at one eighth of the canvas width
//! and vertically centered. Each canvas pixel maps to `voxel / 8` model
//! units, and the top canvas row sits at the caption's start Z.

pub mod block_font;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use config::constants::{
    ANONYMOUS_SUBJECT, BASE_HEIGHT, FRONT_EMBED_DEPTH, TEXT_DEPTH_OFFSET, TEXT_PIXEL_DIVISOR,
    TEXT_VOXEL_SIZE, USERNAME_CANVAS_HEIGHT, USERNAME_CANVAS_WIDTH, USERNAME_FONT_SIZE,
    USERNAME_X_FACTOR, USERNAME_Z_FACTOR, YEAR_CANVAS_HEIGHT, YEAR_CANVAS_WIDTH, YEAR_FONT_SIZE,
    YEAR_VOXEL_FACTOR, YEAR_X_FACTOR, YEAR_Z_FACTOR,
};
use image::GrayImage;
use skyline_mesh::voxel::{voxelize, VoxelGrid};
use skyline_mesh::{Mesh, Point3};

use crate::assets::AssetSource;
use crate::diagnostics::Diagnostics;
use crate::dimensions::ModelDimensions;
use crate::error::{ModelError, ModelResult};

const SOURCE: &str = "caption";
const BLOCK_FONT_NAME: &str = "built-in block font";

/// Font used to rasterize captions.
pub enum CaptionFont {
    /// A parsed TrueType/OpenType font.
    Outline(FontVec),
    /// The built-in 5x7 block font.
    Block,
}

impl CaptionFont {
    /// Loads `name` from `assets`, falling back to the block font.
    ///
    /// The fallback is recorded as an info diagnostic.
    pub fn load(assets: &dyn AssetSource, name: &str, diagnostics: &mut Diagnostics) -> Self {
        let parsed = assets.read(name).and_then(|bytes| {
            FontVec::try_from_vec(bytes).map_err(|err| ModelError::asset_unavailable(name, err))
        });
        match parsed {
            Ok(font) => Self::Outline(font),
            Err(err) => {
                diagnostics.info(SOURCE, format!("{err}; using the {BLOCK_FONT_NAME}"));
                Self::Block
            }
        }
    }

    /// Renders `text` onto a black `width` x `height` canvas.
    ///
    /// # Errors
    ///
    /// [`ModelError::AssetUnavailable`] when the block font has no glyph for
    /// a character of `text`.
    pub fn render(&self, text: &str, width: u32, height: u32, size: f32) -> ModelResult<GrayImage> {
        let mut canvas = GrayImage::new(width, height);
        let left = width / 8;
        match self {
            Self::Outline(font) => draw_outline(font, &mut canvas, text, left as f32, size),
            Self::Block => block_font::draw(&mut canvas, text, left, size).map_err(|c| {
                ModelError::asset_unavailable(BLOCK_FONT_NAME, format!("no glyph for {c:?}"))
            })?,
        }
        Ok(canvas)
    }
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline(_) => f.write_str("CaptionFont::Outline"),
            Self::Block => f.write_str("CaptionFont::Block"),
        }
    }
}

fn draw_outline(font: &FontVec, canvas: &mut GrayImage, text: &str, left: f32, size: f32) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let baseline = canvas.height() as f32 / 2.0 + (scaled.ascent() + scaled.descent()) / 2.0;

    let mut caret = left;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        let (width, height) = canvas.dimensions();
        outlined.draw(|x, y, coverage| {
            let px = bounds.min.x as i64 + i64::from(x);
            let py = bounds.min.y as i64 + i64::from(y);
            if px < 0 || py < 0 || px >= i64::from(width) || py >= i64::from(height) {
                return;
            }
            let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            pixel.0[0] = pixel.0[0].max(value);
        });
    }
}

/// Caption text for the subject; empty identifiers read `anonymous`.
pub fn subject_label(subject: &str) -> &str {
    if subject.is_empty() {
        ANONYMOUS_SUBJECT
    } else {
        subject
    }
}

/// Year caption: `2024` for one year, `2019-24` for a range.
///
/// # Examples
/// ```
/// use skyline_model::caption::year_label;
/// assert_eq!(year_label(2024, 2024), "2024");
/// assert_eq!(year_label(2019, 2024), "2019-24");
/// assert_eq!(year_label(1999, 2001), "1999-01");
/// ```
pub fn year_label(start_year: i32, end_year: i32) -> String {
    if start_year == end_year {
        format!("{end_year}")
    } else {
        format!("{start_year:04}-{:02}", end_year.rem_euclid(100))
    }
}

/// Canvas and placement of one caption.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    pub text: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub font_size: f32,
    pub grid: VoxelGrid,
}

impl CaptionLayout {
    /// Layout of the subject caption, left of center on the front face.
    pub fn subject(subject: &str, dims: &ModelDimensions) -> Self {
        Self::new(
            subject_label(subject).to_string(),
            (USERNAME_CANVAS_WIDTH, USERNAME_CANVAS_HEIGHT),
            USERNAME_FONT_SIZE,
            dims.width * USERNAME_X_FACTOR,
            BASE_HEIGHT * USERNAME_Z_FACTOR,
            TEXT_VOXEL_SIZE,
        )
    }

    /// Layout of the year caption near the right edge of the front face.
    pub fn year(start_year: i32, end_year: i32, dims: &ModelDimensions) -> Self {
        Self::new(
            year_label(start_year, end_year),
            (YEAR_CANVAS_WIDTH, YEAR_CANVAS_HEIGHT),
            YEAR_FONT_SIZE,
            dims.width * YEAR_X_FACTOR,
            BASE_HEIGHT * YEAR_Z_FACTOR,
            TEXT_VOXEL_SIZE * YEAR_VOXEL_FACTOR,
        )
    }

    fn new(
        text: String,
        (canvas_width, canvas_height): (u32, u32),
        font_size: f32,
        x: f64,
        top_z: f64,
        voxel_size: f64,
    ) -> Self {
        Self {
            text,
            canvas_width,
            canvas_height,
            font_size,
            grid: VoxelGrid {
                origin: Point3::new(x, -TEXT_DEPTH_OFFSET / 2.0, top_z),
                pitch: voxel_size / TEXT_PIXEL_DIVISOR,
                voxel_size,
                depth: FRONT_EMBED_DEPTH,
            },
        }
    }

    /// Renders and extrudes this caption.
    ///
    /// # Errors
    ///
    /// See [`CaptionFont::render`] and [`voxelize`].
    pub fn build(&self, font: &CaptionFont) -> ModelResult<Mesh> {
        let canvas =
            font.render(&self.text, self.canvas_width, self.canvas_height, self.font_size)?;
        Ok(voxelize(&canvas, &self.grid)?)
    }
}

/// Builds the subject and year captions.
///
/// # Errors
///
/// [`ModelError::AssetUnavailable`] when a caption cannot be drawn with the
/// available font.
pub fn build_captions(
    subject: &str,
    start_year: i32,
    end_year: i32,
    dims: &ModelDimensions,
    font_name: &str,
    assets: &dyn AssetSource,
    diagnostics: &mut Diagnostics,
) -> ModelResult<Mesh> {
    let font = CaptionFont::load(assets, font_name, diagnostics);
    let mut mesh = Mesh::new();

    for layout in [
        CaptionLayout::subject(subject, dims),
        CaptionLayout::year(start_year, end_year, dims),
    ] {
        let caption = layout.build(&font)?;
        tracing::debug!(
            text = %layout.text,
            voxels = caption.triangle_count() / skyline_mesh::primitives::BOX_TRIANGLES,
            "extruded caption"
        );
        mesh.append(caption);
    }

    Ok(mesh)
}
