//! # Configuration Constants
//!
//! Centralized constants for the skyline pipeline. Model dimensions, text and
//! emblem placement, precision values and the binary STL layout are all
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Model**: Base slab and contribution column dimensions
//! - **Caption**: Text canvas sizes and placement factors
//! - **Emblem**: Emblem bitmap placement and scaling
//! - **Output**: Binary STL layout and file naming
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for degenerate-geometry detection.
///
/// A cross product whose magnitude falls below this value marks the three
/// input points as collinear or coincident.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for unit-length checks on triangle normals.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-8;
/// assert!((length - 1.0).abs() <= NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1e-6;

// =============================================================================
// MODEL CONSTANTS
// =============================================================================

/// Edge length of one contribution cell (column footprint).
pub const CELL_SIZE: f64 = 2.5;

/// Height of the base slab. The slab spans `z = -BASE_HEIGHT ..= 0`.
pub const BASE_HEIGHT: f64 = 10.0;

/// Height of the column for the highest count in a year.
pub const MAX_HEIGHT: f64 = 25.0;

/// Height of the column for the smallest non-zero count.
///
/// # Example
///
/// ```rust
/// use config::constants::{CELL_SIZE, MIN_HEIGHT};
///
/// assert_eq!(MIN_HEIGHT, CELL_SIZE);
/// ```
pub const MIN_HEIGHT: f64 = CELL_SIZE;

/// Number of week columns in one year of the lattice.
pub const GRID_WEEKS: usize = 53;

/// Days per week; the lattice depth of a single year.
pub const DAYS_PER_WEEK: usize = 7;

/// Y distance occupied by one year of columns.
pub const YEAR_OFFSET: f64 = DAYS_PER_WEEK as f64 * CELL_SIZE;

/// Extra gap inserted between stacked years.
pub const YEAR_SPACING: f64 = 0.0;

/// Padding between the base slab edge and the column lattice.
pub const LATTICE_PADDING: f64 = CELL_SIZE;

// =============================================================================
// RASTER CONSTANTS
// =============================================================================

/// Channel value above which a rendered pixel counts as active.
///
/// Half of full 8-bit intensity: values of 128 and above are active.
///
/// # Example
///
/// ```rust
/// use config::constants::ACTIVE_PIXEL_THRESHOLD;
///
/// assert!(128 > ACTIVE_PIXEL_THRESHOLD);
/// assert!(!(127 > ACTIVE_PIXEL_THRESHOLD));
/// ```
pub const ACTIVE_PIXEL_THRESHOLD: u8 = 127;

/// Thickness (along Y) of extruded caption and emblem voxels. Emblem voxels
/// start at `y = -FRONT_EMBED_DEPTH / 2`.
pub const FRONT_EMBED_DEPTH: f64 = 1.5;

// =============================================================================
// CAPTION CONSTANTS
// =============================================================================

/// Voxel edge length for the subject caption.
pub const TEXT_VOXEL_SIZE: f64 = 1.0;

/// Rendered pixels per voxel edge; the pixel pitch is `voxel / divisor`.
pub const TEXT_PIXEL_DIVISOR: f64 = 8.0;

/// Caption voxels start at `y = -TEXT_DEPTH_OFFSET / 2`, half embedded in the
/// base's front face.
pub const TEXT_DEPTH_OFFSET: f64 = 2.0;

/// Subject caption canvas width in pixels.
pub const USERNAME_CANVAS_WIDTH: u32 = 1000;

/// Subject caption canvas height in pixels.
pub const USERNAME_CANVAS_HEIGHT: u32 = 200;

/// Subject caption font size in pixels.
pub const USERNAME_FONT_SIZE: f32 = 48.0;

/// Subject caption X origin as a fraction of the model width.
pub const USERNAME_X_FACTOR: f64 = -0.01;

/// Subject caption top-row Z as a fraction of [`BASE_HEIGHT`].
pub const USERNAME_Z_FACTOR: f64 = 0.7;

/// Year caption canvas width in pixels.
pub const YEAR_CANVAS_WIDTH: u32 = 800;

/// Year caption canvas height in pixels.
pub const YEAR_CANVAS_HEIGHT: u32 = 200;

/// Year caption font size in pixels.
pub const YEAR_FONT_SIZE: f32 = 56.0;

/// Year caption X origin as a fraction of the model width.
pub const YEAR_X_FACTOR: f64 = 0.77;

/// Year caption top-row Z as a fraction of [`BASE_HEIGHT`].
pub const YEAR_Z_FACTOR: f64 = 0.4;

/// Year caption voxel size relative to [`TEXT_VOXEL_SIZE`].
pub const YEAR_VOXEL_FACTOR: f64 = 0.75;

/// Caption rendered when the subject identifier is empty.
pub const ANONYMOUS_SUBJECT: &str = "anonymous";

// =============================================================================
// EMBLEM CONSTANTS
// =============================================================================

/// Physical height of the emblem on the front face.
pub const EMBLEM_HEIGHT: f64 = 9.0;

/// Voxel scale applied on top of the image-to-model factor.
pub const EMBLEM_VOXEL_SCALE: f64 = 0.8;

/// Emblem X origin as a fraction of the model width.
pub const EMBLEM_X_FACTOR: f64 = 0.025;

/// Emblem bottom-row Z as a fraction of [`BASE_HEIGHT`].
pub const EMBLEM_Z_FACTOR: f64 = -0.85;

// =============================================================================
// ASSET CONSTANTS
// =============================================================================

/// Asset name of the primary caption font (Hack Regular, MIT licensed).
pub const PRIMARY_FONT: &str = "hack-regular.ttf";

/// Asset name of the emblem bitmap.
pub const EMBLEM_IMAGE: &str = "emblem.png";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Size of the free-form binary STL header.
pub const STL_HEADER_SIZE: usize = 80;

/// Size of one binary STL triangle record.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_RECORD_SIZE;
///
/// // normal + three vertices, each 3 x f32, then a u16 attribute
/// assert_eq!(STL_RECORD_SIZE, 4 * 3 * 4 + 2);
/// ```
pub const STL_RECORD_SIZE: usize = 50;

/// Default extension of generated model files.
pub const STL_EXTENSION: &str = "stl";

/// Default header text. Must not start with `solid`, which some readers take
/// as the mark of an ASCII file.
pub const DEFAULT_STL_HEADER: &str = "skyline binary model";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of stacked years in one model.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_YEARS;
///
/// let requested = 12;
/// assert!(requested <= MAX_YEARS);
/// ```
pub const MAX_YEARS: usize = GRID_WEEKS;
