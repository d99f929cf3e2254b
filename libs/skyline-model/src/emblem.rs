//! # Emblem Producer
//!
//! Decodes the emblem PNG and extrudes it onto the front face, left of the
//! subject caption. A pixel is lit when both its red and alpha channels
//! exceed half intensity.
//!
//! The image is scaled to a fixed physical height: one pixel spans
//! `EMBLEM_VOXEL_SCALE * EMBLEM_HEIGHT / image_height` model units, and the
//! bottom image row rests at `EMBLEM_Z_FACTOR * BASE_HEIGHT`.

use config::constants::{
    BASE_HEIGHT, EMBLEM_HEIGHT, EMBLEM_VOXEL_SCALE, EMBLEM_X_FACTOR, EMBLEM_Z_FACTOR,
    FRONT_EMBED_DEPTH,
};
use image::{GrayImage, Luma, RgbaImage};
use skyline_mesh::voxel::{is_active, voxelize, VoxelGrid};
use skyline_mesh::{Mesh, Point3};

use crate::assets::AssetSource;
use crate::dimensions::ModelDimensions;
use crate::error::{ModelError, ModelResult};

/// Reduces an RGBA image to a lit/unlit mask.
pub fn emblem_mask(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, _, _, a] = image.get_pixel(x, y).0;
        if is_active(r) && is_active(a) {
            Luma([u8::MAX])
        } else {
            Luma([0])
        }
    })
}

/// Placement of an emblem of `image_height` pixels.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] for an image without rows.
pub fn emblem_grid(image_height: u32, dims: &ModelDimensions) -> ModelResult<VoxelGrid> {
    if image_height == 0 {
        return Err(ModelError::invalid_input("emblem image has no rows"));
    }
    let pitch = EMBLEM_VOXEL_SCALE * EMBLEM_HEIGHT / f64::from(image_height);
    let bottom = EMBLEM_Z_FACTOR * BASE_HEIGHT;
    let origin = Point3::new(
        dims.width * EMBLEM_X_FACTOR,
        -FRONT_EMBED_DEPTH / 2.0,
        bottom + f64::from(image_height - 1) * pitch,
    );
    Ok(VoxelGrid::uniform(origin, pitch, FRONT_EMBED_DEPTH))
}

/// Loads the emblem named `name` and extrudes it.
///
/// # Errors
///
/// [`ModelError::AssetUnavailable`] when the asset is missing or is not a
/// decodable image.
pub fn build_emblem(
    name: &str,
    dims: &ModelDimensions,
    assets: &dyn AssetSource,
) -> ModelResult<Mesh> {
    let bytes = assets.read(name)?;
    let image = image::load_from_memory(&bytes)
        .map_err(|err| ModelError::asset_unavailable(name, err))?
        .to_rgba8();

    let mask = emblem_mask(&image);
    let grid = emblem_grid(mask.height(), dims)?;
    let mesh = voxelize(&mask, &grid)?;

    tracing::debug!(
        width = mask.width(),
        height = mask.height(),
        triangles = mesh.triangle_count(),
        "extruded emblem"
    );
    Ok(mesh)
}
