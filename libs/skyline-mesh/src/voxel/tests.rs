//! Tests for bitmap voxel extrusion.

use super::*;
use approx::assert_abs_diff_eq;
use image::Luma;

fn checker(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

#[test]
fn blank_bitmap_yields_empty_mesh() {
    let bitmap = GrayImage::new(16, 8);
    let mesh = voxelize(&bitmap, &VoxelGrid::uniform(Point3::ZERO, 1.0, 1.0)).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn one_box_per_active_pixel() {
    let bitmap = checker(5, 3);
    let active = active_pixel_count(&bitmap);
    assert_eq!(active, 8);
    let mesh = voxelize(&bitmap, &VoxelGrid::uniform(Point3::ZERO, 0.5, 1.5)).unwrap();
    assert_eq!(mesh.triangle_count(), active * BOX_TRIANGLES);
}

#[test]
fn threshold_is_strictly_above_half() {
    let mut bitmap = GrayImage::new(2, 1);
    bitmap.put_pixel(0, 0, Luma([127]));
    bitmap.put_pixel(1, 0, Luma([128]));
    assert_eq!(active_pixel_count(&bitmap), 1);
}

#[test]
fn rows_advance_downward() {
    let mut bitmap = GrayImage::new(3, 3);
    bitmap.put_pixel(2, 2, Luma([255]));
    let grid = VoxelGrid {
        origin: Point3::new(10.0, -1.0, 5.0),
        pitch: 0.125,
        voxel_size: 1.0,
        depth: 1.5,
    };
    let mesh = voxelize(&bitmap, &grid).unwrap();
    let (min, max) = mesh.bounding_box().unwrap();
    assert_abs_diff_eq!(min.x, 10.25);
    assert_abs_diff_eq!(min.y, -1.0);
    assert_abs_diff_eq!(min.z, 4.75);
    assert_abs_diff_eq!(max.x, 11.25);
    assert_abs_diff_eq!(max.y, 0.5);
    assert_abs_diff_eq!(max.z, 5.75);
}

#[test]
fn output_order_follows_rows() {
    let mut bitmap = GrayImage::new(2, 2);
    bitmap.put_pixel(1, 0, Luma([255]));
    bitmap.put_pixel(0, 1, Luma([255]));
    let mesh = voxelize(&bitmap, &VoxelGrid::uniform(Point3::ZERO, 1.0, 1.0)).unwrap();
    let first = mesh.triangles()[0].vertices();
    let last = mesh.triangles()[BOX_TRIANGLES].vertices();
    assert!(first.iter().all(|v| v.x >= 1.0));
    assert!(last.iter().all(|v| v.z <= 0.0 + 1e-12));
}

#[test]
fn invalid_grid_is_rejected() {
    let bitmap = checker(2, 2);
    let bad_pitch = VoxelGrid {
        pitch: 0.0,
        ..VoxelGrid::uniform(Point3::ZERO, 1.0, 1.0)
    };
    assert!(matches!(
        voxelize(&bitmap, &bad_pitch),
        Err(MeshError::InvalidDimensions { .. })
    ));

    let bad_depth = VoxelGrid::uniform(Point3::ZERO, 1.0, -1.5);
    assert!(matches!(
        voxelize(&bitmap, &bad_depth),
        Err(MeshError::InvalidDimensions { .. })
    ));
}
