use std::collections::HashMap;

use image::{GrayImage, Luma};
use skyline_mesh::export::{encoded_len, read_stl, write_stl, StlHeader};
use skyline_mesh::primitives::{make_base, make_box, make_column};
use skyline_mesh::voxel::{voxelize, VoxelGrid};
use skyline_mesh::{Mesh, Point3};

type Edge = ([i64; 3], [i64; 3]);

fn key(p: Point3) -> [i64; 3] {
    [(p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64, (p.z * 1e6).round() as i64]
}

/// Every directed edge of a closed, consistently wound shell is matched by
/// its reverse exactly once.
fn assert_closed(mesh: &Mesh) {
    let mut edges: HashMap<Edge, i32> = HashMap::new();
    for t in mesh {
        let [a, b, c] = t.vertices().map(key);
        for (from, to) in [(a, b), (b, c), (c, a)] {
            *edges.entry((from, to)).or_default() += 1;
        }
    }
    for (&(from, to), &count) in &edges {
        let reverse = edges.get(&(to, from)).copied().unwrap_or(0);
        assert_eq!(count, reverse, "unmatched edge {from:?} -> {to:?}");
    }
}

#[test]
fn box_is_closed() {
    assert_closed(&make_box(Point3::new(0.5, 1.0, -2.0), Point3::new(3.0, 1.5, 7.25)).unwrap());
}

#[test]
fn base_and_columns_are_closed() {
    let mut mesh = make_base(137.5, 22.5).unwrap();
    mesh.append(make_column(2.5, 2.5, 2.5, 2.5).unwrap());
    mesh.append(make_column(5.0, 2.5, 25.0, 2.5).unwrap());
    assert_eq!(mesh.triangle_count(), 36);
    assert_closed(&mesh);
}

#[test]
fn voxelized_bitmap_is_closed() {
    let mut bitmap = GrayImage::new(5, 3);
    for (x, y) in [(0, 0), (1, 0), (1, 1), (4, 2)] {
        bitmap.put_pixel(x, y, Luma([255]));
    }
    let grid = VoxelGrid::uniform(Point3::new(-1.0, -1.0, 7.0), 1.0, 1.5);
    let mesh = voxelize(&bitmap, &grid).unwrap();
    assert_eq!(mesh.triangle_count(), 4 * 12);
    assert_closed(&mesh);
}

#[test]
fn written_file_reads_back_in_order() {
    let mut mesh = make_base(10.0, 10.0).unwrap();
    mesh.append(make_column(2.5, 2.5, 4.0, 2.5).unwrap());

    let mut bytes = Vec::new();
    write_stl(&mesh, &StlHeader::from_text("integration"), &mut bytes).unwrap();
    assert_eq!(bytes.len(), encoded_len(24));

    let document = read_stl(bytes.as_slice()).unwrap();
    assert_eq!(document.triangles.len(), 24);
    let top = document.triangles[14];
    assert_eq!(top.normal, glam::Vec3::Z);
    assert!(top.vertices.iter().all(|v| v.z == 4.0));
}
