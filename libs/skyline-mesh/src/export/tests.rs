//! Tests for the binary STL writer and reader.

use super::*;
use crate::primitives::make_box;
use crate::vector::Point3;

fn unit_box() -> Mesh {
    make_box(Point3::ZERO, Point3::ONE).unwrap()
}

fn encode(mesh: &Mesh, header: &StlHeader) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_stl(mesh, header, &mut bytes).unwrap();
    bytes
}

#[test]
fn test_empty_mesh_is_header_and_zero_count() {
    let bytes = encode(&Mesh::new(), &StlHeader::blank());
    assert_eq!(bytes.len(), 84);
    assert!(bytes.iter().all(|&b| b == 0));
}

#[test]
fn test_file_size_matches_record_layout() {
    let bytes = encode(&unit_box(), &StlHeader::blank());
    assert_eq!(bytes.len(), encoded_len(12));
    assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]), 12);
}

#[test]
fn test_first_record_fields() {
    let mesh = make_box(Point3::new(1.0, 2.0, 3.0), Point3::ONE).unwrap();
    let bytes = encode(&mesh, &StlHeader::blank());
    let first = &mesh.triangles()[0];

    let read_f32 =
        |at: usize| f32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
    assert_eq!(read_f32(84), first.normal().x as f32);
    assert_eq!(read_f32(92), first.normal().z as f32);
    assert_eq!(read_f32(96), first.vertices()[0].x as f32);
    assert_eq!(read_f32(128), first.vertices()[2].z as f32);
    // attribute byte count
    assert_eq!(&bytes[132..134], &[0, 0]);
}

#[test]
fn test_header_text_is_truncated() {
    let long = "x".repeat(120);
    let header = StlHeader::from_text(&long);
    assert!(header.as_bytes().iter().all(|&b| b == b'x'));

    let bytes = encode(&Mesh::new(), &StlHeader::from_text("skyline model"));
    assert_eq!(&bytes[..13], b"skyline model");
    assert_eq!(bytes[13], 0);
}

#[test]
fn test_read_back_written_mesh() {
    let mesh = unit_box();
    let bytes = encode(&mesh, &StlHeader::from_text("roundtrip"));
    let document = read_stl(bytes.as_slice()).unwrap();

    assert_eq!(document.header, StlHeader::from_text("roundtrip"));
    assert_eq!(document.triangles.len(), 12);
    for (read, original) in document.triangles.iter().zip(&mesh) {
        assert_eq!(*read, OutputTriangle::from(original));
    }
}

#[test]
fn test_writing_is_deterministic() {
    let mesh = unit_box();
    let header = StlHeader::from_text("same");
    assert_eq!(encode(&mesh, &header), encode(&mesh, &header));
}

#[test]
fn test_read_rejects_short_header() {
    let err = read_stl(&[0u8; 40][..]).unwrap_err();
    assert!(matches!(err, MeshError::MalformedStl { .. }));
}

#[test]
fn test_read_rejects_missing_records() {
    let mut bytes = encode(&unit_box(), &StlHeader::blank());
    bytes.truncate(bytes.len() - 10);
    let err = read_stl(bytes.as_slice()).unwrap_err();
    assert!(err.to_string().contains("record 11 of 12"), "{err}");
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("box.stl");
    write_stl_file(&path, &unit_box(), &StlHeader::blank()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), encoded_len(12));
}

#[test]
fn test_write_file_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("box.stl");
    let err = write_stl_file(&path, &unit_box(), &StlHeader::blank()).unwrap_err();
    assert!(matches!(err, MeshError::Io(_)));
}

#[test]
fn test_failed_write_leaves_no_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.stl");

    let err = write_whole_file(&path, |writer| {
        write_stl(&unit_box(), &StlHeader::blank(), &mut *writer)?;
        Err(MeshError::Io(io::Error::new(io::ErrorKind::WriteZero, "disk full")))
    })
    .unwrap_err();

    assert!(matches!(err, MeshError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn test_successful_write_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whole.stl");
    write_whole_file(&path, |writer| write_stl(&unit_box(), &StlHeader::blank(), writer)).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), encoded_len(12) as u64);
}
