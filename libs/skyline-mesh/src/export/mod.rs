//! Binary STL serialization.
//!
//! Layout (all little-endian):
//!
//! ```text
//! 80 bytes   header (free-form, zero padded)
//!  4 bytes   u32 triangle count
//! 50 bytes   per triangle: normal (3 x f32), 3 vertices (9 x f32), u16 attribute = 0
//! ```
//!
//! Geometry stays in f64 until the moment each record is written; the cast to
//! f32 happens here and nowhere else.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use config::constants::{STL_HEADER_SIZE, STL_RECORD_SIZE};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::triangle::Triangle;

/// Single-precision point as stored in the file.
pub type OutputPoint = glam::Vec3;

/// Single-precision mirror of a [`Triangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputTriangle {
    /// Facet normal.
    pub normal: OutputPoint,
    /// Vertices in winding order.
    pub vertices: [OutputPoint; 3],
}

impl From<&Triangle> for OutputTriangle {
    fn from(triangle: &Triangle) -> Self {
        let [a, b, c] = triangle.vertices();
        Self {
            normal: triangle.normal().as_vec3(),
            vertices: [a.as_vec3(), b.as_vec3(), c.as_vec3()],
        }
    }
}

/// The 80-byte free-form header.
///
/// # Examples
/// ```
/// use skyline_mesh::export::StlHeader;
/// let header = StlHeader::from_text("skyline");
/// assert_eq!(&header.as_bytes()[..7], b"skyline");
/// assert!(header.as_bytes()[7..].iter().all(|&b| b == 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StlHeader([u8; STL_HEADER_SIZE]);

impl StlHeader {
    /// An all-zero header.
    pub fn blank() -> Self {
        Self([0; STL_HEADER_SIZE])
    }

    /// A header holding `text`, truncated to 80 bytes and zero padded.
    ///
    /// Some readers treat headers starting with `solid` as ASCII STL; callers
    /// should avoid that prefix.
    pub fn from_text(text: &str) -> Self {
        let mut bytes = [0; STL_HEADER_SIZE];
        let len = text.len().min(STL_HEADER_SIZE);
        bytes[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self(bytes)
    }

    /// Raw header bytes.
    pub fn as_bytes(&self) -> &[u8; STL_HEADER_SIZE] {
        &self.0
    }
}

impl Default for StlHeader {
    fn default() -> Self {
        Self::blank()
    }
}

/// A parsed binary STL file.
#[derive(Debug, Clone, PartialEq)]
pub struct StlDocument {
    /// Header as read from the file.
    pub header: StlHeader,
    /// Triangles in file order.
    pub triangles: Vec<OutputTriangle>,
}

/// Size in bytes of a binary STL file holding `triangle_count` triangles.
///
/// # Examples
/// ```
/// assert_eq!(skyline_mesh::export::encoded_len(0), 84);
/// assert_eq!(skyline_mesh::export::encoded_len(12), 84 + 600);
/// ```
pub fn encoded_len(triangle_count: usize) -> usize {
    STL_HEADER_SIZE + 4 + STL_RECORD_SIZE * triangle_count
}

/// Writes `mesh` as binary STL.
///
/// # Errors
///
/// [`MeshError::TooManyTriangles`] if the count does not fit in a `u32`
/// (checked before anything is written), or [`MeshError::Io`] when the
/// writer fails.
pub fn write_stl<W: Write>(mesh: &Mesh, header: &StlHeader, mut writer: W) -> MeshResult<()> {
    let count = u32::try_from(mesh.triangle_count()).map_err(|_| MeshError::TooManyTriangles {
        count: mesh.triangle_count(),
        max: u32::MAX as usize,
    })?;

    writer.write_all(header.as_bytes())?;
    writer.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; STL_RECORD_SIZE];
    for triangle in mesh {
        encode_record(&OutputTriangle::from(triangle), &mut record);
        writer.write_all(&record)?;
    }

    Ok(())
}

/// Writes `mesh` as binary STL to a file, creating or truncating it.
///
/// A file that fails part way through is removed again.
///
/// # Errors
///
/// See [`write_stl`].
pub fn write_stl_file(path: &Path, mesh: &Mesh, header: &StlHeader) -> MeshResult<()> {
    if u32::try_from(mesh.triangle_count()).is_err() {
        return Err(MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: u32::MAX as usize,
        });
    }

    write_whole_file(path, |writer| write_stl(mesh, header, writer))?;

    tracing::debug!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        bytes = encoded_len(mesh.triangle_count()),
        "wrote binary STL"
    );
    Ok(())
}

/// Creates `path`, runs `write` against a buffered writer and flushes it.
/// On any failure the file is deleted so no truncated output remains.
fn write_whole_file<F>(path: &Path, write: F) -> MeshResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> MeshResult<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let result = write(&mut writer).and_then(|()| writer.flush().map_err(MeshError::from));
    drop(writer);

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %cleanup,
                "could not remove partial STL"
            );
        }
        return Err(err);
    }
    Ok(())
}

/// Reads a binary STL stream.
///
/// Bytes after the last declared record are ignored.
///
/// # Errors
///
/// [`MeshError::MalformedStl`] when the stream ends before the header, the
/// count or the declared number of records.
pub fn read_stl<R: Read>(mut reader: R) -> MeshResult<StlDocument> {
    let mut header = [0u8; STL_HEADER_SIZE];
    read_section(&mut reader, &mut header, "header")?;

    let mut count = [0u8; 4];
    read_section(&mut reader, &mut count, "triangle count")?;
    let count = u32::from_le_bytes(count) as usize;

    let mut triangles = Vec::with_capacity(count.min(1 << 20));
    let mut record = [0u8; STL_RECORD_SIZE];
    for index in 0..count {
        read_section(&mut reader, &mut record, "triangle record").map_err(|_| {
            MeshError::malformed(format!("stream ends at record {index} of {count}"))
        })?;
        triangles.push(decode_record(&record));
    }

    Ok(StlDocument {
        header: StlHeader(header),
        triangles,
    })
}

fn read_section<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> MeshResult<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => MeshError::malformed(format!("truncated {what}")),
        _ => MeshError::Io(err),
    })
}

fn encode_record(triangle: &OutputTriangle, record: &mut [u8; STL_RECORD_SIZE]) {
    let points = std::iter::once(&triangle.normal).chain(triangle.vertices.iter());
    let floats = points.flat_map(|p| p.to_array());
    for (slot, value) in record.chunks_exact_mut(4).zip(floats) {
        slot.copy_from_slice(&value.to_le_bytes());
    }
    record[48..].copy_from_slice(&0u16.to_le_bytes());
}

fn decode_record(record: &[u8; STL_RECORD_SIZE]) -> OutputTriangle {
    let float = |i: usize| {
        let at = i * 4;
        f32::from_le_bytes([record[at], record[at + 1], record[at + 2], record[at + 3]])
    };
    let point = |p: usize| OutputPoint::new(float(p * 3), float(p * 3 + 1), float(p * 3 + 2));
    OutputTriangle {
        normal: point(0),
        vertices: [point(1), point(2), point(3)],
    }
}

#[cfg(test)]
mod tests;
