//! End-to-end entry points: validate, assemble, then serialize.

use std::path::{Path, PathBuf};

use skyline_mesh::export::{write_stl_file, StlHeader};
use skyline_mesh::Mesh;

use crate::activity::SkylineRequest;
use crate::assembler::{assemble, ProducerContext};
use crate::assets::AssetSource;
use crate::diagnostics::Diagnostics;
use crate::error::ModelResult;
use crate::options::SkylineOptions;
use crate::output::resolve_output_path;

/// Summary of a written model.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Final location of the STL file.
    pub path: PathBuf,
    pub triangle_count: usize,
    /// Warnings and notes collected during the run.
    pub diagnostics: Diagnostics,
}

/// Validates `request` and assembles the full model.
///
/// Nothing is built when validation fails.
///
/// # Errors
///
/// [`crate::ModelError::InvalidInput`] for invalid requests or options, and
/// the first fatal error of a required producer otherwise.
pub fn build_skyline(
    request: &SkylineRequest<'_>,
    options: &SkylineOptions,
    assets: &dyn AssetSource,
    diagnostics: &mut Diagnostics,
) -> ModelResult<Mesh> {
    options.validate()?;
    request.validate(options.max_years)?;

    let span = tracing::info_span!(
        "skyline",
        subject = request.subject,
        start_year = request.start_year,
        end_year = request.end_year
    );
    let _entered = span.enter();

    let ctx = ProducerContext::new(*request, options, assets, span.clone())?;
    let mesh = assemble(&ctx, diagnostics)?;

    tracing::info!(
        triangles = mesh.triangle_count(),
        warnings = diagnostics.warnings().count(),
        "assembled skyline"
    );
    Ok(mesh)
}

/// Builds the model and writes it as binary STL.
///
/// `output` is either an existing directory, which receives the
/// deterministic file name, or a file path (`.stl` is appended when
/// missing). The file is only created after assembly succeeded.
///
/// # Errors
///
/// See [`build_skyline`]; I/O and triangle-count failures while writing are
/// reported as [`crate::ModelError::Geometry`].
pub fn write_skyline(
    request: &SkylineRequest<'_>,
    options: &SkylineOptions,
    assets: &dyn AssetSource,
    output: &Path,
) -> ModelResult<GenerationReport> {
    let path = resolve_output_path(output, request.subject, request.start_year, request.end_year)?;

    let mut diagnostics = Diagnostics::new();
    let mesh = build_skyline(request, options, assets, &mut diagnostics)?;
    write_stl_file(&path, &mesh, &StlHeader::from_text(&options.header))?;

    tracing::info!(path = %path.display(), triangles = mesh.triangle_count(), "wrote skyline");
    Ok(GenerationReport {
        path,
        triangle_count: mesh.triangle_count(),
        diagnostics,
    })
}
