//! Output file naming.

use std::path::{Path, PathBuf};

use config::constants::STL_EXTENSION;

use crate::error::{ModelError, ModelResult};

/// Deterministic file name for a subject and year range.
///
/// `octocat-2024.stl` for one year, `octocat-19-24.stl` for a range.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] when `subject` is empty or contains a path
/// separator.
///
/// # Examples
/// ```
/// use skyline_model::output::output_filename;
/// assert_eq!(output_filename("octocat", 2024, 2024).unwrap(), "octocat-2024.stl");
/// assert_eq!(output_filename("octocat", 2019, 2024).unwrap(), "octocat-19-24.stl");
/// ```
pub fn output_filename(subject: &str, start_year: i32, end_year: i32) -> ModelResult<String> {
    if subject.is_empty() {
        return Err(ModelError::invalid_input("subject identifier is required for the file name"));
    }
    if subject.contains(['/', '\\']) {
        return Err(ModelError::invalid_input(format!(
            "subject identifier {subject:?} contains a path separator"
        )));
    }
    let years = if start_year == end_year {
        format!("{start_year}")
    } else {
        format!("{:02}-{:02}", start_year.rem_euclid(100), end_year.rem_euclid(100))
    };
    Ok(format!("{subject}-{years}.{STL_EXTENSION}"))
}

/// Appends `.stl` unless the path already ends with it (any case).
///
/// # Examples
/// ```
/// use std::path::Path;
/// use skyline_model::output::ensure_extension;
/// assert_eq!(ensure_extension(Path::new("out/model")), Path::new("out/model.stl"));
/// assert_eq!(ensure_extension(Path::new("model.STL")), Path::new("model.STL"));
/// assert_eq!(ensure_extension(Path::new("model.v2")), Path::new("model.v2.stl"));
/// ```
pub fn ensure_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STL_EXTENSION));
    if has_extension {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(STL_EXTENSION);
    PathBuf::from(name)
}

/// Resolves where a model is written.
///
/// An existing directory receives [`output_filename`]; any other path is used
/// as the file path with [`ensure_extension`] applied.
///
/// # Errors
///
/// See [`output_filename`].
pub fn resolve_output_path(
    output: &Path,
    subject: &str,
    start_year: i32,
    end_year: i32,
) -> ModelResult<PathBuf> {
    if output.is_dir() {
        Ok(output.join(output_filename(subject, start_year, end_year)?))
    } else {
        Ok(ensure_extension(output))
    }
}
