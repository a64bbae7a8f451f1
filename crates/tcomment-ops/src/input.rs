//! Loading documented methods from JSON files.

use std::path::{Path, PathBuf};

use tcomment_core::DocumentedMethod;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{OpsError, OpsResult};

/// Methods read from one input file.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub path: PathBuf,
    pub methods: Vec<DocumentedMethod>,
}

/// Collect the JSON files an input path refers to.
///
/// A file is returned as is. A directory is walked recursively and its
/// `*.json` files are returned in sorted order.
pub fn discover(path: &Path) -> OpsResult<Vec<PathBuf>> {
    if !path.exists() {
        return Err(OpsError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(OpsError::NoInputFiles {
            path: path.to_path_buf(),
        });
    }
    Ok(files)
}

/// Read and validate one file holding a JSON array of methods.
pub fn load_file(path: &Path) -> OpsResult<InputFile> {
    let contents = std::fs::read_to_string(path)?;
    let methods: Vec<DocumentedMethod> =
        serde_json::from_str(&contents).map_err(|source| OpsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for method in &methods {
        validate(path, method)?;
    }

    debug!(path = %path.display(), methods = methods.len(), "Loaded input file");
    Ok(InputFile {
        path: path.to_path_buf(),
        methods,
    })
}

/// Load every input file under `path`.
pub fn load(path: &Path) -> OpsResult<Vec<InputFile>> {
    let files = discover(path)?
        .iter()
        .map(|p| load_file(p))
        .collect::<OpsResult<Vec<_>>>()?;

    info!(
        path = %path.display(),
        files = files.len(),
        methods = files.iter().map(|f| f.methods.len()).sum::<usize>(),
        tags = files
            .iter()
            .flat_map(|f| &f.methods)
            .map(DocumentedMethod::tag_count)
            .sum::<usize>(),
        "Loaded documented methods"
    );
    Ok(files)
}

fn validate(path: &Path, method: &DocumentedMethod) -> OpsResult<()> {
    if let Some(name) = method.duplicate_parameter() {
        return Err(OpsError::invalid_method(
            path,
            method.signature(),
            format!("parameter `{}` is declared more than once", name),
        ));
    }
    Ok(())
}
