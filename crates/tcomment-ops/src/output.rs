//! Rendering and writing translation results.

use std::path::{Path, PathBuf};

use tcomment_translator::TranslatedMethod;
use tracing::{debug, info};

use crate::error::OpsResult;
use crate::randoop::{self, RandoopSpecification};
use crate::requests::OutputFormat;

/// Serialize translated methods in the requested format.
pub fn render(methods: &[TranslatedMethod], format: OutputFormat) -> OpsResult<String> {
    let content = match format {
        OutputFormat::Specs => serde_json::to_string_pretty(methods)?,
        OutputFormat::Randoop => {
            let specs: Vec<RandoopSpecification> = methods
                .iter()
                .map(|m| randoop::convert(&m.specification))
                .collect();
            debug!(
                operations = specs.len(),
                specifications = specs.iter().map(RandoopSpecification::len).sum::<usize>(),
                unconstrained = specs.iter().filter(|s| s.is_empty()).count(),
                "Converted to Randoop format"
            );
            serde_json::to_string_pretty(&specs)?
        }
    };
    Ok(content)
}

/// Default output location: `<dir>/<input stem>_<format>.json`.
pub fn default_output_path(dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty() && s != ".")
        .unwrap_or_else(|| "methods".to_string());
    dir.join(format!("{}_{}.json", stem, format.file_suffix()))
}

/// Write `content` to `path`, creating parent directories.
pub fn write(path: &Path, content: &str) -> OpsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "Wrote specifications");
    Ok(())
}
