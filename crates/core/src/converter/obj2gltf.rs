//! obj2gltf-based converter implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{error, info, warn};

use super::config::ConverterConfig;
use super::error::ConverterError;
use super::traits::Converter;
use super::types::{
    default_output_path, ConversionOptions, ConversionOutcome, ConversionRequest,
};

/// obj2gltf-based converter implementation.
///
/// Spawns the obj2gltf CLI as a child process, one process per conversion.
/// Concurrent conversions are independent; there is no shared state, no
/// queueing and no cancellation once a process has been spawned.
pub struct Obj2GltfConverter {
    config: ConverterConfig,
}

impl Obj2GltfConverter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Builds the obj2gltf argument list.
    ///
    /// Input and output flags first, then the option switches in their fixed
    /// order, then any configured extra arguments.
    fn build_args(
        &self,
        input_path: &Path,
        output_path: &Path,
        options: &ConversionOptions,
    ) -> Vec<String> {
        let mut args = vec![
            "-i".to_string(),
            input_path.to_string_lossy().to_string(),
            "-o".to_string(),
            output_path.to_string_lossy().to_string(),
        ];

        args.extend(options.to_args());
        args.extend(self.config.extra_args.iter().cloned());

        args
    }

    /// Resolves the configured tool path to a concrete executable.
    ///
    /// A path with a directory component must exist as given; a bare name is
    /// searched on `PATH`. An unresolvable tool is a broken installation,
    /// never retried.
    fn resolve_tool(&self) -> Result<PathBuf, ConverterError> {
        let tool = &self.config.tool_path;

        if tool.components().count() > 1 {
            if tool.is_file() {
                return Ok(tool.clone());
            }
            return Err(ConverterError::ToolNotFound { path: tool.clone() });
        }

        if let Some(paths) = std::env::var_os("PATH") {
            for dir in std::env::split_paths(&paths) {
                let candidate = dir.join(tool);
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        Err(ConverterError::ToolNotFound { path: tool.clone() })
    }

    /// Runs one conversion and returns the resolved output path.
    async fn run_conversion(
        &self,
        request: &ConversionRequest,
    ) -> Result<PathBuf, ConverterError> {
        // Validate the input before anything is spawned
        if !request.input_path.exists() {
            return Err(ConverterError::InputNotFound {
                path: request.input_path.clone(),
            });
        }

        let output_path = request
            .output_path
            .clone()
            .unwrap_or_else(|| default_output_path(&request.input_path));

        let tool = self.resolve_tool()?;
        let args = self.build_args(&request.input_path, &output_path, &request.options);

        let output = Command::new(&tool)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConverterError::ToolNotFound { path: tool.clone() }
                } else {
                    ConverterError::Io(e)
                }
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(ConverterError::conversion_failed(
                format!("obj2gltf exited with code: {:?}", output.status.code()),
                if stderr.is_empty() {
                    None
                } else {
                    Some(stderr.to_string())
                },
            ));
        }

        // The tool reports its own warnings on stderr with a "Warning" marker;
        // anything else on a successful exit is still worth surfacing.
        if !stderr.is_empty() && !stderr.contains("Warning") {
            warn!("{}", stderr.trim_end());
        }

        Ok(output_path)
    }
}

#[async_trait]
impl Converter for Obj2GltfConverter {
    fn name(&self) -> &str {
        "obj2gltf"
    }

    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionOutcome, ConverterError> {
        let start = Instant::now();

        match self.run_conversion(&request).await {
            Ok(output_path) => {
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                info!(
                    "Successfully converted {} to {}",
                    request.input_path.display(),
                    output_path.display()
                );
                info!(
                    "Conversion took {:.2}ms ({:.2}s)",
                    elapsed_ms,
                    elapsed_ms / 1000.0
                );
                Ok(ConversionOutcome {
                    output_path,
                    duration_ms: elapsed_ms as u64,
                })
            }
            Err(e) => {
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                error!("Error converting OBJ to glTF: {}", e);
                error!(
                    "Time to failure: {:.2}ms ({:.2}s)",
                    elapsed_ms,
                    elapsed_ms / 1000.0
                );
                Err(e)
            }
        }
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        self.resolve_tool()?;
        Ok(())
    }
}

/// Converts an OBJ file to glTF using the default configuration.
///
/// When `output_path` is `None` the output lands next to the input with a
/// `.gltf` extension. Resolves to the output path on success; fails on a
/// missing input file, an unresolvable obj2gltf executable, or a non-zero
/// exit from the conversion process.
pub async fn convert(
    input_path: impl Into<PathBuf>,
    output_path: Option<PathBuf>,
    options: Option<ConversionOptions>,
) -> Result<PathBuf, ConverterError> {
    let mut request = ConversionRequest::new(input_path);
    request.output_path = output_path;
    request.options = options.unwrap_or_default();

    let outcome = Obj2GltfConverter::with_defaults().convert(request).await?;
    Ok(outcome.output_path)
}
