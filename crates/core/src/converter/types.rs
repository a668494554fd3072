//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Switches forwarded to the obj2gltf CLI.
///
/// Every field is an independent toggle; leaving one unset (or false) simply
/// omits the corresponding flag. Combinations are passed through verbatim,
/// the external tool owns validation of combinations it cannot honor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Write a single binary glTF (.glb style packing) instead of JSON + buffers.
    #[serde(default)]
    pub binary: bool,
    /// Write the geometry buffer to a separate file instead of embedding it.
    #[serde(default)]
    pub separate: bool,
    /// Write textures to separate files instead of embedding them.
    #[serde(default)]
    pub separate_textures: bool,
    /// Analyze textures for alpha and set material transparency accordingly.
    #[serde(default)]
    pub check_transparency: bool,
    /// Disallow the tool from reading files outside the input directory.
    #[serde(default)]
    pub secure: bool,
    /// Pack the occlusion texture into the metallic-roughness texture.
    #[serde(default)]
    pub pack_occlusion: bool,
    /// Force a metallic-roughness PBR material workflow.
    #[serde(default)]
    pub metallic_roughness: bool,
    /// Force a specular-glossiness PBR material workflow.
    #[serde(default)]
    pub specular_glossiness: bool,
    /// Mark output materials as unlit.
    #[serde(default)]
    pub unlit: bool,
}

impl ConversionOptions {
    /// Converts the set options to obj2gltf CLI flags.
    ///
    /// Flag order is fixed; every flag is a bare switch with no value.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.binary {
            args.push("-b".to_string());
        }
        if self.separate {
            args.push("-s".to_string());
        }
        if self.separate_textures {
            args.push("-t".to_string());
        }
        if self.check_transparency {
            args.push("--checkTransparency".to_string());
        }
        if self.secure {
            args.push("--secure".to_string());
        }
        if self.pack_occlusion {
            args.push("--packOcclusion".to_string());
        }
        if self.metallic_roughness {
            args.push("--metallicRoughness".to_string());
        }
        if self.specular_glossiness {
            args.push("--specularGlossiness".to_string());
        }
        if self.unlit {
            args.push("--unlit".to_string());
        }

        args
    }
}

/// A single conversion request.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Input OBJ file path. Must exist when the conversion runs.
    pub input_path: PathBuf,
    /// Output glTF file path. Derived from the input path when absent.
    pub output_path: Option<PathBuf>,
    /// Switches forwarded to the external tool.
    pub options: ConversionOptions,
}

impl ConversionRequest {
    /// Creates a request with a derived output path and default options.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            options: ConversionOptions::default(),
        }
    }

    /// Sets an explicit output path.
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Sets the conversion options.
    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// Output file path, either the one requested or the derived default.
    pub output_path: PathBuf,
    /// Wall-clock conversion duration in milliseconds.
    pub duration_ms: u64,
}

/// Derives the default output path for an input file.
///
/// Same directory, same base name, `.gltf` extension.
pub fn default_output_path(input_path: &Path) -> PathBuf {
    input_path.with_extension("gltf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_options_no_flags() {
        let options = ConversionOptions::default();
        assert!(options.to_args().is_empty());
    }

    #[test]
    fn test_each_option_maps_to_one_flag() {
        let cases = [
            (
                ConversionOptions {
                    binary: true,
                    ..Default::default()
                },
                "-b",
            ),
            (
                ConversionOptions {
                    separate: true,
                    ..Default::default()
                },
                "-s",
            ),
            (
                ConversionOptions {
                    separate_textures: true,
                    ..Default::default()
                },
                "-t",
            ),
            (
                ConversionOptions {
                    check_transparency: true,
                    ..Default::default()
                },
                "--checkTransparency",
            ),
            (
                ConversionOptions {
                    secure: true,
                    ..Default::default()
                },
                "--secure",
            ),
            (
                ConversionOptions {
                    pack_occlusion: true,
                    ..Default::default()
                },
                "--packOcclusion",
            ),
            (
                ConversionOptions {
                    metallic_roughness: true,
                    ..Default::default()
                },
                "--metallicRoughness",
            ),
            (
                ConversionOptions {
                    specular_glossiness: true,
                    ..Default::default()
                },
                "--specularGlossiness",
            ),
            (
                ConversionOptions {
                    unlit: true,
                    ..Default::default()
                },
                "--unlit",
            ),
        ];

        for (options, expected) in cases {
            let args = options.to_args();
            assert_eq!(args, vec![expected.to_string()]);
        }
    }

    #[test]
    fn test_binary_and_unlit_only() {
        let options = ConversionOptions {
            binary: true,
            unlit: true,
            ..Default::default()
        };
        assert_eq!(options.to_args(), vec!["-b", "--unlit"]);
    }

    #[test]
    fn test_flag_order_is_fixed() {
        let options = ConversionOptions {
            binary: true,
            separate: true,
            separate_textures: true,
            check_transparency: true,
            secure: true,
            pack_occlusion: true,
            metallic_roughness: true,
            specular_glossiness: true,
            unlit: true,
        };
        assert_eq!(
            options.to_args(),
            vec![
                "-b",
                "-s",
                "-t",
                "--checkTransparency",
                "--secure",
                "--packOcclusion",
                "--metallicRoughness",
                "--specularGlossiness",
                "--unlit",
            ]
        );
    }

    #[test]
    fn test_options_ignore_unknown_keys() {
        let json = r#"{"binary": true, "quality": "high"}"#;
        let options: ConversionOptions = serde_json::from_str(json).unwrap();
        assert!(options.binary);
        assert!(!options.unlit);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("assets/1/model.obj")),
            PathBuf::from("assets/1/model.gltf")
        );
    }

    #[test]
    fn test_default_output_path_no_extension() {
        assert_eq!(
            default_output_path(Path::new("assets/model")),
            PathBuf::from("assets/model.gltf")
        );
    }

    #[test]
    fn test_default_output_path_absolute() {
        assert_eq!(
            default_output_path(Path::new("/data/scans/chair.obj")),
            PathBuf::from("/data/scans/chair.gltf")
        );
    }

    #[test]
    fn test_request_builder() {
        let request = ConversionRequest::new("model.obj")
            .with_output("out.gltf")
            .with_options(ConversionOptions {
                binary: true,
                ..Default::default()
            });
        assert_eq!(request.input_path, PathBuf::from("model.obj"));
        assert_eq!(request.output_path, Some(PathBuf::from("out.gltf")));
        assert!(request.options.binary);
    }
}
