//! Converter module for turning OBJ models into glTF.
//!
//! This module provides the `Converter` trait and the obj2gltf-backed
//! implementation that shells out to the external CLI tool. The wrapper owns
//! input validation, output path defaulting, option-to-flag translation and
//! elapsed-time reporting; everything about the conversion itself belongs to
//! the external tool.
//!
//! # Example
//!
//! ```ignore
//! use gltfwrap_core::converter::{convert, ConversionOptions};
//!
//! // Output path derived: assets/1/model.gltf
//! let output = convert("assets/1/model.obj", None, None).await?;
//!
//! // Explicit output path and options
//! let options = ConversionOptions {
//!     binary: true,
//!     unlit: true,
//!     ..Default::default()
//! };
//! let output = convert("model.obj", Some("out.glb".into()), Some(options)).await?;
//! ```

mod config;
mod error;
mod obj2gltf;
mod traits;
mod types;

pub use config::ConverterConfig;
pub use error::ConverterError;
pub use obj2gltf::{convert, Obj2GltfConverter};
pub use traits::Converter;
pub use types::{
    default_output_path, ConversionOptions, ConversionOutcome, ConversionRequest,
};
