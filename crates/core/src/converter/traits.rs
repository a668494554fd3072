//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::{ConversionOutcome, ConversionRequest};

/// A converter that can turn OBJ files into glTF.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts an OBJ file according to the request.
    ///
    /// Resolves to the conversion outcome on success; any failure is
    /// propagated unchanged, without retry.
    async fn convert(&self, request: ConversionRequest)
        -> Result<ConversionOutcome, ConverterError>;

    /// Validates that the converter is properly configured and ready.
    async fn validate(&self) -> Result<(), ConverterError>;
}
