pub mod converter;

pub use converter::{
    convert, default_output_path, ConversionOptions, ConversionOutcome, ConversionRequest,
    Converter, ConverterConfig, ConverterError, Obj2GltfConverter,
};
