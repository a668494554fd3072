use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{error, info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use gltfwrap_core::convert;

fn print_usage() {
    eprintln!("Usage: gltfwrap <input.obj> [output.gltf]");
    eprintln!("Example: gltfwrap assets/1/model.obj assets/1/model.gltf");
    eprintln!("Example: gltfwrap assets/1/model.obj  (output path derived from the input)");
}

/// Resolves a path against the current working directory.
fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[tokio::main]
async fn main() {
    // Initialize logging: progress and timing on stdout, warnings and
    // errors on stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(filter::filter_fn(|meta| *meta.level() > Level::WARN)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter::filter_fn(|meta| *meta.level() <= Level::WARN)),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let input_path = absolutize(Path::new(&args[0]));
    let output_path = args.get(1).map(|arg| absolutize(Path::new(arg)));

    let start = Instant::now();

    match convert(input_path, output_path, None).await {
        Ok(output_path) => {
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            info!("Conversion completed: {}", output_path.display());
            info!(
                "Total run time: {:.2}ms ({:.2}s)",
                elapsed_ms,
                elapsed_ms / 1000.0
            );
        }
        Err(e) => {
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            error!("Conversion failed: {}", e);
            error!(
                "Total run time: {:.2}ms ({:.2}s)",
                elapsed_ms,
                elapsed_ms / 1000.0
            );
            std::process::exit(1);
        }
    }
}
