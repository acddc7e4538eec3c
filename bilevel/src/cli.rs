//! Command-line front end
//!
//! `bilevel <IMAGE> [METHOD] [-o OUTPUT]` reads an image, thresholds it with
//! the named method and writes the result. Flags override the method's
//! default parameters.

use bilevel_io::{IoError, format_for_path, read_image, write_image};
use bilevel_threshold::{Method, ThresholdError};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use thiserror::Error;

/// Output path used when `-o` is not given
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "bilevel", version, about = "Binarize a grayscale image")]
pub struct Args {
    /// Input image (PNG or binary PGM)
    pub image: PathBuf,

    /// Method: global, gmean, giter, amean, otsu or amedian
    pub method: Option<String>,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Constant for the `global` method
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Block side in pixels for adaptive methods
    #[arg(long)]
    pub block_size: Option<u32>,

    /// Isodata iterations for `giter` and `amean`
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Process blocks on the current thread only
    #[arg(long)]
    pub serial: bool,
}

impl Args {
    /// Resolve the method name and apply flag overrides.
    ///
    /// Returns `None` (after logging a warning) when no method was given or
    /// the name is not recognised.
    pub fn resolve_method(&self) -> Option<Method> {
        let Some(name) = self.method.as_deref() else {
            warn!("No method given; expected one of {}", Method::NAMES.join(", "));
            return None;
        };
        let mut method = match name.parse::<Method>() {
            Ok(method) => method,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };
        if let Some(t) = self.threshold {
            method = method.with_threshold(t);
        }
        if let Some(size) = self.block_size {
            method = method.with_block_size(size);
        }
        if let Some(n) = self.iterations {
            method = method.with_iterations(n);
        }
        Some(method)
    }
}

/// What a run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The image was thresholded and written
    Written(Method),
    /// No usable method; nothing was computed
    Skipped,
}

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing an image failed
    #[error("image I/O error: {0}")]
    Io(#[from] IoError),

    /// Thresholding failed
    #[error("threshold error: {0}")]
    Threshold(#[from] ThresholdError),
}

/// Execute one invocation.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the input cannot be loaded or the output
/// cannot be written, and [`CliError::Threshold`] for invalid parameters
/// such as a zero block size.
pub fn run(args: &Args) -> Result<Outcome, CliError> {
    let gray = read_image(&args.image)?;
    info!(
        "loaded {} ({}x{})",
        args.image.display(),
        gray.width(),
        gray.height()
    );

    let Some(method) = args.resolve_method() else {
        return Ok(Outcome::Skipped);
    };

    let out = method.apply(&gray, !args.serial)?;
    write_image(&out, &args.output, format_for_path(&args.output))?;
    info!("{} -> {}", method, args.output.display());
    Ok(Outcome::Written(method))
}
