//! Convert command implementation.

use super::{mode_for, pump};
use tracing::info;
use zfio::{ZfConfig, ZfStream};

/// Re-encodes `input` into `output`.
///
/// The output format comes from the output path suffix, or from `format`
/// when the path has none.
pub fn run(
    input_path: &str,
    output_path: &str,
    input_format: Option<&str>,
    format: Option<&str>,
    level: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ZfConfig::new();
    if let Some(level) = level {
        config = config.compression_level(level);
    }

    let mut input = ZfStream::open_with_config(input_path, &mode_for("r", input_format)?, &config)?;
    let mut output =
        ZfStream::open_with_config(output_path, &mode_for("w", format)?, &config)?;

    info!(
        "Converting {} ({}) to {} ({})",
        input_path,
        input.backend().name(),
        output_path,
        output.backend().name()
    );

    let copied = pump(&mut input, &mut output)?;
    input.close()?;
    output.close()?;

    info!("Converted {} bytes", copied);
    Ok(())
}
