//! Cat command implementation.

use super::{mode_for, pump};
use tracing::debug;
use zfio::{ZfStream, STDIO_PATH};

/// Decodes each input in turn onto standard output.
pub fn run(inputs: &[String], format: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let read_mode = mode_for("r", format)?;
    let mut output = ZfStream::open(STDIO_PATH, "w")?;

    for path in inputs {
        let mut input = ZfStream::open(path, &read_mode)?;
        let copied = pump(&mut input, &mut output)?;
        debug!(path = %path, backend = input.backend().name(), copied, "decoded input");
        input.close()?;
    }

    output.close()?;
    Ok(())
}
