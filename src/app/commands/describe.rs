//! Read `lakefile.toml` and publish its name, default targets, and docs facets.

use std::io::Write;

use crate::domain::{AppError, DescriptorOutputs, LAKEFILE, parse_descriptor, render_json};
use crate::ports::{OutputChannel, PackageDirectory};

/// Run the describe pipeline.
///
/// Writes the parsed descriptor as one JSON line to `diagnostics`, then
/// publishes all three outputs. Outputs are derived in full before the first
/// one is published.
pub fn execute<P, O, W>(
    package: &P,
    channel: &mut O,
    diagnostics: &mut W,
) -> Result<DescriptorOutputs, AppError>
where
    P: PackageDirectory,
    O: OutputChannel,
    W: Write,
{
    let content = package.read_file(LAKEFILE)?;
    let document = parse_descriptor(&content)?;

    writeln!(diagnostics, "{}", render_json(&document)?)?;

    let outputs = DescriptorOutputs::derive(&document)?;
    let entries = outputs.entries();
    for (key, value) in &entries {
        tracing::debug!(key, value, "setting step output");
    }
    channel.set_outputs(&entries)?;

    Ok(outputs)
}
