//! One-shot output of a conversion table for `--print`.

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

use crate::tempo::format::format_value;
use crate::tempo::ConversionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns, two decimals
    Text,
    /// Full-precision values as YAML
    Yaml,
}

pub fn write_report(
    out: &mut impl Write,
    bpm: f64,
    results: &[ConversionResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, bpm, results),
        OutputFormat::Yaml => {
            out.write_all(serde_yaml::to_string(results)?.as_bytes())?;
            Ok(())
        }
    }
}

fn write_text(out: &mut impl Write, bpm: f64, results: &[ConversionResult]) -> Result<()> {
    writeln!(out, "BPM: {}", bpm)?;
    writeln!(out, "{:<32}{:>12}{:>16}", "Note Value", "Delay (ms)", "Frequency (Hz)")?;
    for result in results {
        writeln!(
            out,
            "{:<32}{:>12}{:>16}",
            result.subdivision.name,
            format_value(result.delay_ms),
            format_value(result.frequency_hz)
        )?;
    }
    Ok(())
}
