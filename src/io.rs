//! Reading command files and writing height reports

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::engine::LineHeight;

/// How heights are written to the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One decimal height per line
    #[default]
    Plain,
    /// One JSON object per line: `{"line":N,"height":H}`
    Json,
}

#[derive(Debug, Serialize)]
struct HeightRecord {
    line: usize,
    height: usize,
}

impl From<&LineHeight> for HeightRecord {
    fn from(value: &LineHeight) -> Self {
        Self {
            line: value.line,
            height: value.height,
        }
    }
}

/// Read every line of the input file
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Write heights in the requested format, newline-terminated
pub fn render_heights<W: Write>(
    mut out: W,
    heights: &[LineHeight],
    format: OutputFormat,
) -> Result<()> {
    for h in heights {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", h.height)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &HeightRecord::from(h))?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Create (or truncate) the output file and write heights into it
pub fn write_heights(path: &Path, heights: &[LineHeight], format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    render_heights(BufWriter::new(file), heights, format)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LineHeight> {
        vec![
            LineHeight { line: 1, height: 2 },
            LineHeight { line: 3, height: 0 },
        ]
    }

    #[test]
    fn plain_output() {
        let mut buf = Vec::new();
        render_heights(&mut buf, &sample(), OutputFormat::Plain).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\n0\n");
    }

    #[test]
    fn json_output() {
        let mut buf = Vec::new();
        render_heights(&mut buf, &sample(), OutputFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"line\":1,\"height\":2}\n{\"line\":3,\"height\":0}\n"
        );
    }
}
