use std::io::{BufRead, Read, Write};

use anyhow::Result;
use serde::Serialize;
use sliceable_config::OutputFormat;
use sliceable_engine::{Encoding, SliceExpr, SliceableString, apply};

/// Everything needed to slice inputs, merged from arguments and config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub expr: SliceExpr,
    pub output: OutputFormat,
    pub encoding: Encoding,
    pub per_line: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    expr: SliceExpr,
    encoding: &'a Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Writes results to `out` and failures to `err`, returning how many inputs
/// failed.
pub struct Slicer<'s, O, E> {
    settings: &'s Settings,
    out: O,
    err: E,
    failures: usize,
}

impl<'s, O: Write, E: Write> Slicer<'s, O, E> {
    pub fn new(settings: &'s Settings, out: O, err: E) -> Self {
        Self {
            settings,
            out,
            err,
            failures: 0,
        }
    }

    /// Slice a single text given on the command line.
    pub fn run_text(mut self, text: &str) -> Result<usize> {
        self.emit(None, text)?;
        Ok(self.failures)
    }

    /// Slice standard input, line by line or as a whole per the settings.
    ///
    /// Input that is not valid UTF-8 counts as a failed input; the rest is
    /// still sliced.
    pub fn run_input<R: BufRead>(mut self, mut input: R) -> Result<usize> {
        let mut buf = Vec::new();
        if self.settings.per_line {
            let mut n = 0;
            while input.read_until(b'\n', &mut buf)? > 0 {
                n += 1;
                let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                self.emit_bytes(Some(n), line)?;
                buf.clear();
            }
        } else {
            input.read_to_end(&mut buf)?;
            let text = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let text = text.strip_suffix(b"\r").unwrap_or(text);
            self.emit_bytes(None, text)?;
        }
        Ok(self.failures)
    }

    fn emit_bytes(&mut self, line: Option<usize>, bytes: &[u8]) -> Result<()> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.emit(line, text),
            Err(e) => {
                let lossy = String::from_utf8_lossy(bytes);
                self.write(line, &lossy, Err(format!("invalid UTF-8 input: {e}")))
            }
        }
    }

    fn emit(&mut self, line: Option<usize>, text: &str) -> Result<()> {
        let source = SliceableString::with_encoding(text, self.settings.encoding.clone());
        let outcome = apply(&source, self.settings.expr)
            .map(|key| key.to_string())
            .map_err(|e| {
                log::debug!("slicing {text:?} with {} failed: {e:?}", self.settings.expr);
                e.to_string()
            });
        self.write(line, text, outcome)
    }

    /// Failures go to `err` in every format; text output keeps one line per
    /// input so results stay aligned with their inputs.
    fn write(
        &mut self,
        line: Option<usize>,
        input: &str,
        outcome: Result<String, String>,
    ) -> Result<()> {
        if let Err(e) = &outcome {
            self.failures += 1;
            match line {
                Some(n) => writeln!(self.err, "line {n}: {e}")?,
                None => writeln!(self.err, "{e}")?,
            }
        }

        match self.settings.output {
            OutputFormat::Text => {
                writeln!(self.out, "{}", outcome.as_deref().unwrap_or_default())?;
            }
            OutputFormat::Json => {
                let (result, error) = match outcome {
                    Ok(result) => (Some(result), None),
                    Err(e) => (None, Some(e)),
                };
                let record = Record {
                    input,
                    expr: self.settings.expr,
                    encoding: &self.settings.encoding,
                    result,
                    error,
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}
