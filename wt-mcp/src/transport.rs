//! MCP stdio framing.
//!
//! Two framings are accepted on input: LSP-style `Content-Length` headers
//! followed by a body, and newline-delimited JSON. Replies go out in the
//! framing of the most recent request.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Framing {
    Lsp,
    Lines,
}

#[derive(Debug)]
pub enum Incoming {
    Message(Value),
    /// The frame was read but its body is not JSON.
    Malformed(serde_json::Error),
    /// Blank line or empty body.
    Skip,
}

pub struct Transport<R, W> {
    reader: R,
    writer: W,
    mode: Framing,
}

impl<R: BufRead, W: Write> Transport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, mode: Framing::Lsp }
    }

    pub fn mode(&self) -> Framing {
        self.mode
    }

    /// `Ok(None)` at end of input.
    pub fn read_message(&mut self) -> Result<Option<Incoming>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).context("reading frame")?;
        if n == 0 { return Ok(None); }

        let trimmed = line.trim();
        if trimmed.is_empty() { return Ok(Some(Incoming::Skip)); }
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            self.mode = Framing::Lines;
            trace!(bytes = trimmed.len(), "recv line");
            return Ok(Some(parse(trimmed.as_bytes())));
        }

        // Header block: read until the blank separator line.
        let mut content_length = 0usize;
        loop {
            let h = line.trim();
            if h.is_empty() { break; }
            if let Some((k, v)) = h.split_once(':') {
                if k.trim().eq_ignore_ascii_case("content-length") {
                    content_length = v.trim().parse().unwrap_or(0);
                }
            }
            line.clear();
            if self.reader.read_line(&mut line).context("reading header")? == 0 { break; }
        }
        self.mode = Framing::Lsp;
        if content_length == 0 { return Ok(Some(Incoming::Skip)); }

        let mut body = vec![0u8; content_length];
        self.reader.read_exact(&mut body).context("reading body")?;
        trace!(bytes = content_length, "recv lsp");
        Ok(Some(parse(&body)))
    }

    pub fn write_message(&mut self, v: &Value) -> Result<()> {
        let body = serde_json::to_vec(v)?;
        match self.mode {
            Framing::Lines => {
                self.writer.write_all(&body)?;
                self.writer.write_all(b"\n")?;
            }
            Framing::Lsp => {
                write!(
                    self.writer,
                    "Content-Length: {}\r\nContent-Type: application/vscode-jsonrpc; charset=utf-8\r\n\r\n",
                    body.len()
                )?;
                self.writer.write_all(&body)?;
            }
        }
        self.writer.flush()?;
        trace!(bytes = body.len(), mode = ?self.mode, "sent");
        Ok(())
    }
}

fn parse(bytes: &[u8]) -> Incoming {
    match serde_json::from_slice(bytes) {
        Ok(v) => Incoming::Message(v),
        Err(e) => Incoming::Malformed(e),
    }
}
