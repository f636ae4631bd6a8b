//! Text-stream reader for graph descriptions.
//!
//! Both graph formats share a header: a vertex count, then one label per line.
//! Edge records follow as whitespace-separated integers and end at an all-zero
//! terminator record. Tokens may span lines freely; labels are whole lines.
//!
//! A stream can hold several descriptions back to back. Each `build` consumes
//! exactly one and leaves the reader positioned after its terminator.

use std::io::BufRead;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{checked_size, NodeLabel};

/// Tokenizing reader over a buffered stream.
pub struct TextSource<R> {
    reader: R,
    current: String,
    pos: usize,
    line: usize,
}

impl<R: BufRead> TextSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: String::new(),
            pos: 0,
            line: 0,
        }
    }

    /// Line number of the most recently read line (1-based, 0 before any read).
    pub fn line(&self) -> usize {
        self.line
    }

    fn fill_line(&mut self) -> Result<bool> {
        self.current.clear();
        self.pos = 0;
        if self.reader.read_line(&mut self.current)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }

    /// Next whitespace-delimited token, reading further lines as needed.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let rest = &self.current[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let end = trimmed
                    .find(char::is_whitespace)
                    .map_or(self.current.len(), |i| start + i);
                let token = self.current[start..end].to_string();
                self.pos = end;
                return Ok(Some(token));
            }
            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    /// Next token parsed as an integer. `None` at end of stream.
    pub fn next_int(&mut self) -> Result<Option<i64>> {
        match self.next_token()? {
            Some(token) => token
                .parse::<i64>()
                .map(Some)
                .map_err(|_| GraphError::InvalidNumber {
                    line: self.line,
                    token,
                }),
            None => Ok(None),
        }
    }

    /// Like `next_int`, but end of stream is an error.
    pub fn require_int(&mut self, expected: &'static str) -> Result<i64> {
        self.next_int()?
            .ok_or(GraphError::UnexpectedEof { expected })
    }

    /// Remainder of the current line if one is partially consumed, else the next line.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.pos < self.current.len() {
            let rest = self.current[self.pos..].to_string();
            self.discard_line();
            return Ok(Some(rest));
        }
        if !self.fill_line()? {
            return Ok(None);
        }
        let line = std::mem::take(&mut self.current);
        self.pos = 0;
        Ok(Some(line))
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.current.clear();
        self.pos = 0;
    }

    /// True when only whitespace remains in the stream. Consumes blank lines.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        loop {
            if !self.current[self.pos..].trim_start().is_empty() {
                return Ok(false);
            }
            if !self.fill_line()? {
                return Ok(true);
            }
        }
    }

    /// Read one fixed-width integer record.
    ///
    /// `None` when the stream ends cleanly before the record starts; a record
    /// cut off part-way is an error.
    pub fn next_record<const K: usize>(&mut self) -> Result<Option<[i64; K]>> {
        let mut record = [0i64; K];
        for (i, slot) in record.iter_mut().enumerate() {
            match self.next_int()? {
                Some(v) => *slot = v,
                None if i == 0 => return Ok(None),
                None => return Err(GraphError::UnexpectedEof { expected: "edge field" }),
            }
        }
        Ok(Some(record))
    }
}

/// Read the shared header: vertex count followed by one label line per vertex.
pub(crate) fn read_header<R: BufRead>(
    source: &mut TextSource<R>,
    config: &GraphConfig,
) -> Result<Vec<NodeLabel>> {
    config.validate()?;

    let count = source.require_int("vertex count")?;
    let size = checked_size(count, config.max_vertices)?;
    source.discard_line();

    let mut labels = Vec::with_capacity(size);
    for _ in 0..size {
        let line = source
            .next_line()?
            .ok_or(GraphError::UnexpectedEof { expected: "node label" })?;
        labels.push(NodeLabel::from_line(&line));
    }
    Ok(labels)
}
