//! Incremental record scanner over any [`Read`] source.
//!
//! [`RecordScanner`] keeps a growable buffer of unconsumed input and repeatedly
//! asks its [`Splitter`] for the next record, refilling the buffer whenever the
//! splitter answers [`Split::NeedMore`]. Records are lent out as byte slices
//! borrowed from the buffer and stay valid until the next call.
//!
//! The scanner is single-pass: once it has reported end of input or an error,
//! every later call returns `Ok(None)`.

use crate::core::config::ParseOptions;
use crate::core::error::{PorcelainError, Result};
use crate::core::split::{Split, Splitter};
use std::io::{ErrorKind, Read};

pub struct RecordScanner<R, S> {
    reader: R,
    splitter: S,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    at_eof: bool,
    done: bool,
    max_record_len: usize,
    read_chunk: usize,
}

impl<R: Read, S: Splitter> RecordScanner<R, S> {
    pub fn new(reader: R, splitter: S) -> Self {
        Self::with_options(reader, splitter, &ParseOptions::default())
    }

    pub fn with_options(reader: R, splitter: S, options: &ParseOptions<'_>) -> Self {
        Self {
            reader,
            splitter,
            buf: Vec::new(),
            start: 0,
            end: 0,
            at_eof: false,
            done: false,
            max_record_len: options.max_record_len.max(1),
            read_chunk: options.read_chunk.max(1),
        }
    }

    /// Returns the next non-empty record, without its terminator.
    pub fn next_record(&mut self) -> Result<Option<&[u8]>> {
        loop {
            if self.done {
                return Ok(None);
            }

            let split = match self
                .splitter
                .split(&self.buf[self.start..self.end], self.at_eof)
            {
                Ok(split) => split,
                Err(err) => {
                    self.done = true;
                    return Err(err);
                }
            };

            match split {
                Split::Token { advance, len } => {
                    let token_start = self.start;
                    self.start += advance.min(self.end - self.start);
                    if len == 0 {
                        continue;
                    }
                    return Ok(Some(&self.buf[token_start..token_start + len]));
                }
                Split::NeedMore if self.at_eof => {
                    self.done = true;
                    return Ok(None);
                }
                Split::NeedMore => {
                    if let Err(err) = self.fill() {
                        self.done = true;
                        return Err(err);
                    }
                }
            }
        }
    }

    /// Moves unconsumed bytes to the front, grows the buffer if it is full,
    /// then performs one read.
    fn fill(&mut self) -> Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() {
            if self.buf.len() >= self.max_record_len {
                // A full buffer is only acceptable if the input ends right here.
                let mut probe = [0u8; 1];
                return match read_retrying(&mut self.reader, &mut probe)? {
                    0 => {
                        self.at_eof = true;
                        Ok(())
                    }
                    _ => Err(PorcelainError::record_too_long(self.max_record_len)),
                };
            }
            let grown = (self.buf.len() * 2)
                .max(self.read_chunk)
                .min(self.max_record_len);
            self.buf.resize(grown, 0);
        }

        match read_retrying(&mut self.reader, &mut self.buf[self.end..])? {
            0 => self.at_eof = true,
            n => self.end += n,
        }
        Ok(())
    }
}

fn read_retrying<R: Read>(reader: &mut R, out: &mut [u8]) -> Result<usize> {
    loop {
        match reader.read(out) {
            Ok(n) => return Ok(n),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
}
