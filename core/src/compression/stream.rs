//! compression/stream.rs
//! Entry points over files, readers, and in-memory buffers.

use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::PathBuf;

use crate::compression::{LzwCompressor, LzwExpander};
use crate::config::LzwConfig;
use crate::telemetry::CodecCounters;
use crate::types::LzwError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, LzwError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(File::open(p)?),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer
pub fn open_output(sink: OutputSink) -> Result<Box<dyn Write + Send>, LzwError> {
    let writer: Box<dyn Write + Send> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => Box::new(File::create(p)?),
    };
    Ok(writer)
}

/// Compress `input` into `output` with `config.mode`.
pub fn compress_stream(
    input: InputSource,
    output: OutputSink,
    config: &LzwConfig,
) -> Result<CodecCounters, LzwError> {
    let compressor = LzwCompressor::new(*config)?;
    let reader = open_input(input)?;
    let writer = open_output(output)?;
    compressor.compress(reader, writer)
}

/// Expand `input` into `output`; the mode comes from the stream.
pub fn expand_stream(
    input: InputSource,
    output: OutputSink,
    config: &LzwConfig,
) -> Result<CodecCounters, LzwError> {
    let expander = LzwExpander::new(*config)?;
    let reader = open_input(input)?;
    let writer = open_output(output)?;
    expander.expand(reader, writer)
}

pub fn compress_bytes(data: &[u8], config: &LzwConfig) -> Result<Vec<u8>, LzwError> {
    let mut out = Vec::new();
    LzwCompressor::new(*config)?.compress(data, &mut out)?;
    Ok(out)
}

/// Nothing is returned on failure, not even the bytes decoded before it.
pub fn expand_bytes(data: &[u8], config: &LzwConfig) -> Result<Vec<u8>, LzwError> {
    let mut out = Vec::new();
    LzwExpander::new(*config)?.expand(data, &mut out)?;
    Ok(out)
}
