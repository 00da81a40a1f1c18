//! compression/compress.rs
//! Encode side: longest-match scan, codeword emission, width growth, reset.

use std::io::{BufWriter, Read, Write};

use tracing::debug;

use crate::bitio::{BitSink, ByteSource};
use crate::codebook::EncoderCodebook;
use crate::compression::report_transition;
use crate::config::LzwConfig;
use crate::constants::EOF_CODE;
use crate::policy::{CodeSpace, Transition};
use crate::telemetry::{CodecCounters, CodecEvent, CodecObserver, NoopObserver};
use crate::types::{Code, LzwError};
use crate::utils::padded_len;

#[derive(Debug, Clone)]
pub struct LzwCompressor {
    config: LzwConfig,
}

impl LzwCompressor {
    /// Rejects out-of-range widths and unimplemented modes up front.
    pub fn new(config: LzwConfig) -> Result<Self, LzwError> {
        config.validate()?;
        config.mode.verify()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    pub fn compress<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<CodecCounters, LzwError> {
        self.compress_with(reader, writer, &mut NoopObserver)
    }

    /// Compress `reader` into `writer`, reporting codebook events to `observer`.
    pub fn compress_with<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
        observer: &mut dyn CodecObserver,
    ) -> Result<CodecCounters, LzwError> {
        let mode = self.config.mode;
        let mut input = ByteSource::new(reader);
        let mut sink = BitSink::new(BufWriter::new(writer));
        let mut counters = CodecCounters::new(mode.flag_bit());

        sink.write_flag(mode.flag_bit())?;

        let mut book = EncoderCodebook::new();
        let mut space = CodeSpace::new(self.config.max_width);

        let Some(first) = input.read_byte()? else {
            sink.write_bits(EOF_CODE, space.width())?;
            counters.add_codeword();
            return finish(sink, &input, &space, counters);
        };

        // Longest match so far: its tree node, its code, and its bytes.
        let mut node = book.root_child(first);
        let mut matched = first as Code;
        let mut current = vec![first];

        while let Some(byte) = input.read_byte()? {
            if let Some((child, code)) = book.extend(node, byte) {
                node = child;
                matched = code;
                current.push(byte);
                continue;
            }

            sink.write_bits(matched, space.width())?;
            counters.add_codeword();

            let transition = space.advance(mode);
            report_transition("compress", transition, &mut counters, observer);
            if transition == Transition::Reset {
                book.reset();
            }

            if let Some(code) = space.claim() {
                current.push(byte);
                if transition == Transition::Reset {
                    // `node` belongs to the discarded tree.
                    book.insert(&current, code)?;
                } else {
                    book.insert_child(node, byte, code)?;
                }
                observer.on_event(CodecEvent::Assigned { code, sequence: &current });
            }

            current.clear();
            current.push(byte);
            node = book.root_child(byte);
            matched = byte as Code;
        }

        sink.write_bits(matched, space.width())?;
        counters.add_codeword();

        // The expander runs the policy once more before reading the
        // end-of-stream code; match its width.
        let transition = space.advance(mode);
        report_transition("compress", transition, &mut counters, observer);

        sink.write_bits(EOF_CODE, space.width())?;
        counters.add_codeword();

        finish(sink, &input, &space, counters)
    }
}

fn finish<R: Read, W: Write>(
    sink: BitSink<W>,
    input: &ByteSource<R>,
    space: &CodeSpace,
    mut counters: CodecCounters,
) -> Result<CodecCounters, LzwError> {
    counters.bytes_in = input.bytes_read();
    counters.bytes_out = padded_len(sink.bits_written());
    counters.final_width = space.width();
    sink.close()?;

    debug!(
        bytes_in = counters.bytes_in,
        bytes_out = counters.bytes_out,
        codewords = counters.codewords,
        resets = counters.resets,
        "compression finished"
    );
    Ok(counters)
}
