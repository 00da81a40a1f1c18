//! compression/expand.rs
//! Decode side: rebuilds the codebook one entry behind the compressor.

use std::io::{self, BufReader, BufWriter, Read, Write};

use tracing::debug;

use crate::bitio::BitSource;
use crate::codebook::DecoderCodebook;
use crate::compression::report_transition;
use crate::config::LzwConfig;
use crate::constants::EOF_CODE;
use crate::policy::{CodeSpace, Transition};
use crate::telemetry::{CodecCounters, CodecEvent, CodecObserver, NoopObserver};
use crate::types::{Code, CodebookMode, FormatError, LzwError};
use crate::utils::padded_len;

#[derive(Debug, Clone)]
pub struct LzwExpander {
    config: LzwConfig,
}

impl LzwExpander {
    /// Only `max_width` matters here; the mode is read from the stream.
    pub fn new(config: LzwConfig) -> Result<Self, LzwError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    pub fn expand<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<CodecCounters, LzwError> {
        self.expand_with(reader, writer, &mut NoopObserver)
    }

    /// Expand `reader` into `writer`, reporting codebook events to `observer`.
    pub fn expand_with<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
        observer: &mut dyn CodecObserver,
    ) -> Result<CodecCounters, LzwError> {
        let mut source = BitSource::new(BufReader::new(reader));
        let mut out = BufWriter::new(writer);

        let flag = match source.read_flag() {
            Ok(bit) => bit,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(FormatError::MissingModeFlag.into())
            }
            Err(e) => return Err(e.into()),
        };
        let mode = CodebookMode::from_flag_bit(flag);
        let mut counters = CodecCounters::new(flag);

        let mut book = DecoderCodebook::new();
        let mut space = CodeSpace::new(self.config.max_width);

        let first = read_codeword(&mut source, &space, &mut counters)?;
        if first == EOF_CODE {
            return finish(out, &source, &space, counters);
        }
        if first > EOF_CODE {
            return Err(FormatError::CodeOutOfRange { code: first, next_code: space.next_code() }.into());
        }

        // Pending output and the code it came from. The code is dropped on
        // reset, since it then points into the discarded codebook.
        let mut val = Vec::new();
        book.write_sequence(first, &mut val)?;
        let mut val_code = Some(first);

        loop {
            let transition = space.advance(mode);
            report_transition("expand", transition, &mut counters, observer);
            match transition {
                Transition::Widened { .. } => book.grow(space.capacity()),
                Transition::Reset => {
                    book.reset();
                    val_code = None;
                }
                Transition::Continue | Transition::Frozen { .. } => {}
            }

            out.write_all(&val)?;
            counters.bytes_out += val.len() as u64;

            let codeword = read_codeword(&mut source, &space, &mut counters)?;
            if codeword == EOF_CODE {
                break;
            }

            let next_code = space.next_code();
            let head = if codeword < next_code {
                book.first_byte(codeword)?
            } else if codeword == next_code && !space.is_full() {
                // The compressor defined this entry from the very sequence
                // it now references: val + val[0].
                val[0]
            } else {
                return Err(FormatError::CodeOutOfRange { code: codeword, next_code }.into());
            };

            if let Some(code) = space.claim() {
                let assigned = match val_code {
                    Some(prefix) => book.append_chained(prefix, head)?,
                    None => {
                        val.push(head);
                        let assigned = book.append(&val);
                        val.pop();
                        assigned
                    }
                };
                debug_assert_eq!(assigned, code);

                val.push(head);
                observer.on_event(CodecEvent::Assigned { code, sequence: &val });
                val.pop();
            }

            val.clear();
            book.write_sequence(codeword, &mut val)?;
            val_code = Some(codeword);
        }

        finish(out, &source, &space, counters)
    }
}

fn read_codeword<R: Read>(
    source: &mut BitSource<R>,
    space: &CodeSpace,
    counters: &mut CodecCounters,
) -> Result<Code, LzwError> {
    let width = space.width();
    if width > space.max_width() {
        return Err(FormatError::WidthExceeded { width, max: space.max_width() }.into());
    }
    match source.read_bits(width) {
        Ok(code) => {
            counters.add_codeword();
            Ok(code)
        }
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(FormatError::Truncated { codewords: counters.codewords }.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn finish<R: Read, W: Write>(
    mut out: BufWriter<W>,
    source: &BitSource<R>,
    space: &CodeSpace,
    mut counters: CodecCounters,
) -> Result<CodecCounters, LzwError> {
    out.flush()?;
    counters.bytes_in = padded_len(source.bits_read());
    counters.final_width = space.width();

    debug!(
        bytes_in = counters.bytes_in,
        bytes_out = counters.bytes_out,
        codewords = counters.codewords,
        resets = counters.resets,
        "expansion finished"
    );
    Ok(counters)
}
