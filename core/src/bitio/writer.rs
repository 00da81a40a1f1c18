//! bitio/writer.rs
//! MSB-first bit sink over any `Write`.

use std::io;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::bitio::check_width;

pub struct BitSink<W: io::Write> {
    inner: BitWriter<W, BigEndian>,
    bits: u64,
}

impl<W: io::Write> BitSink<W> {
    pub fn new(writer: W) -> Self {
        Self { inner: BitWriter::endian(writer, BigEndian), bits: 0 }
    }

    pub fn write_flag(&mut self, flag: bool) -> io::Result<()> {
        self.inner.write_bit(flag)?;
        self.bits += 1;
        Ok(())
    }

    /// Write the low `width` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, width: u32) -> io::Result<()> {
        check_width(width)?;
        if width < 32 && value >> width != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("value {value} does not fit in {width} bits"),
            ));
        }
        BitWrite::write(&mut self.inner, width, value)?;
        self.bits += width as u64;
        Ok(())
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        BitWrite::write(&mut self.inner, 8, byte)?;
        self.bits += 8;
        Ok(())
    }

    /// Bits written so far, padding excluded.
    pub fn bits_written(&self) -> u64 {
        self.bits
    }

    /// Zero-pad to a byte boundary, flush, and hand back the writer.
    pub fn close(mut self) -> io::Result<W> {
        self.inner.byte_align()?;
        let mut writer = self.inner.into_writer();
        io::Write::flush(&mut writer)?;
        Ok(writer)
    }
}
