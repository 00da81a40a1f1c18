//! bitio/reader.rs
//! MSB-first bit source and a buffered byte source.

use std::io::{self, BufReader, Read};

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::bitio::check_width;

pub struct BitSource<R: Read> {
    inner: BitReader<R, BigEndian>,
    bits: u64,
}

impl<R: Read> BitSource<R> {
    pub fn new(reader: R) -> Self {
        Self { inner: BitReader::endian(reader, BigEndian), bits: 0 }
    }

    /// `UnexpectedEof` once the input runs out.
    pub fn read_flag(&mut self) -> io::Result<bool> {
        let bit = self.inner.read_bit()?;
        self.bits += 1;
        Ok(bit)
    }

    /// `UnexpectedEof` if fewer than `width` bits remain.
    pub fn read_bits(&mut self, width: u32) -> io::Result<u32> {
        check_width(width)?;
        let value: u32 = BitRead::read(&mut self.inner, width)?;
        self.bits += width as u64;
        Ok(value)
    }

    pub fn bits_read(&self) -> u64 {
        self.bits
    }
}

/// Plain bytes in, one at a time.
pub struct ByteSource<R: Read> {
    inner: BufReader<R>,
    consumed: u64,
}

impl<R: Read> ByteSource<R> {
    pub fn new(reader: R) -> Self {
        Self { inner: BufReader::new(reader), consumed: 0 }
    }

    /// Next byte, or `None` once the input is exhausted.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.consumed += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.consumed
    }
}
