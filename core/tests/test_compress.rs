// Bit-exact checks on the compressed stream layout.

#[cfg(test)]
mod compress_tests {
    use lzw_core::{
        bitio::BitSource,
        compression::{compress_bytes, LzwCompressor},
        config::LzwConfig,
        telemetry::{EventLog, RecordedEvent},
        types::{CodebookMode, FormatError, LzwError},
    };

    /// Leading flag plus every codeword up to and including the EOF code,
    /// read at 9 bits. Only valid for streams that never widen.
    fn codewords_at_nine_bits(stream: &[u8]) -> (bool, Vec<u32>) {
        let mut source = BitSource::new(stream);
        let flag = source.read_flag().unwrap();
        let mut codes = Vec::new();
        loop {
            let code = source.read_bits(9).unwrap();
            codes.push(code);
            if code == 256 {
                break;
            }
        }
        (flag, codes)
    }

    #[test]
    fn empty_input_is_flag_plus_eof() {
        let none = compress_bytes(b"", &LzwConfig::with_mode(CodebookMode::None)).unwrap();
        assert_eq!(none, vec![0x40, 0x00]);

        let reset = compress_bytes(b"", &LzwConfig::with_mode(CodebookMode::Reset)).unwrap();
        assert_eq!(reset, vec![0xC0, 0x00]);
    }

    #[test]
    fn single_byte_is_one_codeword_then_eof() {
        let stream = compress_bytes(b"z", &LzwConfig::default()).unwrap();
        assert_eq!(codewords_at_nine_bits(&stream), (false, vec![b'z' as u32, 256]));
    }

    #[test]
    fn run_of_ten_a_uses_growing_entries() {
        let stream = compress_bytes(b"AAAAAAAAAA", &LzwConfig::default()).unwrap();
        let (flag, codes) = codewords_at_nine_bits(&stream);

        assert!(!flag);
        // A | AA | AAA | AAAA
        assert_eq!(codes, vec![65, 257, 258, 259, 256]);
        assert!(codes.len() - 1 < 10);
    }

    #[test]
    fn classic_text_vector() {
        let stream = compress_bytes(b"TOBEORNOTTOBEORTOBEORNOT", &LzwConfig::default()).unwrap();
        let (_, codes) = codewords_at_nine_bits(&stream);
        let expected: Vec<u32> = vec![
            b'T' as u32, b'O' as u32, b'B' as u32, b'E' as u32, b'O' as u32, b'R' as u32,
            b'N' as u32, b'O' as u32, b'T' as u32, 257, 259, 261, 266, 260, 262, 264, 256,
        ];
        assert_eq!(codes, expected);
    }

    #[test]
    fn reset_mode_sets_leading_bit() {
        let stream = compress_bytes(b"abcabc", &LzwConfig::with_mode(CodebookMode::Reset)).unwrap();
        assert_eq!(stream[0] & 0x80, 0x80);
        let stream = compress_bytes(b"abcabc", &LzwConfig::with_mode(CodebookMode::None)).unwrap();
        assert_eq!(stream[0] & 0x80, 0x00);
    }

    #[test]
    fn monitor_mode_fails_fast() {
        let err = LzwCompressor::new(LzwConfig::with_mode(CodebookMode::Monitor)).unwrap_err();
        assert!(matches!(err, LzwError::UnsupportedMode { mode: CodebookMode::Monitor }));

        let err = compress_bytes(b"data", &LzwConfig::with_mode(CodebookMode::Monitor)).unwrap_err();
        assert!(matches!(err, LzwError::UnsupportedMode { .. }));
    }

    #[test]
    fn out_of_range_widths_are_rejected() {
        let err = LzwCompressor::new(LzwConfig::new(None, Some(8))).unwrap_err();
        assert!(matches!(err, LzwError::Config(_)));

        let err = LzwCompressor::new(LzwConfig::new(None, Some(17))).unwrap_err();
        assert!(matches!(err, LzwError::Format(FormatError::WidthExceeded { width: 17, max: 16 })));
    }

    #[test]
    fn counters_describe_the_stream() {
        let compressor = LzwCompressor::new(LzwConfig::default()).unwrap();
        let mut out = Vec::new();
        let counters = compressor.compress(b"AAAAAAAAAA".as_slice(), &mut out).unwrap();

        assert_eq!(counters.bytes_in, 10);
        assert_eq!(counters.codewords, 5);
        // 1 flag bit + 5 * 9 bits = 46 bits
        assert_eq!(counters.bytes_out, 6);
        assert_eq!(out.len(), 6);
        assert_eq!(counters.final_width, 9);
        assert_eq!(counters.widenings, 0);
        assert!(!counters.reset_enabled);
    }

    #[test]
    fn assignments_follow_the_scan() {
        let compressor = LzwCompressor::new(LzwConfig::default()).unwrap();
        let mut log = EventLog::new();
        compressor.compress_with(b"ABABABA".as_slice(), Vec::new(), &mut log).unwrap();

        assert_eq!(
            log.events,
            vec![
                RecordedEvent::Assigned { code: 257, sequence: b"AB".to_vec() },
                RecordedEvent::Assigned { code: 258, sequence: b"BA".to_vec() },
                RecordedEvent::Assigned { code: 259, sequence: b"ABA".to_vec() },
            ]
        );
    }

    #[test]
    fn width_grows_once_the_ninth_bit_is_exhausted() {
        // Distinct byte pairs force one new entry per codeword.
        let mut data = Vec::new();
        for a in 0..=255u8 {
            data.push(a);
            data.push(a.wrapping_mul(7).wrapping_add(3));
        }
        let compressor = LzwCompressor::new(LzwConfig::default()).unwrap();
        let mut log = EventLog::new();
        let counters = compressor.compress_with(data.as_slice(), Vec::new(), &mut log).unwrap();

        assert_eq!(log.widenings(), vec![10]);
        assert_eq!(counters.final_width, 10);

        // The entry right after the widening is the first 10-bit code.
        let pos = log.events.iter().position(|e| *e == RecordedEvent::Widened { width: 10 }).unwrap();
        assert!(matches!(log.events[pos + 1], RecordedEvent::Assigned { code: 512, .. }));
    }
}
