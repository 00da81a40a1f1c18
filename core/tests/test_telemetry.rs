#[cfg(test)]
mod telemetry_counters_tests {
    use lzw_core::{policy::Transition, telemetry::CodecCounters};

    #[test]
    fn starts_at_minimum_width() {
        let counters = CodecCounters::new(true);
        assert!(counters.reset_enabled);
        assert_eq!(counters.final_width, 9);
        assert_eq!(counters.codewords, 0);
        assert!(!counters.frozen);
    }

    #[test]
    fn record_counts_transitions() {
        let mut counters = CodecCounters::default();
        assert!(!counters.record(Transition::Continue));
        assert!(counters.record(Transition::Widened { width: 10 }));
        assert!(counters.record(Transition::Widened { width: 11 }));
        assert!(counters.record(Transition::Reset));

        assert_eq!(counters.widenings, 2);
        assert_eq!(counters.resets, 1);
    }

    #[test]
    fn freeze_is_reported_once() {
        let mut counters = CodecCounters::default();
        assert!(counters.record(Transition::Frozen { width: 16 }));
        assert!(!counters.record(Transition::Frozen { width: 16 }));
        assert!(counters.frozen);
    }

    #[test]
    fn serializes_as_flat_json() {
        let mut counters = CodecCounters::new(false);
        counters.bytes_in = 1024;
        counters.bytes_out = 700;
        counters.codewords = 560;
        counters.widenings = 1;
        counters.final_width = 10;

        let json = serde_json::to_value(&counters).unwrap();
        assert_eq!(json["bytes_in"], 1024);
        assert_eq!(json["final_width"], 10);
        assert_eq!(json["reset_enabled"], false);

        let back: CodecCounters = serde_json::from_value(json).unwrap();
        assert_eq!(back, counters);
    }
}

#[cfg(test)]
mod telemetry_events_tests {
    use lzw_core::telemetry::{CodecEvent, CodecObserver, EventLog, NoopObserver, RecordedEvent};

    fn sample_log() -> EventLog {
        let mut log = EventLog::new();
        log.on_event(CodecEvent::Assigned { code: 511, sequence: b"xy" });
        log.on_event(CodecEvent::Widened { width: 10 });
        log.on_event(CodecEvent::Assigned { code: 512, sequence: b"yz" });
        log.on_event(CodecEvent::Reset);
        log.on_event(CodecEvent::Assigned { code: 257, sequence: b"zz" });
        log
    }

    #[test]
    fn log_keeps_event_order() {
        let log = sample_log();
        assert_eq!(log.events.len(), 5);
        assert_eq!(log.events[1], RecordedEvent::Widened { width: 10 });
        assert_eq!(log.events[3], RecordedEvent::Reset);
    }

    #[test]
    fn helpers_filter_by_kind() {
        let log = sample_log();
        assert_eq!(
            log.assignments(),
            vec![(511, b"xy".to_vec()), (512, b"yz".to_vec()), (257, b"zz".to_vec())]
        );
        assert_eq!(log.widenings(), vec![10]);
        assert_eq!(log.resets(), 1);
        assert_eq!(log.lifecycle(), vec![RecordedEvent::Widened { width: 10 }, RecordedEvent::Reset]);
    }

    #[test]
    fn observers_work_through_trait_objects() {
        let mut noop = NoopObserver;
        let mut log = EventLog::new();
        for observer in [&mut noop as &mut dyn CodecObserver, &mut log] {
            observer.on_event(CodecEvent::Frozen { width: 12 });
        }
        assert_eq!(log.events, vec![RecordedEvent::Frozen { width: 12 }]);
    }
}
