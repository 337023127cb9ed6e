//! Property-based tests for parsing and chaos evaluation

use std::sync::Arc;

use application::{AckGenerator, ChaosService, RandomSource, parse_message};
use domain::{ChaosConfig, LatencyConfig};
use proptest::prelude::*;

/// Random source that always returns the same roll
struct FixedRoll(i32);

impl RandomSource for FixedRoll {
    fn next_int(&self, _low: i32, _high: i32) -> i32 {
        self.0
    }
}

fn header_with_control_id(control_id: &str) -> String {
    format!("MSH|^~\\&|SENDER|FAC|RECV|FAC|20260101120000||ORU^R01|{control_id}|P|2.4")
}

// ============================================================================
// Parser Property Tests
// ============================================================================

mod parser_tests {
    use super::*;

    proptest! {
        #[test]
        fn control_id_is_extracted_and_trimmed(
            control_id in "[A-Za-z0-9]{1,20}",
            padding in "[ \t]{0,3}"
        ) {
            let raw = header_with_control_id(&format!("{padding}{control_id}{padding}"));
            let outcome = parse_message(&raw);
            prop_assert_eq!(outcome.control_id(), Some(control_id.as_str()));
        }

        #[test]
        fn separators_do_not_change_outcome(
            control_id in "[A-Z0-9]{1,12}",
            separator in prop_oneof![Just("\r"), Just("\n"), Just("\r\n")]
        ) {
            let raw = format!("{}{separator}PID|1||42", header_with_control_id(&control_id));
            let outcome = parse_message(&raw);
            prop_assert_eq!(outcome.control_id(), Some(control_id.as_str()));
        }

        #[test]
        fn non_msh_first_segment_is_always_invalid(
            segment in "(PID|OBX|EVN|PV1)\\|[A-Z0-9|]{0,30}"
        ) {
            prop_assert!(!parse_message(&segment).is_valid());
        }

        #[test]
        fn short_headers_are_invalid(field_count in 1usize..10) {
            let raw = std::iter::once("MSH")
                .chain(std::iter::repeat_n("X", field_count - 1))
                .collect::<Vec<_>>()
                .join("|");
            prop_assert!(!parse_message(&raw).is_valid());
        }

        #[test]
        fn parser_never_panics(raw in "\\PC{0,200}") {
            let _ = parse_message(&raw);
        }
    }
}

// ============================================================================
// Chaos Property Tests
// ============================================================================

mod chaos_tests {
    use super::*;

    proptest! {
        #[test]
        fn fails_exactly_when_roll_is_below_rate(rate in 0i32..=100, roll in 0i32..100) {
            let service = ChaosService::new(Arc::new(FixedRoll(roll)));
            let config = ChaosConfig {
                enabled: true,
                failure_rate_percent: rate,
                ..ChaosConfig::default()
            };
            prop_assert_eq!(service.evaluate(&config).should_fail, roll < rate);
        }

        #[test]
        fn disabled_chaos_never_fails(rate in 0i32..=100, roll in 0i32..100) {
            let service = ChaosService::new(Arc::new(FixedRoll(roll)));
            let config = ChaosConfig {
                enabled: false,
                failure_rate_percent: rate,
                ..ChaosConfig::default()
            };
            prop_assert!(!service.evaluate(&config).should_fail);
        }

        #[test]
        fn delay_follows_latency_switch(enabled in any::<bool>(), delay_ms in 0i32..=30_000) {
            let service = ChaosService::new(Arc::new(FixedRoll(99)));
            let config = ChaosConfig {
                latency: LatencyConfig { enabled, delay_ms },
                ..ChaosConfig::default()
            };
            let expected = if enabled { u64::try_from(delay_ms).unwrap() } else { 0 };
            prop_assert_eq!(service.evaluate(&config).delay_ms, expected);
        }

        #[test]
        fn numeric_error_types_become_status(code in 100u16..600) {
            let service = ChaosService::new(Arc::new(FixedRoll(0)));
            let config = ChaosConfig {
                enabled: true,
                failure_rate_percent: 100,
                default_error_type: code.to_string(),
                ..ChaosConfig::default()
            };
            prop_assert_eq!(service.evaluate(&config).status_code, code);
        }
    }
}

// ============================================================================
// Acknowledgment Property Tests
// ============================================================================

mod ack_tests {
    use super::*;

    proptest! {
        #[test]
        fn ack_echoes_control_id(control_id in "[A-Za-z0-9_-]{1,30}") {
            let ack = AckGenerator::default().generate(&control_id, "AA").unwrap();
            let segments: Vec<&str> = ack.split('\r').collect();
            prop_assert_eq!(segments.len(), 2);
            let msa: Vec<&str> = segments[1].split('|').collect();
            prop_assert_eq!(msa[2], control_id.as_str());
        }

        #[test]
        fn parsed_control_id_roundtrips_through_ack(control_id in "[A-Z0-9]{1,16}") {
            let outcome = parse_message(&header_with_control_id(&control_id));
            let parsed = outcome.control_id().unwrap();
            let ack = AckGenerator::default().generate(parsed, "AA").unwrap();
            let expected_suffix = format!("MSA|AA|{control_id}|Message accepted");
            prop_assert!(ack.ends_with(&expected_suffix));
        }
    }
}
