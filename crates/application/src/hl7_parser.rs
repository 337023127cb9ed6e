//! HL7v2 message header parsing
//!
//! Extracts just enough from an inbound message to correlate it with an
//! acknowledgment: the message control id in MSH-10.

use domain::ParseOutcome;

/// Literal that opens the message header segment
const MSH_PREFIX: &str = "MSH";

/// Position of MSH-10 after splitting on `|`
///
/// MSH-1 is the field separator itself, so the split array is shifted by one
/// relative to the HL7 field numbers.
const MESSAGE_CONTROL_ID_INDEX: usize = 9;

/// Parse a raw message and extract its message control id
///
/// Segments may be separated by `\r`, `\n` or `\r\n`. Only the first
/// non-empty segment is inspected.
pub fn parse_message(raw: &str) -> ParseOutcome {
    if raw.trim().is_empty() {
        return ParseOutcome::invalid("message body is empty");
    }

    let Some(header) = raw.split(['\r', '\n']).find(|segment| !segment.is_empty()) else {
        return ParseOutcome::invalid("message does not begin with an MSH segment");
    };

    if !starts_with_msh(header) {
        return ParseOutcome::invalid("message does not begin with an MSH segment");
    }

    let fields: Vec<&str> = header.split('|').collect();

    let Some(control_id) = fields.get(MESSAGE_CONTROL_ID_INDEX) else {
        return ParseOutcome::invalid(format!(
            "MSH segment has only {} fields; MSH-10 (message control id) not present",
            fields.len()
        ));
    };

    let control_id = control_id.trim();
    if control_id.is_empty() {
        return ParseOutcome::invalid("MSH-10 (message control id) is empty");
    }

    ParseOutcome::valid(control_id)
}

fn starts_with_msh(segment: &str) -> bool {
    segment
        .get(..MSH_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MSH_PREFIX))
}
