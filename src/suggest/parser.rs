use crate::suggest::models::Suggestion;

/// Every reply is forced to exactly this many ranked entries.
pub const SUGGESTION_COUNT: usize = 5;

/// Fills the slots the model left empty.
pub const PLACEHOLDER: &str = "N/A";

// The model tends to open with 「...を5つ提案します。」 despite being told
// not to; everything up to and including the phrase is dropped.
const PREAMBLE_MARKER: &str = "提案します。";

enum ParseState {
    AwaitingEntry,
    AccumulatingReason,
}

/// Parse the free-text model reply into exactly five (station, reason)
/// pairs, in rank order.
///
/// A line starting with "<digit>. " opens a ranked entry and becomes its
/// station label verbatim; the lines that follow are space-joined into that
/// entry's reason until the next ranked line. Free text before the first
/// ranked line belongs to no entry and is dropped. Missing tail entries are
/// padded with N/A, extras beyond five are cut.
pub fn parse_reply(content: &str) -> Vec<Suggestion> {
    let body = match content.find(PREAMBLE_MARKER) {
        Some(idx) => content[idx + PREAMBLE_MARKER.len()..].trim(),
        None => content,
    };

    let mut stations: Vec<String> = Vec::new();
    let mut reasons: Vec<String> = Vec::new();
    let mut accumulator = String::new();
    let mut state = ParseState::AwaitingEntry;

    for line in body.lines() {
        if is_rank_line(line) {
            // Whatever accumulated since the previous ranked line is that
            // entry's reason, even when it is empty. Flushing
            // unconditionally keeps the two lists index-aligned.
            if let ParseState::AccumulatingReason = state {
                reasons.push(std::mem::take(&mut accumulator));
            }
            stations.push(line.to_string());
            state = ParseState::AccumulatingReason;
        } else {
            match state {
                ParseState::AwaitingEntry => {}
                ParseState::AccumulatingReason => {
                    accumulator.push_str(line);
                    accumulator.push(' ');
                }
            }
        }
    }

    if let ParseState::AccumulatingReason = state {
        reasons.push(accumulator);
    }

    while stations.len() < SUGGESTION_COUNT {
        stations.push(PLACEHOLDER.to_string());
    }
    while reasons.len() < SUGGESTION_COUNT {
        reasons.push(PLACEHOLDER.to_string());
    }
    stations.truncate(SUGGESTION_COUNT);
    reasons.truncate(SUGGESTION_COUNT);

    stations
        .into_iter()
        .zip(reasons)
        .map(|(station, reason)| Suggestion { station, reason })
        .collect()
}

fn is_rank_line(line: &str) -> bool {
    let b = line.as_bytes();
    b.len() >= 3 && b[0].is_ascii_digit() && b[1] == b'.' && b[2] == b' '
}
