//! Output parsing for both dig output shapes
//!
//! `+short` output is one answer per line and is taken verbatim. The full
//! report is scanned line by line with a two-state machine: the answer
//! section is a tabular block with no end marker, so it is treated as ended
//! at the first line that no longer starts with the queried domain.
//! Malformed lines never fail a parse, they just degrade the result.

use crate::types::{OutputMode, QueryResult, QueryType};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref QUERY_TIME_RE: Regex = Regex::new(r"Query time: (\d+) msec").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section { Seeking, InAnswers }

/// Parse decoded, trailing-whitespace-stripped dig output. `domain` must
/// already be lowercased; the answer-section prefix match is case-sensitive.
pub fn parse_output(
    output: &str,
    mode: OutputMode,
    domain: &str,
    query_type: QueryType,
) -> QueryResult {
    let mut result = QueryResult::default();
    if output.is_empty() {
        return result;
    }

    match mode {
        OutputMode::Short => {
            // dig guarantees clean one-record-per-line output here
            result.records = output.split('\n').map(str::to_string).collect();
        }
        OutputMode::QueryTime => {
            let answer_re = answer_pattern(query_type);
            let mut section = Section::Seeking;

            for line in output.split('\n') {
                if line.contains("Query time:") {
                    // Overwrites on every sighting; a malformed line clears
                    // the observation rather than keeping a stale value
                    result.query_time_ms = QUERY_TIME_RE
                        .captures(line)
                        .and_then(|c| c[1].parse().ok());
                } else if line.contains("ANSWER SECTION") {
                    section = Section::InAnswers;
                } else if section == Section::InAnswers {
                    if line.starts_with(domain) {
                        if let Some(c) = answer_re.captures(line) {
                            result.records.push(c[1].to_string());
                        }
                        // No IN/<type> marker: skip the line, stay in section
                    } else {
                        section = Section::Seeking;
                    }
                }
            }
        }
    }
    result
}

fn answer_pattern(query_type: QueryType) -> Regex {
    Regex::new(&format!(r".*IN\t+{}\t+(.*)$", query_type.name()))
        .unwrap_or_else(|_| Regex::new(r"$never").unwrap())
}
