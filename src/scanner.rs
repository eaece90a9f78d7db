//! Line-driven FASTQ record state machine shared by the sync and async readers.

use crate::record::FastqRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningForHeader,
    InSequence,
    InQuality,
}

/// Accumulates one record at a time from lines with terminators removed.
#[derive(Debug)]
pub(crate) struct RecordScanner {
    state: State,
    pending: FastqRecord,
}

impl RecordScanner {
    pub(crate) fn new() -> Self {
        Self {
            state: State::ScanningForHeader,
            pending: FastqRecord::default(),
        }
    }

    /// True once an `@` header has been seen.
    pub(crate) fn found_header(&self) -> bool {
        self.state != State::ScanningForHeader
    }

    /// Feed one line. Returns the previous record when `line` starts a new one.
    pub(crate) fn push_line(&mut self, line: &str) -> Option<FastqRecord> {
        if let Some(header) = line.strip_prefix('@') {
            let next = FastqRecord {
                header: header.trim_end().to_string(),
                ..FastqRecord::default()
            };
            let prev = std::mem::replace(&mut self.pending, next);
            let was = std::mem::replace(&mut self.state, State::InSequence);
            return (was != State::ScanningForHeader).then_some(prev);
        }

        match self.state {
            State::ScanningForHeader => {}
            State::InSequence if line.starts_with('+') => {
                self.pending.qual_header = line.trim_end().to_string();
                self.pending.qual.clear();
                self.state = State::InQuality;
            }
            State::InSequence => push_sequence(&mut self.pending.seq, line),
            State::InQuality => self
                .pending
                .qual
                .extend(line.bytes().filter(|b| !b.is_ascii_whitespace())),
        }
        None
    }

    /// End of stream: the pending record, if any header was seen.
    pub(crate) fn finish(&mut self) -> Option<FastqRecord> {
        if !self.found_header() {
            return None;
        }
        self.state = State::ScanningForHeader;
        Some(std::mem::take(&mut self.pending))
    }
}

fn push_sequence(seq: &mut Vec<u8>, line: &str) {
    seq.extend(
        line.bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| match b {
                b'*' | b'.' => b'N',
                _ => b.to_ascii_uppercase(),
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> Vec<FastqRecord> {
        let mut s = RecordScanner::new();
        let mut out: Vec<_> = lines.iter().filter_map(|l| s.push_line(l)).collect();
        out.extend(s.finish());
        out
    }

    #[test]
    fn noise_before_first_header_is_dropped() {
        let recs = scan(&["junk", "+more junk", "@r1", "AC", "+", "!!"]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].header, "r1");
        assert_eq!(recs[0].seq, b"AC");
        assert_eq!(recs[0].qual, b"!!");
    }

    #[test]
    fn no_header_yields_nothing() {
        let mut s = RecordScanner::new();
        assert!(s.push_line("ACGT").is_none());
        assert!(!s.found_header());
        assert!(s.finish().is_none());
    }

    #[test]
    fn plus_line_inside_quality_is_quality() {
        let recs = scan(&["@r1", "ACGTAC", "+r1", "+!!", "!!!"]);
        assert_eq!(recs[0].qual_header, "+r1");
        assert_eq!(recs[0].qual, b"+!!!!!");
    }

    #[test]
    fn header_directly_after_header() {
        let recs = scan(&["@a", "@b", "GG"]);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].header, "a");
        assert!(recs[0].seq.is_empty());
        assert!(recs[0].qual_header.is_empty());
        assert_eq!(recs[1].seq, b"GG");
    }

    #[test]
    fn sequence_whitespace_and_case() {
        let recs = scan(&["@r", " a c\tg ", "t.*"]);
        assert_eq!(recs[0].seq, b"ACGTNN");
    }
}
