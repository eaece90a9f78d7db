#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastqRecord {
    /// Identifier line without the leading `@`.
    pub header: String,
    /// Upper-cased bases, `*` and `.` read as `N`.
    pub seq: Vec<u8>,
    /// The `+` line, including the `+`. Empty if the record had none.
    pub qual_header: String,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
