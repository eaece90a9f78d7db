use crate::error::FastqError;
use std::fmt;

/// Quality-score encoding of a FASTQ stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Sanger / Illumina 1.8+, offset 33.
    Phred33,
    /// Illumina 1.3+, offset 64.
    Phred64,
    /// Illumina 1.5+: Phred+64 where `B` marks an unusable score.
    Phred64B,
    /// Solexa / Illumina 1.0 scale, offset 64.
    Solexa,
}

impl Encoding {
    /// Whether records can be written in this encoding.
    pub fn is_output(self) -> bool {
        matches!(self, Encoding::Phred33 | Encoding::Phred64)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Phred33 => "Phred+33",
            Encoding::Phred64 => "Phred+64",
            Encoding::Phred64B => "Phred+64 (B sentinel)",
            Encoding::Solexa => "Solexa",
        })
    }
}

/// A quality re-encoding rule. Identity conversions have no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    P33ToP64,
    P64ToP33,
    SolexaToP64,
    SolexaToP33,
    P64BToP64,
    P64BToP33,
}

impl Conversion {
    pub const ALL: [Conversion; 6] = [
        Conversion::P33ToP64,
        Conversion::P64ToP33,
        Conversion::SolexaToP64,
        Conversion::SolexaToP33,
        Conversion::P64BToP64,
        Conversion::P64BToP33,
    ];

    /// Pick the rule for an `input` → `output` pair.
    ///
    /// `Ok(None)` means the encodings already agree and quality strings pass
    /// through untouched. A missing `input` is read as "already in `output`".
    pub fn resolve(
        input: Option<Encoding>,
        output: Encoding,
    ) -> Result<Option<Conversion>, FastqError> {
        use Encoding::*;

        let input = input.unwrap_or(output);
        let rule = match (input, output) {
            (Phred33, Phred64) => Some(Conversion::P33ToP64),
            (Phred64B, Phred64) => Some(Conversion::P64BToP64),
            (Solexa, Phred64) => Some(Conversion::SolexaToP64),
            (Phred64, Phred64) => None,
            (Phred64, Phred33) => Some(Conversion::P64ToP33),
            (Solexa, Phred33) => Some(Conversion::SolexaToP33),
            (Phred64B, Phred33) => Some(Conversion::P64BToP33),
            (Phred33, Phred33) => None,
            (_, Phred64B | Solexa) => {
                return Err(FastqError::UnsupportedCombination { input, output });
            }
        };
        Ok(rule)
    }

    pub fn source(self) -> Encoding {
        match self {
            Conversion::P33ToP64 => Encoding::Phred33,
            Conversion::P64ToP33 => Encoding::Phred64,
            Conversion::SolexaToP64 | Conversion::SolexaToP33 => Encoding::Solexa,
            Conversion::P64BToP64 | Conversion::P64BToP33 => Encoding::Phred64B,
        }
    }

    pub fn target(self) -> Encoding {
        match self {
            Conversion::P33ToP64 | Conversion::SolexaToP64 | Conversion::P64BToP64 => {
                Encoding::Phred64
            }
            Conversion::P64ToP33 | Conversion::SolexaToP33 | Conversion::P64BToP33 => {
                Encoding::Phred33
            }
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}
