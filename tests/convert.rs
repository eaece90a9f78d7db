use fastq_requal::{Conversion, Encoding, FastqError, FastqReader, FastqWriter, convert};
use std::io::BufReader;

fn run(input: &'static str, conversion: Option<Conversion>) -> Result<String, FastqError> {
    let reader = FastqReader::from_bufread(BufReader::new(input.as_bytes()));
    let mut writer = FastqWriter::new(Vec::new());
    convert(reader, &mut writer, conversion)?;
    Ok(String::from_utf8(writer.into_inner().unwrap()).unwrap())
}

#[test]
fn phred33_to_phred64_end_to_end() {
    let conversion = Conversion::resolve(Some(Encoding::Phred33), Encoding::Phred64).unwrap();
    let out = run("@read1\nACGT\n+read1\n!#$%\n", conversion).unwrap();
    assert_eq!(out, "@read1\nACGT\n+read1\n@BCD\n");
}

#[test]
fn wrapped_input_is_written_in_four_lines() {
    let input = "\
header noise
@r1 lane 1
ac
gt
+
hh
hh
@r2
N
";
    let out = run(input, Some(Conversion::P64ToP33)).unwrap();
    assert_eq!(out, "@r1 lane 1\nACGT\n+\nIIII\n@r2\nN\n+\n\n");
}

#[test]
fn identity_copies_quality() {
    let conversion = Conversion::resolve(None, Encoding::Phred33).unwrap();
    assert_eq!(conversion, None);
    let out = run("@r\nAC\n+\n ~x\n", conversion).unwrap();
    assert_eq!(out, "@r\nAC\n+\n~x\n");
}

#[test]
fn bad_symbol_reports_record_index() {
    let input = "@a\nA\n+\nI\n@b\nAC\n+\nI~\n";
    match run(input, Some(Conversion::P33ToP64)) {
        Err(FastqError::UnsupportedSymbol {
            record,
            symbol,
            position,
            conversion,
        }) => {
            assert_eq!(record, 2);
            assert_eq!(symbol, b'~');
            assert_eq!(position, 1);
            assert_eq!(conversion, Conversion::P33ToP64);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn headerless_input_aborts() {
    assert!(matches!(
        run("no records here\n", None),
        Err(FastqError::MalformedStream { .. })
    ));
}

#[test]
fn stats_are_counted() {
    let input = &b"@a\nACG\n+\n!!!\n@b\nA\n+\n!\n"[..];
    let reader = FastqReader::from_bufread(BufReader::new(input));
    let mut writer = FastqWriter::new(Vec::new());
    let stats = convert(reader, &mut writer, Some(Conversion::P33ToP64)).unwrap();
    assert_eq!(stats.records, 2);
    assert_eq!(stats.bases, 4);
}

#[test]
fn conversion_table_for_every_pair() {
    use Encoding::*;
    let cases = [
        (Phred33, Phred64, Some(Conversion::P33ToP64)),
        (Phred64B, Phred64, Some(Conversion::P64BToP64)),
        (Solexa, Phred64, Some(Conversion::SolexaToP64)),
        (Phred64, Phred64, None),
        (Phred64, Phred33, Some(Conversion::P64ToP33)),
        (Solexa, Phred33, Some(Conversion::SolexaToP33)),
        (Phred64B, Phred33, Some(Conversion::P64BToP33)),
        (Phred33, Phred33, None),
    ];
    for (input, output, expected) in cases {
        assert_eq!(Conversion::resolve(Some(input), output).unwrap(), expected);
    }
}

#[test]
fn unsupported_output_encoding() {
    let err = Conversion::resolve(Some(Encoding::Phred33), Encoding::Solexa).unwrap_err();
    assert!(matches!(
        err,
        FastqError::UnsupportedCombination {
            input: Encoding::Phred33,
            output: Encoding::Solexa
        }
    ));
    assert!(Conversion::resolve(None, Encoding::Phred64B).is_err());
}
