//! `fastq-requal`: re-encode FASTQ quality scores.
//!
//! ```bash
//! fastq-requal --P33in --P64out < in.fastq > out.fastq
//! fastq-requal --P64SOLin --P33out reads.fastq.gz -o reads.p33.fastq
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use fastq_requal::{Conversion, Encoding, FastqError, FastqReader, FastqWriter, convert};

#[derive(Parser)]
#[command(name = "fastq-requal", version)]
#[command(about = "Convert FASTQ quality scores between Phred+33, Phred+64, Phred+64 (B) and Solexa")]
#[command(group(ArgGroup::new("input_encoding").args(["p33_in", "p64_in", "p64b_in", "solexa_in"])))]
#[command(group(ArgGroup::new("output_encoding").required(true).args(["p33_out", "p64_out"])))]
struct Args {
    /// Input FASTQ file, plain or gzip (use '-' or omit for stdin)
    input: Option<PathBuf>,

    /// Output FASTQ file (use '-' or omit for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input is Phred+33
    #[arg(long = "P33in")]
    p33_in: bool,

    /// Input is Phred+64
    #[arg(long = "P64in")]
    p64_in: bool,

    /// Input is Phred+64 with 'B' marking unusable scores
    #[arg(long = "P64Bin")]
    p64b_in: bool,

    /// Input is Solexa (Illumina 1.0)
    #[arg(long = "P64SOLin")]
    solexa_in: bool,

    /// Write Phred+33
    #[arg(long = "P33out")]
    p33_out: bool,

    /// Write Phred+64
    #[arg(long = "P64out")]
    p64_out: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn input_encoding(&self) -> Option<Encoding> {
        [
            (self.p33_in, Encoding::Phred33),
            (self.p64_in, Encoding::Phred64),
            (self.p64b_in, Encoding::Phred64B),
            (self.solexa_in, Encoding::Solexa),
        ]
        .into_iter()
        .find_map(|(set, enc)| set.then_some(enc))
    }

    fn output_encoding(&self) -> Encoding {
        if self.p33_out {
            Encoding::Phred33
        } else {
            Encoding::Phred64
        }
    }
}

/// `None` for stdin/stdout (argument omitted or `-`).
fn file_arg(arg: &Option<PathBuf>) -> Option<&Path> {
    arg.as_deref().filter(|p| p.as_os_str() != "-")
}

fn run(args: &Args) -> Result<()> {
    let conversion = Conversion::resolve(args.input_encoding(), args.output_encoding())?;

    let reader = match file_arg(&args.input) {
        Some(p) => FastqReader::from_path(p)
            .with_context(|| format!("cannot open input {}", p.display()))?,
        None => FastqReader::from_bufread(BufReader::new(io::stdin())),
    };

    let out: Box<dyn Write> = match file_arg(&args.output) {
        Some(p) => Box::new(
            File::create(p).with_context(|| format!("cannot create output {}", p.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = FastqWriter::new(out);

    convert(reader, &mut writer, conversion)?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<FastqError>(),
        Some(FastqError::Write { source, .. }) if source.kind() == io::ErrorKind::BrokenPipe
    )
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
