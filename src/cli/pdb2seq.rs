use clap::Parser;
use proseq::{chain_sequence, format_sequence, load_model, write_output, CodeFormat, OutputStyle};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "proseq",
    version,
    about = "Extract the protein sequence from a PDB file and write it to a target file"
)]
pub(crate) struct Args {
    /// Path to the PDB source file
    source: PathBuf,

    /// Path to the target file for the sequence
    target: PathBuf,

    /// Output format of the amino acid codes
    #[arg(long, value_enum, default_value_t = CodeFormat::OneLetter)]
    format: CodeFormat,

    /// Output style: all codes on one line, or one code per line
    #[arg(long = "output-style", value_enum, default_value_t = OutputStyle::SingleLine)]
    output_style: OutputStyle,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Maximum log level selected by `--verbose` and `--quiet`.
    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

pub(crate) fn run(args: &Args) -> proseq::Result<()> {
    trace!("{args:?}");
    info!("Processing PDB file {}", args.source.display());
    info!(
        "Output format: {}, output style: {}",
        args.format, args.output_style
    );

    let chains = load_model(&args.source)?;
    if chains.is_empty() {
        info!("No ATOM records found in {}", args.source.display());
    } else {
        debug!(
            "Loaded {} chains with {} residues",
            chains.len(),
            chains.residue_count()
        );
        for chain in chains.iter() {
            debug!(">{}\n{}", chain.id(), chain_sequence(chain));
        }
    }

    let formatted = format_sequence(&chains, args.format, args.output_style);
    formatted.warnings.iter().for_each(|w| warn!("{w}"));

    write_output(&args.target, &formatted.text)?;
    info!("Sequence written to {}", args.target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["proseq", "in.pdb", "out.txt"]).unwrap();
        assert_eq!(args.source, PathBuf::from("in.pdb"));
        assert_eq!(args.target, PathBuf::from("out.txt"));
        assert_eq!(args.format, CodeFormat::OneLetter);
        assert_eq!(args.output_style, OutputStyle::SingleLine);
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn options() {
        let args = Args::try_parse_from([
            "proseq",
            "in.pdb",
            "out.txt",
            "--format",
            "three-letter",
            "--output-style",
            "multi-line",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.format, CodeFormat::ThreeLetter);
        assert_eq!(args.output_style, OutputStyle::MultiLine);
        assert_eq!(args.log_level(), LevelFilter::DEBUG);

        let args = Args::try_parse_from(["proseq", "in.pdb", "out.txt", "-q"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = Args::try_parse_from(["proseq", "in.pdb", "out.txt", "--format", "two-letter"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

        let err = Args::try_parse_from(["proseq", "in.pdb"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Args::try_parse_from(["proseq", "in.pdb", "out.txt", "-q", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
