//! Sequence rendering.
//!
//! Turns the per-chain residues produced by [`crate::parse_pdb`] into the final
//! output text, in either one-letter or three-letter notation and on a single
//! line or one residue per line.

use crate::chains::{Chain, ChainSequences};
use crate::error::Error;
use crate::residues::{Residue, ResidueExt};
use std::str::FromStr;

/// Notation used for each residue in the output.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodeFormat {
    /// One-letter amino acid codes, unknown residues become `X`
    #[default]
    OneLetter,
    /// Residue names as they appear in the file
    ThreeLetter,
}

/// Layout of the output text.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// The whole sequence on one line
    #[default]
    SingleLine,
    /// One residue per line, separated by blank lines
    MultiLine,
}

impl std::fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CodeFormat::OneLetter => write!(f, "one-letter"),
            CodeFormat::ThreeLetter => write!(f, "three-letter"),
        }
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputStyle::SingleLine => write!(f, "single-line"),
            OutputStyle::MultiLine => write!(f, "multi-line"),
        }
    }
}

impl FromStr for CodeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-letter" => Ok(CodeFormat::OneLetter),
            "three-letter" => Ok(CodeFormat::ThreeLetter),
            _ => Err(Error::invalid_format(
                "code format",
                s,
                "one-letter, three-letter",
            )),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-line" => Ok(OutputStyle::SingleLine),
            "multi-line" => Ok(OutputStyle::MultiLine),
            _ => Err(Error::invalid_format(
                "output style",
                s,
                "single-line, multi-line",
            )),
        }
    }
}

/// A residue name missing from the one-letter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResidue {
    /// Chain the residue belongs to
    pub chain_id: String,
    /// Residue sequence number
    pub seq_num: i32,
    /// Residue name as found in the file
    pub name: String,
}

impl UnknownResidue {
    fn new(chain: &Chain, residue: &Residue) -> Self {
        Self {
            chain_id: chain.id().to_string(),
            seq_num: residue.seq_num,
            name: residue.name.clone(),
        }
    }
}

impl std::fmt::Display for UnknownResidue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown or non-standard residue '{}' at chain {} residue {} represented as 'X'",
            self.name, self.chain_id, self.seq_num
        )
    }
}

/// Rendered output text and the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSequence {
    /// Text to write to the target file, always ending in a newline
    pub text: String,
    /// One entry per unknown residue occurrence, in output order
    pub warnings: Vec<UnknownResidue>,
}

/// Render all chains as a single sequence.
///
/// Chains are concatenated in ascending chain ID order without any separator.
/// In one-letter mode every residue missing from the lookup table is written as
/// `X` and reported once per occurrence in [`FormattedSequence::warnings`];
/// three-letter mode copies names verbatim and never warns.
///
/// # Example
///
/// ```
/// use proseq::{format_sequence, parse_pdb, CodeFormat, OutputStyle};
///
/// let pdb = "\
/// ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00           C
/// ATOM      2  CA  ARG A   2       0.000   0.000   0.000  1.00  0.00           C
/// ATOM      3  CA  ASN A   3       0.000   0.000   0.000  1.00  0.00           C
/// ";
/// let chains = parse_pdb(pdb).unwrap();
/// let out = format_sequence(&chains, CodeFormat::OneLetter, OutputStyle::SingleLine);
/// assert_eq!(out.text, "ARN\n");
/// assert!(out.warnings.is_empty());
/// ```
pub fn format_sequence(
    sequences: &ChainSequences,
    code: CodeFormat,
    style: OutputStyle,
) -> FormattedSequence {
    let mut tokens: Vec<String> = Vec::with_capacity(sequences.residue_count());
    let mut warnings = Vec::new();

    for chain in sequences.iter() {
        for residue in chain.residues() {
            let token = match code {
                CodeFormat::OneLetter => residue
                    .one_letter()
                    .unwrap_or_else(|| {
                        warnings.push(UnknownResidue::new(chain, residue));
                        'X'
                    })
                    .to_string(),
                CodeFormat::ThreeLetter => residue.name.clone(),
            };
            tokens.push(token);
        }
    }

    let separator = match (style, code) {
        (OutputStyle::SingleLine, CodeFormat::OneLetter) => "",
        (OutputStyle::SingleLine, CodeFormat::ThreeLetter) => " ",
        (OutputStyle::MultiLine, _) => "\n\n",
    };
    let mut text = tokens.join(separator);
    text.push('\n');

    FormattedSequence { text, warnings }
}

/// One-letter sequence of a single chain, with unknown residues as `X`.
pub fn chain_sequence(chain: &Chain) -> String {
    chain
        .residues()
        .map(|res| res.one_letter().unwrap_or('X'))
        .collect()
}
