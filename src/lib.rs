#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Proseq Library
//!
//! Reads the ATOM records of a PDB file, rebuilds the residue sequence of each
//! chain and renders the combined sequence as one-letter or three-letter codes.
//!
//! ```no_run
//! use proseq::{format_sequence, load_model, CodeFormat, OutputStyle};
//! use std::path::Path;
//!
//! let chains = load_model(Path::new("path/to/structure.pdb")).unwrap();
//! let out = format_sequence(&chains, CodeFormat::OneLetter, OutputStyle::SingleLine);
//! print!("{}", out.text);
//! ```

mod chains;
mod error;
mod residues;
mod sequences;
mod utils;

// Re-export key public types
pub use chains::{parse_pdb, Chain, ChainSequences};
pub use error::{Error, Result};
pub use residues::{one_letter_code, Residue, ResidueExt};
pub use sequences::{
    chain_sequence, format_sequence, CodeFormat, FormattedSequence, OutputStyle, UnknownResidue,
};
pub use utils::{load_model, read_input, write_output};
