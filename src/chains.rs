use crate::error::{Error, Result};
use crate::residues::Residue;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// A polymer chain and its residues in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    id: String,
    residues: Vec<Residue>,
    seen: HashSet<i32>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// The chain identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a residue unless one with the same sequence number is already present.
    /// Returns whether the residue was added.
    pub fn add_residue(&mut self, residue: Residue) -> bool {
        if !self.seen.insert(residue.seq_num) {
            return false;
        }
        self.residues.push(residue);
        true
    }

    /// Residues in the order their sequence numbers first appeared.
    pub fn residues(&self) -> impl Iterator<Item = &Residue> {
        self.residues.iter()
    }

    /// Residue names in sequence order.
    pub fn residue_names(&self) -> Vec<&str> {
        self.residues.iter().map(|res| res.name.as_str()).collect()
    }

    /// Number of distinct residues.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }
}

/// Per-chain residue sequences parsed from a PDB file, keyed by chain ID.
///
/// Iteration always follows ascending, case-sensitive chain ID order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSequences {
    chains: BTreeMap<String, Chain>,
}

impl ChainSequences {
    /// Number of chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether no ATOM record produced a chain.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Look up a chain by its identifier.
    pub fn get(&self, chain_id: &str) -> Option<&Chain> {
        self.chains.get(chain_id)
    }

    /// Chain identifiers in sorted order.
    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// Chains in sorted identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.chains.values()
    }

    /// Total number of residues over all chains.
    pub fn residue_count(&self) -> usize {
        self.chains.values().map(Chain::residue_count).sum()
    }

    fn chain_mut(&mut self, chain_id: &str) -> &mut Chain {
        self.chains
            .entry(chain_id.to_string())
            .or_insert_with(|| Chain::new(chain_id))
    }
}

/// The fields of an ATOM record needed to rebuild a sequence.
#[derive(Debug, PartialEq, Eq)]
struct AtomRecord<'a> {
    res_name: &'a str,
    chain_id: &'a str,
    res_seq: i32,
}

/// Build per-chain residue sequences from the ATOM records of a PDB file.
///
/// Only records named `ATOM` are read; HETATM and every other record type are
/// ignored. A residue is added the first time its sequence number shows up in
/// a chain, and any later atoms with that number are ignored even if they carry
/// a different residue name. ATOM lines with unreadable columns are skipped.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text contains NUL bytes, which means a
/// binary or compressed file was passed in.
///
/// # Example
///
/// ```
/// use proseq::parse_pdb;
///
/// let pdb = "\
/// ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
/// ATOM      2  CA  MET A   1      26.266  25.413   2.842  1.00 10.38           C
/// ATOM      9  N   GLN A   2      26.913  26.639  -3.213  1.00  9.62           N
/// ";
/// let chains = parse_pdb(pdb).unwrap();
/// assert_eq!(chains.get("A").unwrap().residue_names(), vec!["MET", "GLN"]);
/// ```
pub fn parse_pdb(text: &str) -> Result<ChainSequences> {
    if text.contains('\0') {
        return Err(Error::parse(
            "input contains NUL bytes, binary or compressed files are not supported",
        ));
    }

    let mut sequences = ChainSequences::default();
    for (idx, line) in text.lines().enumerate() {
        if record_name(line) != "ATOM" {
            continue;
        }

        match parse_atom_record(line) {
            Ok(record) => {
                let added = sequences
                    .chain_mut(record.chain_id)
                    .add_residue(Residue::new(record.res_seq, record.res_name));
                if added {
                    trace!(
                        "Chain {} residue {} {}",
                        record.chain_id,
                        record.res_seq,
                        record.res_name
                    );
                }
            }
            Err(reason) => debug!("Skipping ATOM record on line {}: {reason}", idx + 1),
        }
    }

    Ok(sequences)
}

/// Record name from columns 1-6 with trailing blanks removed.
///
/// Atom serials of 100000 and above spill into columns 5-6 (`ATOM 100000`),
/// so digits after `ATOM` still name an ATOM record.
fn record_name(line: &str) -> &str {
    let end = line.len().min(6);
    let name = line.get(..end).unwrap_or_default().trim_end();
    match name.strip_prefix("ATOM") {
        Some(rest) if rest.trim_start().bytes().all(|b| b.is_ascii_digit()) => "ATOM",
        _ => name,
    }
}

fn parse_atom_record(line: &str) -> std::result::Result<AtomRecord<'_>, &'static str> {
    // Columns are byte offsets, so anything wider than a byte before column 27
    // (including U+FFFD from a lossy decode) would shift the fields
    let fixed = &line.as_bytes()[..line.len().min(26)];
    if !fixed.is_ascii() {
        return Err("non-ASCII character in fixed columns");
    }

    // Residue name: 18-20, chain ID: 22, residue sequence number: 23-26
    let res_name = line
        .get(17..20)
        .ok_or("record too short for residue name")?
        .trim();
    let chain_id = line
        .get(21..22)
        .ok_or("record too short for chain identifier")?
        .trim();
    let res_seq = line
        .get(22..26)
        .ok_or("record too short for residue sequence number")?
        .trim();

    if res_name.is_empty() {
        return Err("blank residue name");
    }
    if chain_id.is_empty() {
        return Err("blank chain identifier");
    }
    let res_seq = res_seq
        .parse::<i32>()
        .map_err(|_| "invalid residue sequence number")?;

    Ok(AtomRecord {
        res_name,
        chain_id,
        res_seq,
    })
}
