/// A single residue as read from the ATOM records of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue sequence number (resSeq)
    pub seq_num: i32,
    /// Residue name exactly as it appears in the file, trimmed
    pub name: String,
}

impl Residue {
    /// Create a residue from its sequence number and name.
    pub fn new(seq_num: i32, name: impl Into<String>) -> Self {
        Self {
            seq_num,
            name: name.into(),
        }
    }
}

/// Residue code lookups.
pub trait ResidueExt {
    /// The residue one-letter code, or `None` if the name is not in the table.
    fn one_letter(&self) -> Option<char>;
}

impl ResidueExt for Residue {
    fn one_letter(&self) -> Option<char> {
        one_letter_code(&self.name)
    }
}

/// Look up the one-letter code of a residue name.
///
/// The lookup is case-insensitive and covers the 20 canonical amino acids,
/// selenocysteine and pyrrolysine, selenomethionine, the common protonation
/// state names used by force fields, and the IUPAC ambiguity codes.
/// `UNK` is a known name and maps to `X`.
pub fn one_letter_code(name: &str) -> Option<char> {
    let aa_code = match name.to_ascii_uppercase().as_str() {
        "ALA" => 'A',
        "ARG" | "ARN" => 'R',
        "ASN" => 'N',
        "ASP" | "ASH" => 'D',
        "CYS" | "CYX" | "CYM" => 'C',
        "GLN" => 'Q',
        "GLU" | "GLH" => 'E',
        "GLY" => 'G',
        "HIS" | "HID" | "HIE" | "HIP" | "HSD" | "HSE" | "HSP" => 'H',
        "ILE" => 'I',
        "LEU" => 'L',
        "LYS" | "LYN" => 'K',
        "MET" | "MSE" => 'M',
        "PHE" => 'F',
        "PRO" => 'P',
        "SER" => 'S',
        "THR" => 'T',
        "TRP" => 'W',
        "TYR" | "TYM" => 'Y',
        "VAL" => 'V',
        "SEC" => 'U',
        "PYL" => 'O',
        // Ambiguous residues
        "ASX" => 'B',
        "GLX" => 'Z',
        "XLE" => 'J',
        "UNK" => 'X',
        _ => return None,
    };

    Some(aa_code)
}
