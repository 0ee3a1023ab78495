use crate::chains::{parse_pdb, ChainSequences};
use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read a whole PDB file into memory.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so stray
/// characters in free-text records do not prevent reading the ATOM records.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8_lossy(&bytes).into_owned();
    if text.trim().is_empty() {
        return Err(Error::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(text)
}

/// Open a PDB file with [`read_input`] and parse its ATOM records.
pub fn load_model(path: &Path) -> Result<ChainSequences> {
    let text = read_input(path)?;
    parse_pdb(&text)
}

/// Write the rendered sequence to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let to_error = |source: std::io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fixture() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/1crn_fragment.pdb");

        let chains = load_model(Path::new(&path)).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains.residue_count(), 10);
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("nope.pdb")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InputRead { .. }));
    }

    #[test]
    fn empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdb");
        std::fs::write(&path, "  \n\n").unwrap();

        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.pdb");
        std::fs::write(&path, b"REMARK   1 caf\xe9\nEND\n").unwrap();

        let text = read_input(&path).unwrap();
        assert!(text.starts_with("REMARK"));
    }

    #[test]
    fn invalid_utf8_in_atom_columns_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stray_byte.pdb");
        let mut bytes = b"ATOM      1 \xe9CA  ALA  1234       1.000   2.000   3.000  1.00  0.00           C\n".to_vec();
        bytes.extend_from_slice(
            b"ATOM      2  CA  GLY B   7       1.000   2.000   3.000  1.00  0.00           C\n",
        );
        std::fs::write(&path, bytes).unwrap();

        let chains = load_model(&path).unwrap();
        assert_eq!(chains.chain_ids().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(chains.get("B").unwrap().residue_names(), vec!["GLY"]);
    }

    #[test]
    fn write_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.txt");

        write_output(&path, "MKV\n").unwrap();
        write_output(&path, "AR\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AR\n");
    }

    #[test]
    fn unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("seq.txt");

        let err = write_output(&path, "A\n").unwrap_err();
        assert!(matches!(err, Error::Output { .. }));
    }
}
