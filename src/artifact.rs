use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use ash::util::read_spv;

pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Reads a compiled artifact as SPIR-V words, normalised to host byte order.
pub fn load_spirv(path: &Path) -> io::Result<Vec<u32>> {
    let mut reader = BufReader::new(File::open(path)?);
    let words = read_spv(&mut reader)?;
    if words.first() != Some(&SPIRV_MAGIC) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "missing SPIR-V magic number",
        ));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn module_bytes(words: &[u32], to_bytes: fn(u32) -> [u8; 4]) -> Vec<u8> {
        words.iter().flat_map(|w| to_bytes(*w)).collect()
    }

    #[test]
    fn reads_little_endian_module() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vert.spv");
        fs::write(&path, module_bytes(&[SPIRV_MAGIC, 0x0001_0000, 7], u32::to_le_bytes)).unwrap();

        assert_eq!(load_spirv(&path).unwrap(), vec![SPIRV_MAGIC, 0x0001_0000, 7]);
    }

    #[test]
    fn reads_big_endian_module() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frag.spv");
        fs::write(&path, module_bytes(&[SPIRV_MAGIC, 42], u32::to_be_bytes)).unwrap();

        assert_eq!(load_spirv(&path).unwrap(), vec![SPIRV_MAGIC, 42]);
    }

    #[test]
    fn rejects_truncated_module() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vert.spv");
        fs::write(&path, [0x03, 0x02, 0x23, 0x07, 0x00, 0x01]).unwrap();

        let err = load_spirv(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vert.spv");
        fs::write(&path, b"void main() {}\n\n\n\n").unwrap();

        assert!(load_spirv(&path).is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_spirv(&dir.path().join("frag.spv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
