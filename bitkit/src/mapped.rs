//! Memory-mapped files as byte sources
//!
//! A mapped file is a contiguous view, so comparing two files takes the
//! native compare path and hashing never copies the contents.

use std::fs::File;
use std::path::Path;

use bitkit_core::{BufferComparer, ByteSource, MemCompare};
use memmap2::{Mmap, MmapOptions};

use crate::Result;

/// Read-only mapping of a whole file
#[derive(Debug)]
pub struct MappedBuffer {
    // Zero-length files cannot be mapped on every platform
    mmap: Option<Mmap>,
}

impl MappedBuffer {
    /// Map the file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_file(&file)
    }

    /// Map an already opened file
    pub fn from_file(file: &File) -> Result<Self> {
        if file.metadata()?.len() == 0 {
            return Ok(Self { mmap: None });
        }

        // SAFETY: The mapping is read-only. Callers must not truncate or
        // rewrite the file while the map is alive, as with any mmap.
        let mmap = unsafe { MmapOptions::new().map(file)? };
        Ok(Self { mmap: Some(mmap) })
    }

    /// Mapped contents, empty for a zero-length file
    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or_default()
    }

    /// File length in bytes
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the file was empty when mapped
    pub fn is_empty(&self) -> bool {
        self.mmap.is_none()
    }
}

impl ByteSource for MappedBuffer {
    type Bytes<'a> = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn bytes(&self) -> Self::Bytes<'_> {
        self.as_slice().iter().copied()
    }

    fn byte_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

/// Hash the file at `path` with `comparer`
pub fn hash_file<M: MemCompare, P: AsRef<Path>>(
    comparer: &BufferComparer<M>,
    path: P,
) -> Result<i32> {
    let mapped = MappedBuffer::open(path)?;
    Ok(comparer.hash(&mapped))
}

/// Order two files by content with `comparer`
pub fn compare_files<M: MemCompare, P: AsRef<Path>, Q: AsRef<Path>>(
    comparer: &BufferComparer<M>,
    a: P,
    b: Q,
) -> Result<std::cmp::Ordering> {
    let a = MappedBuffer::open(a)?;
    let b = MappedBuffer::open(b)?;
    Ok(comparer.compare(&a, &b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use bitkit_core::hash::fnv;
    use bitkit_core::{Fidelity, HashSeed};
    use std::cmp::Ordering;
    use std::io::Write;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn with_contents(name: &str, contents: &[u8]) -> Self {
            let path = std::env::temp_dir().join(format!("bitkit-{}-{name}", std::process::id()));
            let mut file = File::create(&path).expect("create temp file");
            file.write_all(contents).expect("write temp file");
            TempFile(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_hash_file_matches_in_memory() {
        let contents: Vec<u8> = (0..10_000u32).map(|i| (i % 253) as u8).collect();
        let file = TempFile::with_contents("hash", &contents);

        let whole = BufferComparer::DEFAULT;
        assert_eq!(hash_file(&whole, &file.0).expect("mapped"), fnv::hash_bytes(&contents));

        let block = BufferComparer::block(Fidelity::new(100), HashSeed::new(1));
        assert_eq!(hash_file(&block, &file.0).expect("mapped"), block.hash(&contents[..100]));
    }

    #[test]
    fn test_compare_files() {
        let short = TempFile::with_contents("short", b"zzz");
        let long = TempFile::with_contents("long", b"aaaa");
        let empty = TempFile::with_contents("empty", b"");
        let c = BufferComparer::DEFAULT;

        assert_eq!(compare_files(&c, &short.0, &long.0).expect("mapped"), Ordering::Less);
        assert_eq!(compare_files(&c, &long.0, &long.0).expect("mapped"), Ordering::Equal);
        assert_eq!(compare_files(&c, &empty.0, &short.0).expect("mapped"), Ordering::Less);

        let mapped = MappedBuffer::open(&empty.0).expect("mapped");
        assert!(mapped.is_empty());
        assert_eq!(c.hash(&mapped), fnv::EMPTY_HASH);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let missing = std::env::temp_dir().join("bitkit-does-not-exist.bin");
        let err = MappedBuffer::open(missing).expect_err("missing");
        assert!(matches!(err, Error::Io(_)));
    }
}
