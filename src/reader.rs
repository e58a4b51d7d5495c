//! Random-access byte reader over a seekable source.
//!
//! This module provides [`ByteReader`], a thin wrapper around any
//! `Read + Seek` source (usually a [`File`]) that exposes the small set of
//! primitives the rest of the crate needs: `read_size`, `seek_to` and
//! `tell`. The whole inspection works on top of these three calls.

use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

use log::debug;

/// Random-access wrapper around a seekable byte source.
///
/// Out-of-bounds reads are not an error: `read_size` simply returns fewer
/// bytes than requested, and callers are expected to check the length.
pub struct ByteReader<R> {
    source: R,
    size: u64,
}

impl ByteReader<File> {
    /// Opens the file at `file_path` for random-access reading.
    ///
    /// # Errors
    ///
    /// Returns any [`io::Error`] produced by [`File::open`], e.g. when the
    /// path does not exist or the process lacks sufficient permissions.
    pub fn open(file_path: &str) -> io::Result<ByteReader<File>> {
        let file = File::open(Path::new(file_path))?;
        let size = file.metadata()?.len();
        debug!("Opened '{}' ({} bytes)", file_path, size);
        Ok(ByteReader { source: file, size })
    }
}

impl<R: Read + Seek> ByteReader<R> {
    /// Wraps an arbitrary seekable source, measuring its size by seeking
    /// to the end once.
    pub fn new(mut source: R) -> io::Result<ByteReader<R>> {
        let size = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;
        Ok(ByteReader { source, size })
    }

    /// Total size of the underlying source in bytes.
    pub fn len(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reads up to `size` bytes from the current cursor position.
    ///
    /// The returned vector is truncated to the actual number of bytes
    /// read, so its length may be smaller than `size` at end-of-file.
    pub fn read_size(&mut self, size: usize) -> io::Result<Vec<u8>> {
        let mut buffer = vec![0; size];
        let mut filled = 0;
        while filled < size {
            let n = self.source.read(&mut buffer[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buffer.truncate(filled);
        Ok(buffer)
    }

    /// Repositions the cursor to `offset` bytes from the beginning.
    pub fn seek_to(&mut self, offset: u64) -> io::Result<u64> {
        self.source.seek(SeekFrom::Start(offset))
    }

    /// Current cursor position.
    pub fn tell(&mut self) -> io::Result<u64> {
        self.source.stream_position()
    }
}

impl<R: Read> Read for ByteReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.source.read(buf)
    }
}

impl<R: Seek> Seek for ByteReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.source.seek(pos)
    }
}
