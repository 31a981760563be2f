use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::Error;

/// Size of the intermediate copy buffer
pub const BUFFER_SIZE: usize = 32 * 1024;

/// Copy `len` bytes starting at `offset` of `archive` into a newly created
/// `dest`, creating parent directories as needed. Returns the number of bytes
/// written.
///
/// A failure part way through leaves the partial `dest` behind.
pub fn extract_slice<A: AsRef<Path>, D: AsRef<Path>>(
    archive: A,
    dest: D,
    offset: u64,
    len: u64,
) -> Result<u64, Error> {
    let (archive, dest) = (archive.as_ref(), dest.as_ref());
    let mut reader = File::open(archive)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = File::create(dest)?;
    let copied = copy_slice(&mut reader, &mut writer, offset, len)?;
    writer.flush()?;
    tracing::debug!(
        archive = %archive.display(),
        dest = %dest.display(),
        offset = format_args!("{:#x}", offset),
        bytes = copied,
        "extracted slice"
    );
    Ok(copied)
}

/// Stream exactly `len` bytes from `offset` of `reader` into `writer`.
pub fn copy_slice<R: Read + Seek, W: Write>(
    reader: &mut R,
    writer: &mut W,
    offset: u64,
    len: u64,
) -> Result<u64, Error> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut buf = vec![0; BUFFER_SIZE];
    let mut copied = 0;
    while copied < len {
        let want = (len - copied).min(BUFFER_SIZE as u64) as usize;
        let read = match reader.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(Error::Truncated {
                    offset,
                    expected: len,
                    copied,
                })
            }
            Ok(read) => read,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&buf[..read])?;
        copied += read as u64;
    }
    Ok(copied)
}
