use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::ext::ReadExt;
use super::{Error, BLOCK_SHIFT};

/// Record layouts found in directory files
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Layout {
    /// 12 byte single archive record
    Canonical,
    /// 24 byte record aware of multiple archives
    Extended,
}

impl Layout {
    pub fn record_size(self) -> u64 {
        match self {
            // name_hash, local_offset, size
            Layout::Canonical => 3 * 4,
            // name_hash, archive_id, local_offset, total_offset, size, checksum
            Layout::Extended => 6 * 4,
        }
    }

    /// Guess the layout from the size of a directory file alone.
    ///
    /// Every multiple of 24 is also a multiple of 12, the extended layout wins
    /// ties (an empty directory included).
    pub fn detect(len: u64) -> Result<Self, Error> {
        if len % Layout::Extended.record_size() == 0 {
            Ok(Layout::Extended)
        } else if len % Layout::Canonical.record_size() == 0 {
            Ok(Layout::Canonical)
        } else {
            Err(Error::InvalidLayoutSize(len))
        }
    }

    /// Number of records in a directory of `len` bytes
    pub fn record_count(self, len: u64) -> Result<u64, Error> {
        let record_size = self.record_size();
        match len % record_size {
            0 => Ok(len / record_size),
            _ => Err(Error::InvalidFormat { len, record_size }),
        }
    }
}

/// Canonical directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub name_hash: u32,
    /// Offset in 2048 byte blocks
    pub local_offset: u32,
    pub size: u32,
}

impl DirectoryRecord {
    pub fn read<R: io::Read>(reader: &mut R) -> Result<Self, Error> {
        let [name_hash, local_offset, size] = reader.read_u32_array()?;
        Ok(Self {
            name_hash,
            local_offset,
            size,
        })
    }

    /// Byte offset of the entry data in the archive
    pub fn byte_offset(&self) -> u64 {
        block_to_byte_offset(self.local_offset)
    }
}

/// Extended directory entry. `archive_id` would select one of several data
/// archives, which is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedDirectoryRecord {
    pub name_hash: u32,
    pub archive_id: u32,
    pub local_offset: u32,
    pub total_offset: u32,
    pub size: u32,
    pub checksum: u32,
}

impl ExtendedDirectoryRecord {
    pub fn read<R: io::Read>(reader: &mut R) -> Result<Self, Error> {
        let [name_hash, archive_id, local_offset, total_offset, size, checksum] =
            reader.read_u32_array()?;
        Ok(Self {
            name_hash,
            archive_id,
            local_offset,
            total_offset,
            size,
            checksum,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Canonical(DirectoryRecord),
    Extended(ExtendedDirectoryRecord),
}

impl Record {
    pub fn read<R: io::Read>(reader: &mut R, layout: Layout) -> Result<Self, Error> {
        Ok(match layout {
            Layout::Canonical => Record::Canonical(DirectoryRecord::read(reader)?),
            Layout::Extended => Record::Extended(ExtendedDirectoryRecord::read(reader)?),
        })
    }

    pub fn layout(&self) -> Layout {
        match self {
            Record::Canonical(_) => Layout::Canonical,
            Record::Extended(_) => Layout::Extended,
        }
    }

    pub fn name_hash(&self) -> u32 {
        match self {
            Record::Canonical(r) => r.name_hash,
            Record::Extended(r) => r.name_hash,
        }
    }

    pub fn local_offset(&self) -> u32 {
        match self {
            Record::Canonical(r) => r.local_offset,
            Record::Extended(r) => r.local_offset,
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            Record::Canonical(r) => r.size,
            Record::Extended(r) => r.size,
        }
    }

    pub fn byte_offset(&self) -> u64 {
        block_to_byte_offset(self.local_offset())
    }
}

impl From<DirectoryRecord> for Record {
    fn from(value: DirectoryRecord) -> Self {
        Self::Canonical(value)
    }
}

impl From<ExtendedDirectoryRecord> for Record {
    fn from(value: ExtendedDirectoryRecord) -> Self {
        Self::Extended(value)
    }
}

pub fn block_to_byte_offset(block: u32) -> u64 {
    (block as u64) << BLOCK_SHIFT
}

/// Pick the layout of a directory file from its size.
pub fn detect_layout<P: AsRef<Path>>(path: P) -> Result<Layout, Error> {
    Layout::detect(std::fs::metadata(path)?.len())
}

/// Read every canonical record of a directory file, in file order.
pub fn read_directory<P: AsRef<Path>>(path: P) -> Result<Vec<DirectoryRecord>, Error> {
    read_all(path.as_ref(), Layout::Canonical, DirectoryRecord::read)
}

/// Read every record of a directory file using an explicit layout.
pub fn read_records<P: AsRef<Path>>(path: P, layout: Layout) -> Result<Vec<Record>, Error> {
    read_all(path.as_ref(), layout, |reader| Record::read(reader, layout))
}

fn read_all<T>(
    path: &Path,
    layout: Layout,
    mut func: impl FnMut(&mut BufReader<File>) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let count = layout.record_count(len)?;
    tracing::debug!(
        path = %path.display(),
        bytes = len,
        count,
        %layout,
        "reading directory"
    );

    let mut reader = BufReader::new(file);
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(func(&mut reader)?);
    }
    Ok(records)
}
