use std::path::{Path, PathBuf};

use bstr::ByteSlice as _;
use path_slash::PathBufExt;

use crate::{NameCatalog, Record};

/// Default output root
pub const EXTRACTED: &str = "EXTRACTED";
/// Directory under the output root for records missing from the catalog
pub const UNKNOWN: &str = "__UNKNOWN__";

/// Convert a backslash separated catalog name to a native relative path.
///
/// Lossless on Unix. Windows needs valid UTF-8 and replaces anything else.
/// An empty name yields an empty path, so it resolves to the root itself.
pub fn normalize<B: AsRef<[u8]>>(name: B) -> PathBuf {
    PathBuf::from_slash_lossy(name.as_ref().replace("\\", "/").to_os_str_lossy())
}

/// Output location of a record under `root`.
///
/// Known names keep their relative path, anything else is named after its
/// block offset in uppercase hex, e.g. `root/__UNKNOWN__/2A`.
pub fn output_path<R: Into<Record>>(root: &Path, record: R, catalog: &NameCatalog) -> PathBuf {
    let record = record.into();
    match catalog.get(record.name_hash()) {
        Some(name) => root.join(normalize(name)),
        None => root
            .join(UNKNOWN)
            .join(format!("{:X}", record.local_offset())),
    }
}
