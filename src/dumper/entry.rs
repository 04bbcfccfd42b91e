use std::{
    ffi::OsString,
    io::{Cursor, Write},
    path::Path,
};

use compio::{
    fs::File,
    io::{AsyncReadExt, BufReader},
};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

const HEADER_OPEN: &str = "<-----";
const HEADER_CLOSE: &str = "------->";

/// Result of handling a single directory entry.
#[derive(Debug)]
pub enum EntryOutcome {
    Dumped { name: OsString, contents: String },
    Failed { name: OsString, error: EntryReadError },
}

impl EntryOutcome {
    /// Reads `name` relative to `root`. Never fails: any open or read error
    /// becomes a `Failed` outcome.
    pub async fn read(root: &Path, name: OsString) -> Self {
        let path = root.join(&name);
        match read_entry(&path).await {
            Ok(contents) => EntryOutcome::Dumped { name, contents },
            Err(error) => {
                debug!(
                    "Entry {} is not readable as text: {}",
                    path.best_effort_path_display(),
                    error
                );
                EntryOutcome::Failed { name, error }
            }
        }
    }

    pub fn name(&self) -> &OsString {
        match self {
            EntryOutcome::Dumped { name, .. } | EntryOutcome::Failed { name, .. } => name,
        }
    }

    pub fn is_dumped(&self) -> bool {
        matches!(self, EntryOutcome::Dumped { .. })
    }

    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        let name = self.name().to_string_lossy();
        match self {
            EntryOutcome::Dumped { contents, .. } => {
                writeln!(out, "{HEADER_OPEN}{name}{HEADER_CLOSE}\n\n{contents}\n\n\n")
            }
            EntryOutcome::Failed { error, .. } => {
                writeln!(out, "{name} is not a file {error}")
            }
        }
    }
}

/// Opens `path` and reads it to the end as UTF-8. The handle is released
/// before returning on every path.
pub async fn read_entry(path: &Path) -> Result<String, EntryReadError> {
    let file = File::open(path).await.context(OpenSnafu)?;

    let mut reader = BufReader::new(Cursor::new(file));
    let res = reader.read_to_end(Vec::new()).await;
    match res.0 {
        Ok(n) => debug!("Read {n} bytes from {}", path.best_effort_path_display()),
        Err(source) => return Err(EntryReadError::ReadError { source }),
    }

    String::from_utf8(res.1).context(DecodeSnafu)
}

/// Any failure to treat an entry as a text file. The display is the bare
/// underlying error so it can follow the entry name in the failure notice.
#[derive(Debug, Snafu)]
pub enum EntryReadError {
    #[snafu(display("{source}"))]
    OpenError { source: std::io::Error },
    #[snafu(display("{source}"))]
    ReadError { source: std::io::Error },
    #[snafu(display("{source}"))]
    DecodeError { source: std::string::FromUtf8Error },
}
