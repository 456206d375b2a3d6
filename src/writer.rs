//! Result file writer
//!
//! Each batch entry `i` lands in `endpoints_<i>.txt` and `href_urls_<i>.txt`,
//! one entry per line. Files are overwritten. The first failure stops the
//! batch; files written before it stay on disk.

use crate::error::{Error, Result};
use crate::walker::ScrapeResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths of the two files written for one batch entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFiles {
    /// Endpoint paths file
    pub endpoints: PathBuf,
    /// Href links file
    pub hrefs: PathBuf,
}

impl OutputFiles {
    /// File names for batch index `index` inside `dir`
    pub fn for_index(dir: &Path, index: usize) -> Self {
        Self {
            endpoints: dir.join(format!("endpoints_{}.txt", index)),
            hrefs: dir.join(format!("href_urls_{}.txt", index)),
        }
    }
}

/// Write every result of the batch into `dir`
pub fn write_batch(batch: &[ScrapeResult], dir: &Path) -> Result<Vec<OutputFiles>> {
    let mut written = Vec::with_capacity(batch.len());
    for (index, result) in batch.iter().enumerate() {
        let files = OutputFiles::for_index(dir, index);
        write_lines(&files.endpoints, &result.endpoints)?;
        write_lines(&files.hrefs, &result.hrefs)?;
        written.push(files);
    }
    Ok(written)
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let wrap = |source: std::io::Error| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(wrap)?;
    }
    writer.flush().map_err(wrap)?;

    debug!(path = %path.display(), lines = lines.len(), "wrote result file");
    Ok(())
}
