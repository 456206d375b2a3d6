//! Run orchestration: single target or a file of targets
//!
//! Fetch and walk failures are reported on the message writer and never abort
//! the run. Successful targets are sorted and written once at the end.

use crate::error::{Error, Result};
use crate::fetcher::Fetcher;
use crate::sort::sort_batch;
use crate::walker::{self, ScrapeResult};
use crate::writer::{OutputFiles, write_batch};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Printed when neither input flag is given
pub const USAGE: &str = "Debes proporcionar una URL (-u) o un archivo (-f) como entrada.";

/// What to scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// One site
    Single(String),
    /// Newline-delimited file of sites
    Batch(PathBuf),
}

impl Input {
    /// Pick the input mode from the two flags
    ///
    /// The URL wins when both are given; empty values count as absent.
    pub fn from_flags(url: Option<&str>, file: Option<&Path>) -> Option<Self> {
        if let Some(url) = url
            && !url.is_empty()
        {
            return Some(Self::Single(url.to_string()));
        }
        match file {
            Some(path) if !path.as_os_str().is_empty() => Some(Self::Batch(path.to_path_buf())),
            _ => None,
        }
    }
}

/// Outcome for one successfully scraped target
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    /// Batch index (file suffix)
    pub index: usize,
    /// Target as given
    pub target: String,
    /// Number of endpoint paths
    pub endpoints: usize,
    /// Number of href links
    pub hrefs: usize,
    /// Written files, absent if writing failed
    pub files: Option<OutputFiles>,
}

/// A target that produced no result
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    /// Target as given
    pub target: String,
    /// Fetch or decode error message
    pub error: String,
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Scraped targets, in batch order
    pub targets: Vec<TargetReport>,
    /// Targets skipped because of fetch or decode errors
    pub failures: Vec<Failure>,
    /// Set when writing the result files failed
    pub write_error: Option<String>,
}

/// Drives fetch, walk, sort and write for an input
#[derive(Debug)]
pub struct Driver {
    fetcher: Fetcher,
    output_dir: PathBuf,
}

impl Driver {
    /// Create a driver writing result files into `output_dir`
    pub fn new(fetcher: Fetcher, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.into(),
        }
    }

    /// Fetch and walk one target
    pub async fn scrape(&self, target: &str) -> Result<ScrapeResult> {
        let body = self.fetcher.fetch(target).await?;
        walker::parse(&body)
    }

    /// Run the input, printing error lines to `out`
    ///
    /// Only a failure to write to `out` itself is returned as an error.
    pub async fn run<W: Write>(&self, input: &Input, out: &mut W) -> Result<RunReport> {
        match input {
            Input::Single(target) => self.run_single(target, out).await,
            Input::Batch(path) => self.run_batch(path, out).await,
        }
    }

    async fn run_single<W: Write>(&self, target: &str, out: &mut W) -> Result<RunReport> {
        let mut report = RunReport::default();

        match self.scrape(target).await {
            Ok(result) => self.finish(vec![(target.to_string(), result)], report, out),
            Err(e) => {
                log_failure(target, &e);
                writeln!(out, "Error al raspar los datos: {}", e).map_err(Error::OutputFailed)?;
                report.failures.push(Failure {
                    target: target.to_string(),
                    error: e.to_string(),
                });
                Ok(report)
            }
        }
    }

    async fn run_batch<W: Write>(&self, path: &Path, out: &mut W) -> Result<RunReport> {
        let mut report = RunReport::default();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                let e = Error::InputFailed {
                    path: path.to_path_buf(),
                    source,
                };
                writeln!(out, "Error al abrir el archivo: {}", e).map_err(Error::OutputFailed)?;
                return Ok(report);
            }
        };

        let mut scraped = Vec::new();
        // Raw byte lines; invalid UTF-8 decodes to U+FFFD and fails as a target.
        for (number, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line = match line {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(source) => {
                    let e = Error::InputFailed {
                        path: path.to_path_buf(),
                        source,
                    };
                    writeln!(out, "Error al leer el archivo: {}", e)
                        .map_err(Error::OutputFailed)?;
                    break;
                }
            };

            let target = line.trim();
            if target.is_empty() {
                debug!(line = number + 1, "skipping blank line");
                continue;
            }

            match self.scrape(target).await {
                Ok(result) => scraped.push((target.to_string(), result)),
                Err(e) => {
                    log_failure(target, &e);
                    writeln!(out, "Error al raspar los datos de {}: {}", target, e)
                        .map_err(Error::OutputFailed)?;
                    report.failures.push(Failure {
                        target: target.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        self.finish(scraped, report, out)
    }

    fn finish<W: Write>(
        &self,
        scraped: Vec<(String, ScrapeResult)>,
        mut report: RunReport,
        out: &mut W,
    ) -> Result<RunReport> {
        let (targets, mut batch): (Vec<String>, Vec<ScrapeResult>) = scraped.into_iter().unzip();
        sort_batch(&mut batch);

        let files: Vec<Option<OutputFiles>> = match self.write(&batch) {
            Ok(files) => files.into_iter().map(Some).collect(),
            Err(e) => {
                writeln!(out, "Error al escribir los resultados: {}", e)
                    .map_err(Error::OutputFailed)?;
                report.write_error = Some(e.to_string());
                vec![None; batch.len()]
            }
        };

        report.targets = targets
            .into_iter()
            .zip(&batch)
            .zip(files)
            .enumerate()
            .map(|(index, ((target, result), files))| TargetReport {
                index,
                target,
                endpoints: result.endpoints.len(),
                hrefs: result.hrefs.len(),
                files,
            })
            .collect();

        info!(
            scraped = report.targets.len(),
            failed = report.failures.len(),
            "run finished"
        );
        Ok(report)
    }

    fn write(&self, batch: &[ScrapeResult]) -> Result<Vec<OutputFiles>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        fs::create_dir_all(&self.output_dir).map_err(|source| Error::WriteFailed {
            path: self.output_dir.clone(),
            source,
        })?;
        write_batch(batch, &self.output_dir)
    }
}

fn log_failure(target: &str, e: &Error) {
    warn!(
        site = target,
        network = e.is_network(),
        decode = e.is_decode(),
        error = %e,
        "scrape failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_takes_precedence() {
        let input = Input::from_flags(Some("https://a.test"), Some(Path::new("sites.txt")));
        assert_eq!(input, Some(Input::Single("https://a.test".to_string())));
    }

    #[test]
    fn file_when_url_missing_or_empty() {
        let expected = Some(Input::Batch(PathBuf::from("sites.txt")));
        assert_eq!(Input::from_flags(None, Some(Path::new("sites.txt"))), expected);
        assert_eq!(Input::from_flags(Some(""), Some(Path::new("sites.txt"))), expected);
    }

    #[test]
    fn no_input() {
        assert_eq!(Input::from_flags(None, None), None);
        assert_eq!(Input::from_flags(Some(""), Some(Path::new(""))), None);
    }

    #[tokio::test]
    async fn missing_target_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let driver = Driver::new(Fetcher::new().unwrap(), dir.path());
        let mut out = Vec::new();

        let input = Input::Batch(dir.path().join("missing.txt"));
        let report = driver.run(&input, &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Error al abrir el archivo:"));
        assert!(report.targets.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
