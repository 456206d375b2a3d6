//! wpjson-scrape - WordPress REST discovery scraper
//!
//! Fetches a site's `wp-json` discovery document and extracts the key path of
//! every leaf value (endpoints) and every value stored under an `href` key.
//!
//! # Example
//!
//! ```no_run
//! use wpjson_scrape::{Fetcher, sort_batch, walker, write_batch};
//!
//! #[tokio::main]
//! async fn main() -> wpjson_scrape::Result<()> {
//!     let fetcher = Fetcher::new()?;
//!     let body = fetcher.fetch("https://example.com").await?;
//!     let mut batch = vec![walker::parse(&body)?];
//!     sort_batch(&mut batch);
//!     write_batch(&batch, std::path::Path::new("."))?;
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod error;
pub mod fetcher;
pub mod output;
pub mod sort;
pub mod walker;
pub mod writer;

pub use driver::{Driver, Failure, Input, RunReport, TargetReport, USAGE};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder, endpoint_url};
pub use output::{OutputFormat, output_report};
pub use sort::{sort_batch, sort_strings};
pub use walker::{ScrapeResult, parse, walk};
pub use writer::{OutputFiles, write_batch};
