//! wpjson-scrape CLI - Extract endpoints and links from WordPress wp-json

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wpjson_scrape::{Driver, Fetcher, Input, OutputFormat, USAGE, output_report};

/// Scrape a WordPress REST discovery document into endpoint and href lists
#[derive(Parser, Debug)]
#[command(name = "wpjson-scrape")]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the WordPress site
    #[arg(short = 'u', value_name = "URL")]
    url: Option<String>,

    /// File containing a list of WordPress site URLs, one per line
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<PathBuf>,

    /// Directory for endpoints_<i>.txt and href_urls_<i>.txt
    #[arg(short = 'd', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Summary format
    #[arg(short = 'o', long = "output", default_value = "human", value_enum)]
    output_format: OutputFormatArg,

    /// Log requests and written files to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Output format argument
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
    None,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::None => OutputFormat::None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(input) = Input::from_flags(args.url.as_deref(), args.file.as_deref()) else {
        println!("{}", USAGE);
        return;
    };

    if let Err(e) = run(input, &args).await {
        println!("Error: {}", e);
    }
}

async fn run(input: Input, args: &Args) -> wpjson_scrape::Result<()> {
    let fetcher = Fetcher::new()?;
    let driver = Driver::new(fetcher, &args.output_dir);

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    let report = driver.run(&input, &mut writer).await?;
    output_report(&report, args.output_format.into(), &mut writer)?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "wpjson_scrape=debug"
    } else {
        "wpjson_scrape=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
