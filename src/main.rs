//! dig-rust - A dig command-line wrapper written in Rust

pub mod config;
pub mod errors;
pub mod resolver;
pub mod types;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::ResolverConfig;
use types::{Encoding, OutputMode};

// Local-time formatter; the default subscriber timestamps in UTC
struct LocalTimer;
impl fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

#[derive(Parser, Debug)]
#[command(name = "dig-rust")]
#[command(about = "A dig command-line wrapper written in Rust", long_about = None)]
struct Args {
    /// Domain to look up
    domain: String,

    /// Record type name (any case) or numeric RR code
    #[arg(default_value = "A")]
    query_type: String,

    /// Digfile with resolver settings; flags below override it
    #[arg(short, long)]
    config: Option<String>,

    /// Candidate nameserver, repeatable; one is picked at random per query
    #[arg(short, long = "nameserver")]
    nameservers: Vec<String>,

    /// Path to the dig executable
    #[arg(long)]
    executable: Option<String>,

    /// Encoding of dig's output (utf-8 or latin-1)
    #[arg(long)]
    encoding: Option<String>,

    /// Request the full dig report and its query time instead of +short
    #[arg(long)]
    query_time: bool,

    /// Extra arguments passed to dig untouched, after `--`
    #[arg(last = true)]
    extra_args: Vec<String>,
}

fn main() -> Result<()> {
    // One query per invocation, a single-threaded runtime is plenty
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the answer records
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr).with_timer(LocalTimer))
        .init();

    let args = Args::parse();
    debug!("Starting dig-rust version {}", env!("CARGO_PKG_VERSION"));

    let config = build_config(&args)?;
    let resolver = resolver::Resolver::new(config);

    let result = resolver.query(&args.domain, &args.query_type).await?;

    if let Some(ms) = result.query_time_ms {
        info!("Query time: {} msec", ms);
    }
    for record in &result.records {
        println!("{}", record);
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<ResolverConfig> {
    let mut config = match &args.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };

    if let Some(executable) = &args.executable {
        config.executable = executable.clone();
    }
    if !args.nameservers.is_empty() {
        config.nameservers = args.nameservers.clone();
    }
    if let Some(label) = &args.encoding {
        config.encoding = Encoding::from_label(label)
            .ok_or_else(|| anyhow::anyhow!("Unsupported encoding: {}", label))?;
    }
    if args.query_time {
        config.mode = OutputMode::QueryTime;
    }
    config.extra_args.extend(args.extra_args.iter().cloned());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(argv: &[&str]) -> Args {
        Args::parse_from(argv.iter().copied())
    }

    #[test]
    fn flags_override_defaults() {
        let args = cli(&[
            "dig-rust", "example.com", "mx",
            "-n", "1.1.1.1", "-n", "8.8.8.8",
            "--executable", "/usr/bin/dig",
            "--query-time",
            "--", "+tcp",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.executable, "/usr/bin/dig");
        assert_eq!(config.nameservers, vec!["1.1.1.1", "8.8.8.8"]);
        assert_eq!(config.mode, OutputMode::QueryTime);
        assert_eq!(config.extra_args, vec!["+tcp"]);
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let args = cli(&["dig-rust", "example.com"]);
        assert_eq!(args.query_type, "A");
        let config = build_config(&args).unwrap();
        assert_eq!(config.executable, "dig");
        assert!(config.nameservers.is_empty());
        assert_eq!(config.mode, OutputMode::Short);
    }

    #[test]
    fn bad_encoding_flag_is_rejected() {
        let args = cli(&["dig-rust", "example.com", "A", "--encoding", "ebcdic"]);
        assert!(build_config(&args).is_err());
    }
}
