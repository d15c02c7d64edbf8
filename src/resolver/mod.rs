pub mod args;
pub mod parser;
pub mod selector;

use crate::config::ResolverConfig;
use crate::errors::ResolveError;
use crate::types::{QueryResult, QueryType};
use selector::{NameserverSelector, RandomSelector};

/// The execution capability: hand it an argument list, get raw output bytes
/// back. Mocked in tests, backed by a real subprocess in production.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> Result<Vec<u8>, ResolveError>;
}

/// Runs the tool as a child process and fails on spawn errors and non-zero
/// exit alike.
pub struct SubprocessRunner;

#[async_trait::async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run(&self, args: &[String]) -> Result<Vec<u8>, ResolveError> {
        let Some((executable, rest)) = args.split_first() else {
            return Err(ResolveError::ExecutionFailure {
                executable: String::new(),
                reason: "empty argument list".to_string(),
            });
        };

        let output = tokio::process::Command::new(executable)
            .args(rest)
            .output()
            .await
            .map_err(|e| ResolveError::ExecutionFailure {
                executable: executable.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ResolveError::ExecutionFailure {
                executable: executable.clone(),
                reason: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(output.stdout)
    }
}

pub struct Resolver {
    config: ResolverConfig,
    selector: Box<dyn NameserverSelector>,
    runner: Box<dyn CommandRunner>,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_parts(config, Box::new(RandomSelector), Box::new(SubprocessRunner))
    }

    /// Assemble a resolver from injected strategies, for tests and callers
    /// with their own process handling.
    pub fn with_parts(
        config: ResolverConfig,
        selector: Box<dyn NameserverSelector>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self { config, selector, runner }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Query dig for a domain and record type. `query_type` is a type name
    /// in any case or a decimal RR code.
    pub async fn query(&self, domain: &str, query_type: &str) -> Result<QueryResult, ResolveError> {
        let domain = domain.to_lowercase();
        let query_type = QueryType::resolve(query_type)?;
        let nameserver = self.selector.select(&self.config.nameservers);

        let args = args::build_args(
            &self.config.executable,
            &domain,
            query_type,
            nameserver,
            self.config.mode,
            &self.config.extra_args,
        );
        tracing::debug!("Executing {:?}", args);

        let raw = self.runner.run(&args).await?;
        let text = self.config.encoding.decode(&raw)?;

        Ok(parser::parse_output(text.trim_end(), self.config.mode, &domain, query_type))
    }
}
