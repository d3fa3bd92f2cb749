//! Command line interface
//!
//! Parsing lives here rather than in `main.rs` so the argument handling can
//! be tested without spawning the binary.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use cloudcall_application::RequestService;
use cloudcall_domain::ServiceDescriptor;
use cloudcall_infrastructure::config::{AppConfig, ConfigLoader};
use cloudcall_infrastructure::{build_request_service, init_logging};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Environment variables read when `--credentials` is not given
const CREDENTIAL_ENV_KEYS: &[(&str, &str)] = &[
    ("accessKeyId", "AWS_ACCESS_KEY_ID"),
    ("secretAccessKey", "AWS_SECRET_ACCESS_KEY"),
    ("sessionToken", "AWS_SESSION_TOKEN"),
];

/// Command line interface for cloudcall
#[derive(Parser, Debug)]
#[command(name = "cloudcall")]
#[command(about = "Retrying, rate-limited cloud provider requests")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered service constructors
    Services,
    /// Invoke a method and print the JSON result
    Invoke(InvokeArgs),
}

/// Arguments of `cloudcall invoke`
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Service name, dotted for sub-clients (e.g. `DynamoDB.DocumentClient`)
    #[arg(long)]
    pub service: String,

    /// Method to invoke
    #[arg(long)]
    pub method: String,

    /// Method parameters as a JSON object
    #[arg(long, default_value = "{}")]
    pub params: String,

    /// Target region (defaults to `request.default_region`)
    #[arg(long)]
    pub region: Option<String>,

    /// Credentials as a JSON object (defaults to `AWS_ACCESS_KEY_ID` and friends)
    #[arg(long)]
    pub credentials: Option<String>,

    /// Share the result with identical calls
    #[arg(long)]
    pub memoize: bool,

    /// Request S3 transfer acceleration for uploads
    #[arg(long)]
    pub accelerate: bool,
}

impl InvokeArgs {
    /// Build the service descriptor for this invocation
    pub fn descriptor<F>(&self, config: &AppConfig, lookup: F) -> anyhow::Result<ServiceDescriptor>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = match &self.credentials {
            Some(raw) => parse_json_arg("--credentials", raw)?,
            None => credentials_from_env(lookup),
        };
        let region = self
            .region
            .clone()
            .unwrap_or_else(|| config.request.default_region.clone());

        let mut descriptor = ServiceDescriptor::new(self.service.clone())
            .with_credentials(credentials)
            .with_region(region);
        if self.accelerate {
            descriptor = descriptor.with_transfer_acceleration(true);
        }
        Ok(descriptor)
    }

    /// Parsed `--params`
    pub fn params(&self) -> anyhow::Result<Value> {
        let params = parse_json_arg("--params", &self.params)?;
        if !params.is_object() {
            bail!("--params must be a JSON object");
        }
        Ok(params)
    }
}

/// Parse a JSON command line argument
pub fn parse_json_arg(name: &str, raw: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("{name} is not valid JSON"))
}

/// Credentials object from the standard AWS environment variables
///
/// Missing variables are simply left out, so the result is always an object.
pub fn credentials_from_env<F>(lookup: F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let credentials: Map<String, Value> = CREDENTIAL_ENV_KEYS
        .iter()
        .filter_map(|(field, key)| lookup(key).map(|value| ((*field).to_string(), json!(value))))
        .collect();
    Value::Object(credentials)
}

/// Load configuration, initialize logging and run the command
///
/// Returns the text to print on stdout.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let service = build_request_service(&config)?;
    execute(&service, &config, cli.command).await
}

/// Run `command` against an existing dispatcher
pub async fn execute(
    service: &RequestService,
    config: &AppConfig,
    command: Command,
) -> anyhow::Result<String> {
    match command {
        Command::Services => Ok(service
            .resolver()
            .registry()
            .list()
            .into_iter()
            .map(|(name, description)| format!("{name:<28}{description}"))
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Invoke(args) => {
            let descriptor = args.descriptor(config, |key| std::env::var(key).ok())?;
            let params = args.params()?;
            debug!(service = %args.service, method = %args.method, memoize = args.memoize, "Invoking");

            let result = if args.memoize {
                service
                    .invoke_memoized(&descriptor, &args.method, params)
                    .await?
            } else {
                service.invoke(&descriptor, &args.method, params).await?
            };
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}
