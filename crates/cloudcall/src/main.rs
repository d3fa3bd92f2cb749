//! cloudcall - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cloudcall services` | List registered service constructors |
//! | `cloudcall invoke --service S3 --method listBuckets` | Invoke a method and print the JSON result |

// Force-link cloudcall-providers to ensure linkme registrations are included
extern crate cloudcall_providers;

use clap::Parser;
use cloudcall::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}
