// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! sricheck CLI - Subresource Integrity checker

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use sricheck::output::{print_report, OutputFormat};
use sricheck::{CheckerConfig, IntegrityChecker, PageIntegrity};

/// Exit codes for CI integration
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const INVALID: u8 = 2;
}

#[derive(Parser)]
#[command(name = "sricheck")]
#[command(
    author,
    version,
    about = "Verify Subresource Integrity attributes on page script includes"
)]
struct Cli {
    #[command(flatten)]
    http: HttpArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HttpArgs {
    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// User agent to send
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    insecure: bool,

    /// Proxy URL for all requests
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Maximum redirects to follow
    #[arg(long, global = true, default_value_t = 10)]
    max_redirects: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one resource against an integrity attribute
    Check {
        /// Resource URL
        url: String,
        /// Integrity attribute, e.g. sha384-<base64>
        integrity: String,
    },

    /// Print the SRI attribute values for a resource
    Hash {
        /// Resource URL
        url: String,
    },

    /// Verify every script on a page, stopping at the first failure
    Verify {
        /// Page URL
        url: String,
    },

    /// Report the integrity status of every script on a page
    Report {
        /// Page URL
        url: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sricheck=info".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = build_config(&cli.http);

    match cli.command {
        Commands::Check { url, integrity } => {
            let checker = IntegrityChecker::with_config(config)?;
            let verdict = checker.check(&url, &integrity).await?;
            println!("{}: {:?}", url, verdict);
            Ok(verdict_code(verdict.is_valid()))
        }
        Commands::Hash { url } => {
            let checker = IntegrityChecker::with_config(config)?;
            let map = checker.generate_sri_map(&url).await?;
            for sri in map.sri_strings() {
                println!("{}", sri);
            }
            Ok(exit_codes::SUCCESS)
        }
        Commands::Verify { url } => {
            let page = PageIntegrity::with_config(config)?;
            let valid = page.check_page(&url).await?;
            println!("{}: {}", url, if valid { "valid" } else { "INVALID" });
            Ok(verdict_code(valid))
        }
        Commands::Report { url, format } => {
            let page = PageIntegrity::with_config(config)?;
            let report = page.report_page(&url).await?;
            print_report(&report, format)?;
            Ok(verdict_code(report.all_valid))
        }
    }
}

fn build_config(args: &HttpArgs) -> CheckerConfig {
    let mut config = CheckerConfig::new()
        .timeout(Duration::from_secs(args.timeout))
        .max_redirects(args.max_redirects)
        .accept_invalid_certs(args.insecure);

    if let Some(ref ua) = args.user_agent {
        config = config.user_agent(ua);
    }
    if let Some(ref proxy) = args.proxy {
        config = config.proxy(proxy);
    }

    config
}

fn verdict_code(valid: bool) -> u8 {
    if valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::INVALID
    }
}
