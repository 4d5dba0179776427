// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Comodo CA Command-Line Tool
//!
//! Lists certificate types, submits CSRs, collects issued certificates and
//! revokes them through the Comodo SSL web service. The exit status follows
//! the certmonger CA helper convention, so the tool can be registered as a
//! certmonger helper.
//!
//! # Usage
//!
//! ```text
//! comodo-ca [OPTIONS] <COMMAND>
//!
//! Commands:
//!   types    List the certificate types available to the account
//!   submit   Submit a CSR
//!   collect  Collect an issued certificate
//!   revoke   Revoke a certificate
//!
//! Options:
//!   -c, --config <PATH>   Path to configuration file (default: environment)
//!   -v, --verbose         Enable verbose output
//!   -q, --quiet           Suppress non-error output
//!   -h, --help            Print help
//!   -V, --version         Print version
//! ```
//!
//! # Exit status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Success; the certificate, id or listing is on stdout |
//! | 5    | Still processing; stdout holds the poll delay then the id |
//! | 3    | The service rejected the request, or it could not be reached |
//! | 4    | Configuration or usage error |
//!
//! # Examples
//!
//! ```bash
//! # Submit with credentials from the environment
//! comodo-ca submit --cert-type "PlatinumSSL Certificate" --csr server.csr \
//!     --revoke-password secret --term 1 --server-type Apache/ModSSL
//!
//! # Collect it later
//! comodo-ca --config /etc/comodo-ca.toml collect --id 123456
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use comodo_ca_client::{
    ComodoClient, ComodoClientConfig, ComodoError, ConfigFile, FormatType, ServerType,
    ServiceResult, SubmissionRequest,
};

/// Issued or listed.
const EXIT_SUCCESS: u8 = 0;
/// Remote rejection or transport failure.
const EXIT_REJECTED: u8 = 3;
/// Bad configuration or arguments.
const EXIT_USAGE: u8 = 4;
/// Try again after the printed delay.
const EXIT_PENDING: u8 = 5;

/// Comodo CA Command-Line Tool
#[derive(Parser)]
#[command(name = "comodo-ca")]
#[command(author = "U.S. Federal Government")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Certificate issuance through the Comodo SSL web service", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "COMODO_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the certificate types available to the account
    Types,

    /// Submit a CSR
    Submit {
        /// Certificate type name, e.g. "PlatinumSSL Certificate"
        #[arg(long, value_name = "NAME")]
        cert_type: String,

        /// PEM CSR file ("-" for stdin)
        #[arg(long, value_name = "PATH")]
        csr: PathBuf,

        /// Passphrase required to revoke the certificate later
        #[arg(long, value_name = "PASSPHRASE", env = "COMODO_REVOKE_PASSWORD")]
        revoke_password: String,

        /// Term in years
        #[arg(long, default_value = "1")]
        term: u32,

        /// Subject alternative names, comma separated
        #[arg(long, value_name = "NAMES", default_value = "")]
        san: String,

        /// Server type label
        #[arg(long, value_name = "LABEL", default_value = "OTHER")]
        server_type: String,
    },

    /// Collect an issued certificate
    Collect {
        /// Certificate id returned by submit
        #[arg(long, env = "CERTMONGER_CA_COOKIE")]
        id: i64,

        /// Output format label
        #[arg(long, value_name = "LABEL", default_value = "X509 PEM Bundle")]
        format: String,

        /// Seconds to wait before polling again, printed when pending
        #[arg(long, value_name = "SECS", default_value = "60")]
        poll_wait: u64,
    },

    /// Revoke a certificate
    Revoke {
        /// Certificate id
        #[arg(long)]
        id: i64,

        /// Free-text reason
        #[arg(long, default_value = "")]
        reason: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results.
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = validate_labels(&cli.command) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_USAGE);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    // Create runtime for async operations
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_command(config, cli.command)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Reject unknown labels before any network traffic.
fn validate_labels(command: &Commands) -> Result<(), ComodoError> {
    match command {
        Commands::Submit { server_type, .. } => server_type.parse::<ServerType>().map(|_| ()),
        Commands::Collect { format, .. } => format.parse::<FormatType>().map(|_| ()),
        Commands::Types | Commands::Revoke { .. } => Ok(()),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ComodoClientConfig, ComodoError> {
    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            ConfigFile::load(path)?.into_config()
        }
        None => ComodoClientConfig::from_env(),
    }
}

fn exit_code_for(error: &ComodoError) -> u8 {
    if error.is_usage() {
        EXIT_USAGE
    } else {
        EXIT_REJECTED
    }
}

async fn run_command(config: ComodoClientConfig, command: Commands) -> Result<u8, ComodoError> {
    let client = ComodoClient::new(config).await?;

    match command {
        Commands::Types => {
            let result = client.get_cert_types().await?;
            let Some(catalog) = result.data() else {
                return Ok(report_error(&result));
            };
            for cert_type in catalog.iter() {
                let terms: Vec<String> = cert_type.terms.iter().map(u32::to_string).collect();
                println!("{}\t{}\t{}", cert_type.id, cert_type.name, terms.join(","));
            }
            Ok(EXIT_SUCCESS)
        }

        Commands::Submit {
            cert_type,
            csr,
            revoke_password,
            term,
            san,
            server_type,
        } => {
            let csr = read_csr(&csr).map_err(|e| {
                ComodoError::config(format!("Failed to read CSR {}: {}", csr.display(), e))
            })?;
            let request = SubmissionRequest::new(cert_type, csr, revoke_password, term)
                .subject_alt_names(san)
                .server_type(server_type);

            let result = client.submit(&request).await?;
            match result.data() {
                Some(enrollment) => {
                    println!("{}", enrollment.certificate_id);
                    Ok(EXIT_SUCCESS)
                }
                None => Ok(report_error(&result)),
            }
        }

        Commands::Collect {
            id,
            format,
            poll_wait,
        } => {
            let result = client.collect(id, &format).await?;
            if result.is_pending() {
                tracing::info!("{}", result.status().message);
                println!("{}", poll_wait);
                println!("{}", id);
                return Ok(EXIT_PENDING);
            }
            match result.data().and_then(|c| c.certificate.as_deref()) {
                Some(certificate) => {
                    print!("{}", certificate);
                    if !certificate.ends_with('\n') {
                        println!();
                    }
                    Ok(EXIT_SUCCESS)
                }
                None => Ok(report_error(&result)),
            }
        }

        Commands::Revoke { id, reason } => {
            let result = client.revoke(id, &reason).await?;
            if result.is_success() {
                tracing::info!("Certificate {} revoked", id);
                Ok(EXIT_SUCCESS)
            } else {
                Ok(report_error(&result))
            }
        }
    }
}

fn read_csr(path: &std::path::Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    }
}

fn report_error<T>(result: &ServiceResult<T>) -> u8 {
    let status = result.status();
    // certmonger reads the reason from stdout.
    println!("{}", status.message);
    tracing::error!("Remote status {}: {}", status.code, status.message);
    EXIT_REJECTED
}
