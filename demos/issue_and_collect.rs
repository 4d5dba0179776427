//! Submit a CSR and poll until the certificate is issued.
//!
//! Credentials come from the environment (`COMODO_API_URL`,
//! `CUSTOMER_LOGIN_URI`, `LOGIN`, `ORG_ID`, `PASSWORD`, `SECRET_KEY`).
//!
//! ```text
//! cargo run --example issue_and_collect -- server.csr "PlatinumSSL Certificate"
//! ```

use std::time::Duration;

use comodo_ca_client::{ComodoClient, ComodoClientConfig, FormatType, SubmissionRequest};

const POLL_INTERVAL: Duration = Duration::from_secs(30);
const MAX_POLLS: u32 = 20;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let csr_path = args.next().ok_or("usage: issue_and_collect <csr> [cert type]")?;
    let cert_type = args
        .next()
        .unwrap_or_else(|| "PlatinumSSL Certificate".to_string());

    let config = ComodoClientConfig::from_env()?;
    let client = ComodoClient::new(config).await?;

    let csr = std::fs::read_to_string(&csr_path)?;
    let request = SubmissionRequest::new(cert_type, csr, "demo-revoke-phrase", 1);
    let submitted = client.submit(&request).await?;
    let Some(enrollment) = submitted.data() else {
        println!("Submission rejected: {}", submitted.status().message);
        return Ok(());
    };
    println!("Submitted, certificate id {}", enrollment.certificate_id);

    // The client never retries on its own.
    for attempt in 1..=MAX_POLLS {
        let result = client
            .collect_format(enrollment.certificate_id, FormatType::X509PemBundle)
            .await?;

        if result.is_pending() {
            println!("Attempt {attempt}: {}", result.status().message);
            tokio::time::sleep(POLL_INTERVAL).await;
            continue;
        }

        match result.data().and_then(|c| c.certificate.as_deref()) {
            Some(certificate) => print!("{certificate}"),
            None => println!("Collection failed: {}", result.status().message),
        }
        return Ok(());
    }

    println!("Gave up after {MAX_POLLS} attempts");
    Ok(())
}
