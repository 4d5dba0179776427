//! HTTP client construction and client identity loading.
//!
//! The service may require mutual TLS. The identity is read from the PEM
//! files named in [`ClientCertificate`], checked for at least one certificate
//! and exactly one usable private key, and handed to `reqwest`.

use rustls::pki_types::{CertificateDer, PrivateKeyDer};

use crate::config::{ClientCertificate, ComodoClientConfig};
use crate::error::{ComodoError, Result};
use crate::USER_AGENT;

/// Build a reqwest Client for talking to the service.
///
/// The client keeps a cookie store for the lifetime of the session. When
/// `with_identity` is set and the configuration enables client certificate
/// authentication, the identity is presented on every request.
pub fn build_http_client(config: &ComodoClientConfig, with_identity: bool) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .cookie_store(true)
        .user_agent(USER_AGENT)
        .min_tls_version(reqwest::tls::Version::TLS_1_2);

    if with_identity {
        if let Some(ref client_cert) = config.client_cert {
            let identity = load_client_identity(client_cert)?;
            builder = builder.identity(identity.to_reqwest()?);
        }
    }

    builder
        .build()
        .map_err(|e| ComodoError::tls(format!("Failed to build HTTP client: {}", e)))
}

/// PEM-encoded client certificate chain and private key.
#[derive(Clone)]
pub struct ClientIdentity {
    /// Certificate chain, leaf first.
    pub cert_pem: Vec<u8>,
    /// Private key.
    pub key_pem: Vec<u8>,
}

impl std::fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("cert_pem", &format!("{} bytes", self.cert_pem.len()))
            .field("key_pem", &"<redacted>")
            .finish()
    }
}

impl ClientIdentity {
    fn to_reqwest(&self) -> Result<reqwest::Identity> {
        // reqwest wants certificate and key in one PEM buffer.
        let mut pem_data = self.cert_pem.clone();
        pem_data.extend_from_slice(b"\n");
        pem_data.extend_from_slice(&self.key_pem);

        reqwest::Identity::from_pem(&pem_data)
            .map_err(|e| ComodoError::tls(format!("Failed to create client identity: {}", e)))
    }
}

/// Read and validate the client certificate and key files.
pub fn load_client_identity(client_cert: &ClientCertificate) -> Result<ClientIdentity> {
    let cert_pem = std::fs::read(&client_cert.cert_path)?;
    let key_pem = std::fs::read(&client_cert.key_path)?;

    let certs = parse_pem_certificates(&cert_pem)?;
    parse_pem_private_key(&key_pem)?;
    tracing::debug!(
        "Loaded client identity from {} ({} certificates)",
        client_cert.cert_path.display(),
        certs.len()
    );

    Ok(ClientIdentity { cert_pem, key_pem })
}

/// Parse PEM-encoded certificates.
pub fn parse_pem_certificates(pem_data: &[u8]) -> Result<Vec<CertificateDer<'static>>> {
    let mut reader = std::io::BufReader::new(pem_data);
    let certs: Vec<_> = rustls_pemfile::certs(&mut reader)
        .filter_map(|result| result.ok())
        .collect();

    if certs.is_empty() {
        return Err(ComodoError::invalid_pem("No certificates found in PEM data"));
    }

    Ok(certs)
}

/// Parse a PEM-encoded private key (PKCS#8, PKCS#1 or SEC1).
pub fn parse_pem_private_key(pem_data: &[u8]) -> Result<PrivateKeyDer<'static>> {
    let mut reader = std::io::BufReader::new(pem_data);

    loop {
        match rustls_pemfile::read_one(&mut reader) {
            Ok(Some(rustls_pemfile::Item::Pkcs8Key(key))) => return Ok(PrivateKeyDer::Pkcs8(key)),
            Ok(Some(rustls_pemfile::Item::Pkcs1Key(key))) => return Ok(PrivateKeyDer::Pkcs1(key)),
            Ok(Some(rustls_pemfile::Item::Sec1Key(key))) => return Ok(PrivateKeyDer::Sec1(key)),
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                return Err(ComodoError::invalid_pem(format!("Failed to parse PEM: {}", e)));
            }
        }
    }

    Err(ComodoError::invalid_pem("No private key found in PEM data"))
}
