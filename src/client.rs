//! Comodo CA client implementation.
//!
//! This module provides the main `ComodoClient` struct for driving the
//! certificate lifecycle against the Comodo SSL web service.

use crate::config::ComodoClientConfig;
use crate::error::{ComodoError, Result};
use crate::operations::{cert_types, collect, enroll, names, revoke, AuthData};
use crate::transport::{SoapTransport, Transport};
use crate::types::{
    CertTypeCatalog, CertificateType, Collected, Enrollment, FormatType, ServerType,
    ServiceResult, SubmissionRequest,
};

/// Comodo CA client for certificate lifecycle operations.
///
/// The `ComodoClient` provides:
/// - Certificate type listing
/// - CSR submission
/// - Certificate collection (polling)
/// - Revocation
///
/// Every operation returns a [`ServiceResult`] whose status is classified as
/// success, pending or error. `Err` is reserved for caller mistakes (unknown
/// labels) and for failures at the transport boundary.
///
/// The client holds no mutable state and may be shared between tasks.
///
/// # Example
///
/// ```no_run
/// use comodo_ca_client::{ComodoClient, ComodoClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ComodoClientConfig::builder()
///     .api_url("https://hard.cert-manager.com/private/ws/EPKIManagerSSL?wsdl")?
///     .customer_login_uri("acme")
///     .login("api-user")
///     .org_id(1234)
///     .password("password")
///     .secret_key("secret")
///     .build()?;
///
/// let client = ComodoClient::new(config).await?;
///
/// let types = client.get_cert_types().await?;
/// if let Some(catalog) = types.data() {
///     for cert_type in catalog.iter() {
///         println!("{}: {:?}", cert_type.name, cert_type.terms);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ComodoClient<T: Transport = SoapTransport> {
    config: ComodoClientConfig,
    auth: AuthData,
    transport: T,
}

impl ComodoClient<SoapTransport> {
    /// Create a new client: fetch the WSDL and bind to the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the client identity cannot be loaded or the WSDL
    /// cannot be fetched or read.
    pub async fn new(config: ComodoClientConfig) -> Result<Self> {
        let transport = SoapTransport::connect(&config).await?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ComodoClient<T> {
    /// Create a client over an existing transport.
    pub fn with_transport(config: ComodoClientConfig, transport: T) -> Self {
        let auth = AuthData::from_config(&config);
        Self {
            config,
            auth,
            transport,
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ComodoClientConfig {
        &self.config
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List the certificate types available to the account.
    pub async fn get_cert_types(&self) -> Result<ServiceResult<CertTypeCatalog>> {
        tracing::debug!("Listing certificate types");
        let ret = self
            .transport
            .invoke(
                names::GET_CUSTOMER_CERT_TYPES,
                cert_types::request(&self.auth),
            )
            .await?;

        let result = cert_types::classify(&ret)?;
        log_result(names::GET_CUSTOMER_CERT_TYPES, &result);
        Ok(result)
    }

    /// Submit a CSR.
    ///
    /// The certificate type is resolved by name against the account's
    /// catalog first, so a submission costs two remote calls. On success
    /// the result carries the tracking id used by [`collect`](Self::collect)
    /// and [`revoke`](Self::revoke).
    ///
    /// # Errors
    ///
    /// [`ComodoError::UnknownServerType`] if the server type label is not
    /// recognized (no remote call is made) and
    /// [`ComodoError::UnknownCertType`] if the catalog has no type with the
    /// requested name (`enroll` is not called).
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<ServiceResult<Enrollment>> {
        let server_type: ServerType = request.server_type.parse()?;

        let cert_type = match self.resolve_cert_type(&request.cert_type_name).await? {
            Resolved::Found(cert_type) => cert_type,
            Resolved::Unavailable(result) => return Ok(result),
        };

        tracing::info!(
            "Submitting CSR for '{}' (id {}, term {}, server type {})",
            cert_type.name,
            cert_type.id,
            request.term,
            server_type
        );

        let account = enroll::Account {
            org_id: self.config.org_id,
            secret_key: &self.config.secret_key,
        };
        let params = enroll::request(&self.auth, account, request, &cert_type, server_type);
        let ret = self.transport.invoke(names::ENROLL, params).await?;

        let result = enroll::classify(&ret)?;
        if let Some(enrollment) = result.data() {
            tracing::info!("Request accepted with id {}", enrollment.certificate_id);
        }
        log_result(names::ENROLL, &result);
        Ok(result)
    }

    /// Collect a certificate, with the format given by its label
    /// (e.g. `X509 PEM Bundle`).
    ///
    /// A request the service is still processing is reported as pending.
    /// The caller decides when to call again; the client never loops.
    ///
    /// # Errors
    ///
    /// [`ComodoError::UnknownFormatType`] if the label is not recognized.
    pub async fn collect(
        &self,
        certificate_id: i64,
        format_type: &str,
    ) -> Result<ServiceResult<Collected>> {
        let format: FormatType = format_type.parse()?;
        self.collect_format(certificate_id, format).await
    }

    /// Collect a certificate in `format`.
    pub async fn collect_format(
        &self,
        certificate_id: i64,
        format: FormatType,
    ) -> Result<ServiceResult<Collected>> {
        tracing::debug!("Collecting certificate {} as '{}'", certificate_id, format);
        let ret = self
            .transport
            .invoke(
                names::COLLECT,
                collect::request(&self.auth, certificate_id, format),
            )
            .await?;

        let result = collect::classify(&ret, certificate_id)?;
        log_result(names::COLLECT, &result);
        if let Some(collected) = result.data() {
            tracing::debug!(
                "Certificate {} is {}",
                certificate_id,
                collected.state.as_str()
            );
        }
        Ok(result)
    }

    /// Same as [`collect`](Self::collect) with the arguments reversed.
    pub async fn poll(
        &self,
        format_type: &str,
        certificate_id: i64,
    ) -> Result<ServiceResult<Collected>> {
        self.collect(certificate_id, format_type).await
    }

    /// Revoke a certificate. `reason` may be empty.
    pub async fn revoke(&self, certificate_id: i64, reason: &str) -> Result<ServiceResult<()>> {
        tracing::info!("Revoking certificate {}", certificate_id);
        let ret = self
            .transport
            .invoke(
                names::REVOKE,
                revoke::request(&self.auth, certificate_id, reason),
            )
            .await?;

        let result = revoke::classify(&ret)?;
        log_result(names::REVOKE, &result);
        Ok(result)
    }

    async fn resolve_cert_type(&self, name: &str) -> Result<Resolved> {
        let catalog = match self.get_cert_types().await?.into_error() {
            Ok(error) => return Ok(Resolved::Unavailable(error)),
            Err(listing) => catalog_data(listing)?,
        };
        catalog
            .find(name)
            .cloned()
            .map(Resolved::Found)
            .ok_or_else(|| ComodoError::UnknownCertType(name.to_string()))
    }
}

/// Outcome of resolving a certificate type name.
enum Resolved {
    Found(CertificateType),
    /// The catalog itself could not be listed.
    Unavailable(ServiceResult<Enrollment>),
}

fn catalog_data(result: ServiceResult<CertTypeCatalog>) -> Result<CertTypeCatalog> {
    result
        .into_data()
        .ok_or_else(|| ComodoError::malformed("certificate type listing carried no data"))
}

fn log_result<D>(operation: &str, result: &ServiceResult<D>) {
    let status = result.status();
    if result.is_error() {
        tracing::warn!(
            "{} failed: {} ({})",
            operation,
            status.message,
            status.code
        );
    } else {
        tracing::debug!("{} {}: {}", operation, status.outcome, status.message);
    }
}
