use crate::core::domain::error::ValidationError;
use std::collections::HashSet;
use std::fmt;
use url::Url;

const SYSTEMS_PATH: &str = "/redfish/v1/Systems/";
const MANAGERS_PATH: &str = "/redfish/v1/Managers/";

/// Represents the configuration for an inventory base URL
///
/// By default any absolute URL that can carry a path (RFC 3986) is accepted.
/// A scheme allowlist and a length cap can be opted into.
///
/// # Examples
///
/// ```
/// use inventory_discovery::{InventoryUrl, InventoryUrlConfig};
///
/// let any = InventoryUrlConfig::default();
/// assert!(InventoryUrl::parse("ftp://smd.example.com", &any).is_ok());
///
/// let http = InventoryUrlConfig::http();
/// assert!(InventoryUrl::parse("ftp://smd.example.com", &http).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryUrlConfig {
    /// Accepted schemes. Empty accepts every scheme.
    allowed_schemes: HashSet<String>,
    max_length: Option<usize>,
}

impl InventoryUrlConfig {
    /// Only http(s) URLs of at most 2083 characters.
    pub fn http() -> Self {
        Self::default()
            .allow_scheme("http")
            .allow_scheme("https")
            .max_length(2083)
    }

    /// Adds a scheme to the set of accepted schemes.
    ///
    /// Once a scheme is added, URLs with any other scheme are rejected.
    pub fn allow_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.allowed_schemes.insert(scheme.into());
        self
    }

    /// Caps the accepted URL length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    fn allowed_schemes_list(&self) -> String {
        let mut schemes = self.allowed_schemes.iter().cloned().collect::<Vec<String>>();
        schemes.sort();
        schemes.join(", ")
    }
}

/// A validated base URL of the inventory service.
///
/// System and Manager URIs are derived from it by replacing its path, so
/// scheme, host, port, query and fragment carry over unchanged.
///
/// # Examples
///
/// ```
/// use inventory_discovery::{InventoryUrl, InventoryUrlConfig};
///
/// let base = InventoryUrl::parse("https://smd.example.com:27779", &InventoryUrlConfig::default()).unwrap();
/// assert_eq!(
///     base.system_uri("x1000c1s7b0n0"),
///     "https://smd.example.com:27779/redfish/v1/Systems/x1000c1s7b0n0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryUrl(Url);

impl InventoryUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the URL is empty, does not parse as an
    /// absolute URL or cannot carry a path, and if it breaks a scheme or
    /// length restriction the configuration opted into.
    pub fn parse(value: &str, config: &InventoryUrlConfig) -> Result<Self, ValidationError> {
        validate_url(value, config).map(Self)
    }

    /// Returns the underlying URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the base URL with its path replaced by `path`.
    pub fn with_path(&self, path: &str) -> String {
        let mut url = self.0.clone();
        url.set_path(path);
        url.to_string()
    }

    /// URI of the Redfish System for a node.
    pub fn system_uri(&self, xname: &str) -> String {
        self.with_path(&format!("{SYSTEMS_PATH}{xname}"))
    }

    /// URI of the Redfish Manager for a BMC.
    pub fn manager_uri(&self, bmc_xname: &str) -> String {
        self.with_path(&format!("{MANAGERS_PATH}{bmc_xname}"))
    }
}

impl fmt::Display for InventoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a base URL and returns it parsed.
fn validate_url(url: &str, config: &InventoryUrlConfig) -> Result<Url, ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "base_uri".to_string(),
            message: "URI cannot be empty".to_string(),
        });
    }

    if let Some(max_length) = config.max_length.filter(|max| url.len() > *max) {
        return Err(ValidationError::Format(format!(
            "URI exceeds maximum length of {} characters",
            max_length
        )));
    }

    let parsed = Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("invalid URI {}: {}", url, e)))?;

    if !config.allowed_schemes.is_empty() && !config.allowed_schemes.contains(parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: {}",
            parsed.scheme(),
            config.allowed_schemes_list()
        )));
    }

    if parsed.cannot_be_a_base() {
        return Err(ValidationError::ConstraintViolation(format!(
            "URI {} cannot carry a path",
            url
        )));
    }

    Ok(parsed)
}
