/// Endpoint used when no `WAITLIST_ENDPOINT` was set at build time
pub const DEFAULT_ENDPOINT: &str = "/api/waitlist";

/// How submissions must be encoded for the configured endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EndpointKind {
    /// Formspree-style collector: multipart body, JSON error payloads
    #[display("formspree")]
    Formspree,
    /// Custom or local collector: JSON body
    #[display("json")]
    Json,
}

impl EndpointKind {
    /// Detect the endpoint kind from its URL
    ///
    /// Only absolute URLs whose host is `formspree.io` (or a subdomain of it)
    /// are treated as formspree endpoints.
    pub fn detect(endpoint: &str) -> Self {
        let Some((_, rest)) = endpoint.trim().split_once("://") else {
            return EndpointKind::Json;
        };

        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = authority
            .rsplit('@')
            .next()
            .unwrap_or_default()
            .split(':')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if host == "formspree.io" || host.ends_with(".formspree.io") {
            EndpointKind::Formspree
        } else {
            EndpointKind::Json
        }
    }
}

/// Where and how the waitlist form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub endpoint: String,
    pub kind: EndpointKind,
}

impl WaitlistConfig {
    /// Create a config, detecting the endpoint kind from the URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let kind = EndpointKind::detect(&endpoint);
        Self { endpoint, kind }
    }

    /// Config baked into the bundle from `WAITLIST_ENDPOINT` at build time
    pub fn from_build_env() -> Self {
        Self::from_optional(option_env!("WAITLIST_ENDPOINT"))
    }

    /// Config for an optional endpoint, falling back to [`DEFAULT_ENDPOINT`]
    pub fn from_optional(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Self::new(endpoint),
            None => Self::new(DEFAULT_ENDPOINT),
        }
    }
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_formspree() {
        assert_eq!(
            EndpointKind::detect("https://formspree.io/f/xyzabcd"),
            EndpointKind::Formspree
        );
        assert_eq!(
            EndpointKind::detect("https://www.formspree.io/f/xyzabcd"),
            EndpointKind::Formspree
        );
        assert_eq!(
            EndpointKind::detect("HTTPS://FORMSPREE.IO:443/f/xyz"),
            EndpointKind::Formspree
        );
    }

    #[test]
    fn test_detect_json() {
        assert_eq!(EndpointKind::detect("/api/waitlist"), EndpointKind::Json);
        assert_eq!(
            EndpointKind::detect("https://api.example.com/waitlist"),
            EndpointKind::Json
        );
        // Host must match, not just appear somewhere in the URL
        assert_eq!(
            EndpointKind::detect("https://example.com/formspree.io/f/x"),
            EndpointKind::Json
        );
        assert_eq!(
            EndpointKind::detect("https://notformspree.io/f/x"),
            EndpointKind::Json
        );
    }

    #[test]
    fn test_config_new_detects_kind() {
        let config = WaitlistConfig::new("https://formspree.io/f/abc");
        assert_eq!(config.kind, EndpointKind::Formspree);
        assert_eq!(config.endpoint, "https://formspree.io/f/abc");
    }

    #[test]
    fn test_config_from_optional_falls_back() {
        assert_eq!(WaitlistConfig::from_optional(None), WaitlistConfig::default());
        assert_eq!(
            WaitlistConfig::from_optional(Some("   ")),
            WaitlistConfig::default()
        );
        assert_eq!(
            WaitlistConfig::from_optional(Some(" https://formspree.io/f/abc ")).kind,
            EndpointKind::Formspree
        );
    }

    #[test]
    fn test_default_config_is_local_json() {
        let config = WaitlistConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.kind, EndpointKind::Json);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EndpointKind::Formspree.to_string(), "formspree");
        assert_eq!(EndpointKind::Json.to_string(), "json");
    }
}
