//! Target URLs for the four configuration lookups.

const APPLE_CDN_BASE: &str = "https://app-site-association.cdn-apple.com";
const DIGITAL_ASSET_LINKS_BASE: &str = "https://digitalassetlinks.googleapis.com";

/// URL builders for the four probe targets.
///
/// The scheme and service bases are injectable so tests can point every probe
/// at a local mock server; the defaults are the production hosts.
#[derive(Debug, Clone)]
pub struct ProbeEndpoints {
    /// Scheme used for the well-known lookups against the domain itself.
    pub origin_scheme: String,
    /// Apple's CDN-backed association lookup service.
    pub cdn_base: String,
    /// Google's Digital Asset Links API.
    pub dal_base: String,
}

impl Default for ProbeEndpoints {
    fn default() -> Self {
        Self {
            origin_scheme: "https".to_string(),
            cdn_base: APPLE_CDN_BASE.to_string(),
            dal_base: DIGITAL_ASSET_LINKS_BASE.to_string(),
        }
    }
}

impl ProbeEndpoints {
    /// `apple-app-site-association` served by the domain itself.
    pub fn aasa_url(&self, domain: &str) -> String {
        format!(
            "{}://{}/.well-known/apple-app-site-association",
            self.origin_scheme, domain
        )
    }

    /// Apple's CDN copy of the association file.
    pub fn aasa_cdn_url(&self, domain: &str) -> String {
        format!("{}/a/v1/{}", self.cdn_base, domain)
    }

    /// `assetlinks.json` served by the domain itself.
    pub fn assetlinks_url(&self, domain: &str) -> String {
        format!(
            "{}://{}/.well-known/assetlinks.json",
            self.origin_scheme, domain
        )
    }

    /// Google's cached statement list for the domain.
    ///
    /// The query string is emitted verbatim; the API accepts the slash in the
    /// relation value unencoded.
    pub fn assetlinks_cached_url(&self, domain: &str) -> String {
        format!(
            "{}/v1/statements:list?source.web.site=https://{}&relation=delegate_permission/common.handle_all_urls",
            self.dal_base, domain
        )
    }
}
