//! DTOs for the domain check report.

use serde::Serialize;
use serde_json::Value;

use crate::probes::DomainProbes;

/// Combined iOS/Android deep-link configuration report.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub ios: IosReport,
    pub android: AndroidReport,
}

#[derive(Debug, Serialize)]
pub struct IosReport {
    pub aasa: AasaReport,
}

/// `apple-app-site-association` lookup results.
///
/// `found` and `contentType` describe the direct well-known lookup;
/// `cdnContent` is the parsed body of Apple's CDN lookup. Content fields are
/// `null` when a lookup failed or its body was not valid JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AasaReport {
    pub found: bool,
    pub content_type: String,
    pub content: Option<Value>,
    pub cdn_content: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AndroidReport {
    pub assetlinks: AssetlinksReport,
}

/// `assetlinks.json` lookup results.
///
/// Mirrors [`AasaReport`], with `cachedContent` holding the parsed response
/// of the Digital Asset Links API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetlinksReport {
    pub found: bool,
    pub content_type: String,
    pub content: Option<Value>,
    pub cached_content: Option<Value>,
}

impl From<DomainProbes> for CheckResponse {
    /// Pure field assembly: the direct probes contribute status, content type
    /// and content; the CDN/API probes contribute only their parsed bodies.
    fn from(probes: DomainProbes) -> Self {
        let DomainProbes {
            aasa,
            aasa_cdn,
            assetlinks,
            assetlinks_cached,
        } = probes;

        Self {
            ios: IosReport {
                aasa: AasaReport {
                    found: aasa.found,
                    content_type: aasa.content_type,
                    content: aasa.content,
                    cdn_content: aasa_cdn.content,
                },
            },
            android: AndroidReport {
                assetlinks: AssetlinksReport {
                    found: assetlinks.found,
                    content_type: assetlinks.content_type,
                    content: assetlinks.content,
                    cached_content: assetlinks_cached.content,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::ProbeOutcome;
    use serde_json::json;

    fn outcome(found: bool, content: Option<Value>) -> ProbeOutcome {
        ProbeOutcome {
            found,
            content_type: "application/json".to_string(),
            content,
        }
    }

    #[test]
    fn test_assembly_maps_each_probe_to_its_slot() {
        let probes = DomainProbes {
            aasa: outcome(true, Some(json!({"applinks": {}}))),
            aasa_cdn: outcome(true, Some(json!({"cdn": true}))),
            assetlinks: outcome(false, None),
            assetlinks_cached: outcome(true, Some(json!([{"relation": []}]))),
        };

        let report = CheckResponse::from(probes);

        assert!(report.ios.aasa.found);
        assert_eq!(report.ios.aasa.content, Some(json!({"applinks": {}})));
        assert_eq!(report.ios.aasa.cdn_content, Some(json!({"cdn": true})));
        assert!(!report.android.assetlinks.found);
        assert_eq!(report.android.assetlinks.content, None);
        assert_eq!(
            report.android.assetlinks.cached_content,
            Some(json!([{"relation": []}]))
        );
    }

    #[test]
    fn test_wire_shape_is_camel_case_with_explicit_nulls() {
        let probes = DomainProbes {
            aasa: outcome(false, None),
            aasa_cdn: outcome(false, None),
            assetlinks: outcome(false, None),
            assetlinks_cached: outcome(false, None),
        };

        let value = serde_json::to_value(CheckResponse::from(probes)).unwrap();

        assert_eq!(
            value,
            json!({
                "ios": {
                    "aasa": {
                        "found": false,
                        "contentType": "application/json",
                        "content": null,
                        "cdnContent": null,
                    }
                },
                "android": {
                    "assetlinks": {
                        "found": false,
                        "contentType": "application/json",
                        "content": null,
                        "cachedContent": null,
                    }
                }
            })
        );
    }
}
