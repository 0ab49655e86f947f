//! Search engine metadata

use serde_json::{Value, json};

/// Canonical public URL of the landing page
pub const SITE_URL: &str = "https://zimageapi.com/";

/// Short description used by meta tags and structured data
pub const SITE_DESCRIPTION: &str =
    "Fastest open-source AI image generation API with Python support";

/// Keywords meta content
pub const SITE_KEYWORDS: &str = "Z image api python, Z image api github, Z image api tutorial";

/// JSON-LD `WebPage` document describing the landing page
pub fn structured_data(page_url: &str) -> Value {
    let origin = site_origin(page_url);

    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": "Z Image API - Advanced AI Image Generation",
        "description": SITE_DESCRIPTION,
        "url": page_url,
        "keywords": SITE_KEYWORDS,
        "inLanguage": "en",
        "isPartOf": {
            "@type": "WebSite",
            "name": "Z Image API",
            "url": origin,
        }
    })
}

/// Scheme and host of an absolute URL, without a trailing slash
pub fn site_origin(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return url.trim_end_matches('/');
    };
    let after_scheme = scheme_end + 3;

    match url[after_scheme..].find('/') {
        Some(path_start) => &url[..after_scheme + path_start],
        None => url,
    }
}
