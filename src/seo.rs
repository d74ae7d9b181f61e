use serde_json::json;

use crate::{config::SiteConfig, content::PROFILE};

/// schema.org `Person` description of the page owner, as JSON-LD.
pub fn person_json_ld(site: &SiteConfig) -> String {
    let socials = PROFILE.socials;
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "alternateName": PROFILE.nickname,
        "description": PROFILE.hero_tagline,
        "url": site.url("/"),
        "image": PROFILE.portrait,
        "email": PROFILE.email_address(),
        "homeLocation": { "@type": "Place", "name": PROFILE.location },
        "sameAs": [
            socials.instagram,
            socials.instagram2,
            socials.threads,
            socials.facebook,
            socials.youtube,
        ],
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn describes_the_profile() {
        let site = SiteConfig {
            base_url: "https://ridho.example".to_string(),
        };
        let v: Value = serde_json::from_str(&person_json_ld(&site)).unwrap();
        assert_eq!(v["@type"], "Person");
        assert_eq!(v["name"], PROFILE.name);
        assert_eq!(v["url"], "https://ridho.example/");
        assert_eq!(v["sameAs"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn safe_inside_a_script_tag() {
        assert!(!person_json_ld(&SiteConfig::default()).contains("</"));
    }
}
