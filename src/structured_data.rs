//! schema.org `Person` metadata embedded in the page head as JSON-LD.

use serde::Serialize;
use thiserror::Error;

use crate::profile::{is_configured, Profile};

#[derive(Error, Debug)]
pub enum StructuredDataError {
    #[error("Couldn't serialize structured data: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize, Debug)]
struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "addressLocality")]
    locality: &'a str,
}

#[derive(Serialize, Debug)]
struct Person<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: &'a str,
    telephone: &'a str,
    description: &'a str,
    image: String,
    address: PostalAddress<'a>,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    same_as: Vec<&'a str>,
}

pub fn person_json_ld(profile: &Profile) -> Result<String, StructuredDataError> {
    let same_as = [profile.links.linkedin, profile.links.github]
        .into_iter()
        .filter(|l| is_configured(l))
        .collect();
    let person = Person {
        context: "https://schema.org",
        kind: "Person",
        name: profile.name,
        job_title: profile.title,
        email: profile.email,
        telephone: profile.phone,
        description: profile.summary,
        image: profile.portrait.href(),
        address: PostalAddress {
            kind: "PostalAddress",
            locality: profile.location,
        },
        same_as,
    };
    Ok(serde_json::to_string(&person)?)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::profile::{Links, PROFILE};

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("should be valid json")
    }

    #[test]
    fn test_person_fields() {
        let json = person_json_ld(&PROFILE).unwrap();
        let value = parse(&json);
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "ROBERT JOHNN C. LLEMIT");
        assert_eq!(value["jobTitle"], "UI Designer & Frontend Developer");
        assert_eq!(value["telephone"], "+63 963 509 5073");
        assert_eq!(value["image"], "/images/me.svg");
        assert_eq!(
            value["address"]["addressLocality"],
            "Tagum City, Davao del Norte, Philippines"
        );
    }

    #[test]
    fn test_placeholder_links_omitted() {
        let value = parse(&person_json_ld(&PROFILE).unwrap());
        assert!(value.get("sameAs").is_none());
    }

    #[test]
    fn test_configured_links_listed() {
        let profile = Profile {
            links: Links {
                linkedin: "https://linkedin.com/in/example",
                github: "#",
                resume: "#",
            },
            ..PROFILE
        };
        let value = parse(&person_json_ld(&profile).unwrap());
        assert_eq!(
            value["sameAs"],
            serde_json::json!(["https://linkedin.com/in/example"])
        );
    }
}
