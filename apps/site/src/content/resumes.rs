//! Resume route table and resolver for `/resume/:resume_type`.

use thiserror::Error;

/// A downloadable resume selected by route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeConfig {
    pub key: &'static str,
    pub title: &'static str,
    pub document_url: &'static str,
}

/// Keys are matched case-sensitively; there is no fallback entry.
pub const RESUMES: &[ResumeConfig] = &[
    ResumeConfig {
        key: "devops-resume",
        title: "DevOps Resume",
        document_url: "/Conner_Reavill_DevOps_Resume.pdf",
    },
    ResumeConfig {
        key: "fullstack-resume",
        title: "Full-Stack Resume",
        document_url: "/Conner_Reavill_FullStack_Resume.pdf",
    },
    ResumeConfig {
        key: "SWE-resume",
        title: "Software Engineer Resume",
        document_url: "/Conner_Reavill_SWE_Resume.pdf",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no resume is configured for key '{key}'")]
pub struct UnknownResume {
    pub key: String,
}

/// Resolves a route key against the static table.
pub fn resolve(key: &str) -> Result<&'static ResumeConfig, UnknownResume> {
    RESUMES
        .iter()
        .find(|r| r.key == key)
        .ok_or_else(|| UnknownResume {
            key: key.to_string(),
        })
}

pub fn all() -> &'static [ResumeConfig] {
    RESUMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_devops() {
        let config = resolve("devops-resume").expect("configured key");
        assert_eq!(config.title, "DevOps Resume");
        assert_eq!(config.document_url, "/Conner_Reavill_DevOps_Resume.pdf");
    }

    #[test]
    fn test_resolve_every_configured_key() {
        let expected = [
            ("devops-resume", "DevOps Resume", "/Conner_Reavill_DevOps_Resume.pdf"),
            (
                "fullstack-resume",
                "Full-Stack Resume",
                "/Conner_Reavill_FullStack_Resume.pdf",
            ),
            (
                "SWE-resume",
                "Software Engineer Resume",
                "/Conner_Reavill_SWE_Resume.pdf",
            ),
        ];
        for (key, title, url) in expected {
            let config = resolve(key).unwrap();
            assert_eq!(config.key, key);
            assert_eq!(config.title, title);
            assert_eq!(config.document_url, url);
        }
        assert_eq!(all().len(), expected.len());
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let err = resolve("unknown-key").unwrap_err();
        assert_eq!(err.key, "unknown-key");
        assert_eq!(err.to_string(), "no resume is configured for key 'unknown-key'");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!(resolve("swe-resume").is_err());
        assert!(resolve("SWE-resume").is_ok());
        assert!(resolve("").is_err());
    }
}
