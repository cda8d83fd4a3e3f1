// ABOUTME: Integration tests for validated image references and service names.
// ABOUTME: Tests parsing, validation and Docker Hub detection.

use docker_check_tags::types::*;

mod image_ref_tests {
    use super::*;

    #[test]
    fn parse_simple_name_has_no_tag() {
        let img = ImageRef::parse("nginx").unwrap();
        assert_eq!(img.name(), "nginx");
        assert!(img.tag().is_none());
        assert!(img.registry().is_none());
        assert!(img.digest().is_none());
    }

    #[test]
    fn parse_name_with_tag() {
        let img = ImageRef::parse("nginx:1.25").unwrap();
        assert_eq!(img.name(), "nginx");
        assert_eq!(img.tag(), Some("1.25"));
    }

    #[test]
    fn parse_with_org() {
        let img = ImageRef::parse("bitnami/redis:7.2.4-debian-12-r0").unwrap();
        assert!(img.registry().is_none());
        assert_eq!(img.name(), "bitnami/redis");
        assert_eq!(img.tag(), Some("7.2.4-debian-12-r0"));
    }

    #[test]
    fn parse_with_registry() {
        let img = ImageRef::parse("ghcr.io/org/repo:v1.2.3").unwrap();
        assert_eq!(img.registry(), Some("ghcr.io"));
        assert_eq!(img.name(), "org/repo");
        assert_eq!(img.tag(), Some("v1.2.3"));
    }

    #[test]
    fn registry_port_is_not_a_tag() {
        let img = ImageRef::parse("localhost:5000/app").unwrap();
        assert_eq!(img.registry(), Some("localhost:5000"));
        assert_eq!(img.name(), "app");
        assert!(img.tag().is_none());

        let tagged = ImageRef::parse("localhost:5000/app:2.0").unwrap();
        assert_eq!(tagged.tag(), Some("2.0"));
    }

    #[test]
    fn parse_full_reference() {
        let img = ImageRef::parse("ghcr.io/org/repo:v1@sha256:abc123").unwrap();
        assert_eq!(img.registry(), Some("ghcr.io"));
        assert_eq!(img.name(), "org/repo");
        assert_eq!(img.tag(), Some("v1"));
        assert_eq!(img.digest(), Some("sha256:abc123"));
    }

    #[test]
    fn malformed_references_are_rejected() {
        assert!(matches!(ImageRef::parse(""), Err(ParseImageRefError::Empty)));
        assert!(matches!(
            ImageRef::parse("invalid image!"),
            Err(ParseImageRefError::InvalidChar(' '))
        ));
        assert!(ImageRef::parse("nginx:").is_err());
        assert!(ImageRef::parse("nginx@").is_err());
        assert!(ImageRef::parse("org//repo:1").is_err());
    }

    #[test]
    fn docker_hub_detection() {
        assert!(ImageRef::parse("python:3.12").unwrap().is_docker_hub());
        assert!(ImageRef::parse("docker.io/library/python:3.12").unwrap().is_docker_hub());
        assert!(ImageRef::parse("index.docker.io/org/app:1").unwrap().is_docker_hub());
        assert!(!ImageRef::parse("ghcr.io/org/app:1").unwrap().is_docker_hub());
        assert!(!ImageRef::parse("localhost:5000/app:1").unwrap().is_docker_hub());
    }

    #[test]
    fn display_round_trips() {
        for input in ["ghcr.io/org/repo:v1", "nginx", "redis:7.2@sha256:abc"] {
            assert_eq!(ImageRef::parse(input).unwrap().to_string(), input);
        }
    }
}

mod service_name_tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["web", "db-1", "api_v2", "front.end", "9lives"] {
            assert!(ServiceName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn invalid_names() {
        assert!(matches!(ServiceName::new(""), Err(ServiceNameError::Empty)));
        assert!(matches!(
            ServiceName::new("-web"),
            Err(ServiceNameError::InvalidStart)
        ));
        assert!(matches!(
            ServiceName::new("web app"),
            Err(ServiceNameError::InvalidChar(' '))
        ));
    }

    #[test]
    fn exposes_its_text() {
        let name = ServiceName::new("postgres").unwrap();
        assert_eq!(name.as_str(), "postgres");
        assert_eq!(name.to_string(), "postgres");
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = ServiceName::new("web").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"web\"");
    }
}
