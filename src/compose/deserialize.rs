// ABOUTME: Custom serde deserializer for the compose services mapping.
// ABOUTME: Keeps document order and validates service names.

use serde::de::{MapAccess, Visitor};
use std::fmt;

use super::ServiceSpec;
use crate::types::ServiceName;

/// Marks a field as present, keeping an explicit null as `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn deserialize_services<'de, D>(
    deserializer: D,
) -> Result<Vec<(ServiceName, ServiceSpec)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_map(ServicesVisitor)
}

struct ServicesVisitor;

impl<'de> Visitor<'de> for ServicesVisitor {
    type Value = Vec<(ServiceName, ServiceSpec)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of service names to service definitions")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut services = Vec::new();

        while let Some(name) = map.next_key::<String>()? {
            let name = ServiceName::new(&name).map_err(serde::de::Error::custom)?;
            // `web:` with no body is a service with no settings.
            let spec = map.next_value::<Option<ServiceSpec>>()?.unwrap_or_default();
            services.push((name, spec));
        }

        Ok(services)
    }
}
