//! Static registry of monitored services

use serde::{Deserialize, Serialize};

/// A backend whose health is looked up in Traefik
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredService {
    /// Traefik service identifier, e.g. `discovery@docker`
    pub service_key: String,
    pub display_name: String,
    pub url: String,
}

impl MonitoredService {
    pub fn new(
        service_key: impl Into<String>,
        display_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            service_key: service_key.into(),
            display_name: display_name.into(),
            url: url.into(),
        }
    }
}

/// Ordered, read-only list of monitored services.
///
/// The registry order is the order of every snapshot produced from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    services: Vec<MonitoredService>,
}

impl Registry {
    pub fn new(services: Vec<MonitoredService>) -> Self {
        Self { services }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonitoredService> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl From<Vec<MonitoredService>> for Registry {
    fn from(services: Vec<MonitoredService>) -> Self {
        Self::new(services)
    }
}
