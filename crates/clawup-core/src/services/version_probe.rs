//! Version retrieval shared by both checkers.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::VersionPair;
use crate::ports::{
    InstalledVersionPort, PackageSpec, RegistryPort, VersionQueryError, VersionSide,
};

/// Both retrieval outcomes of one check.
#[derive(Debug)]
pub struct VersionReport {
    pub current: Result<String, VersionQueryError>,
    pub remote: Result<String, VersionQueryError>,
}

impl VersionReport {
    /// Collapse into a [`VersionPair`], dropping failure reasons.
    pub fn pair(&self) -> VersionPair {
        VersionPair::new(self.current.as_ref().ok().cloned(), self.remote.as_ref().ok().cloned())
    }

    /// Failed queries and the side they belong to.
    pub fn failures(&self) -> Vec<(VersionSide, &VersionQueryError)> {
        let mut failures = Vec::new();
        if let Err(e) = &self.current {
            failures.push((VersionSide::Installed, e));
        }
        if let Err(e) = &self.remote {
            failures.push((VersionSide::Registry, e));
        }
        failures
    }
}

/// Queries the installed and published versions.
///
/// Both queries are always attempted, one after the other; a failure on one
/// side never skips the other.
pub struct VersionProbe {
    installed: Arc<dyn InstalledVersionPort>,
    registry: Arc<dyn RegistryPort>,
    package: PackageSpec,
}

impl VersionProbe {
    pub fn new(
        installed: Arc<dyn InstalledVersionPort>,
        registry: Arc<dyn RegistryPort>,
        package: PackageSpec,
    ) -> Self {
        Self {
            installed,
            registry,
            package,
        }
    }

    /// The package whose registry channel is queried.
    pub const fn package(&self) -> &PackageSpec {
        &self.package
    }

    /// Run both version queries.
    pub async fn probe(&self) -> VersionReport {
        let current = self.installed.installed_version().await;
        match &current {
            Ok(version) => debug!(%version, "Resolved local version"),
            Err(e) => warn!(error = %e, "Failed to get local version"),
        }

        let remote = self.registry.latest_version(&self.package).await;
        match &remote {
            Ok(version) => debug!(%version, package = %self.package, "Resolved remote version"),
            Err(e) => warn!(error = %e, package = %self.package, "Failed to get remote version"),
        }

        VersionReport { current, remote }
    }
}
