//! Fixtures

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::catalogue::{Catalogue, CatalogueError, ServiceItem, Tier};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file.
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The parsed services do not form a valid catalogue.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

#[derive(Debug, Deserialize)]
struct CatalogueFixture {
    services: Vec<ServiceItem>,
}

/// Load a catalogue from a YAML fixture file.
///
/// The expected shape is a `services` list of `{id, label, cost, tier?}` maps,
/// with `tier` defaulting to `standard`.
///
/// # Errors
///
/// - [`FixtureError::Io`]: the file could not be read.
/// - [`FixtureError::Yaml`]: the file is not valid YAML of the expected shape.
/// - [`FixtureError::Catalogue`]: the entries contain duplicates or zero costs.
pub fn load_catalogue(path: impl AsRef<Path>) -> Result<Catalogue, FixtureError> {
    let contents = fs::read_to_string(path)?;
    let fixture: CatalogueFixture = serde_norway::from_str(&contents)?;

    Ok(Catalogue::new(fixture.services)?)
}

/// The default agency service catalogue.
///
/// Declaration order is the display order; the three highest-cost services are
/// the flagship tier that gates the new-client promotion.
///
/// # Errors
///
/// Returns a [`CatalogueError`] if the built-in table is invalid; it is not,
/// but construction validates it like any other catalogue.
pub fn agency_catalogue() -> Result<Catalogue, CatalogueError> {
    let services = [
        ("video-production", "Video Production", 400, Tier::Flagship),
        ("website-development", "Website Development", 500, Tier::Flagship),
        ("ads-management", "Targeted Ads Mgmt", 300, Tier::Flagship),
        ("seo-optimization", "SEO Optimization", 100, Tier::Standard),
        ("content-strategy", "Content Strategy", 200, Tier::Standard),
        ("social-shop", "Social Shop Setup", 120, Tier::Standard),
        ("ugc-program", "UGC Program", 110, Tier::Standard),
        ("brand-monitoring", "Brand Monitoring", 80, Tier::Standard),
        ("performance-reporting", "Performance Reporting", 60, Tier::Standard),
        ("channel-audit", "Channel Audit", 50, Tier::Standard),
        ("customer-support", "Customer Support Mgmt", 70, Tier::Standard),
        ("quick-hit-content", "Quick-Hit Content", 90, Tier::Standard),
        ("email-marketing", "Email Marketing", 150, Tier::Standard),
        ("influencer-outreach", "Influencer Outreach", 250, Tier::Standard),
    ];

    let items: Vec<ServiceItem> = services
        .into_iter()
        .map(|(id, label, cost, tier)| ServiceItem {
            id: id.into(),
            label: label.into(),
            cost,
            tier,
        })
        .collect();

    Catalogue::new(items)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn agency_catalogue_has_three_flagship_services() -> TestResult {
        let catalogue = agency_catalogue()?;

        let flagships: Vec<&str> = catalogue
            .iter()
            .filter(|item| item.tier == Tier::Flagship)
            .map(|item| item.id.as_str())
            .collect();

        assert_eq!(
            flagships,
            ["video-production", "website-development", "ads-management"]
        );
        assert_eq!(catalogue.len(), 14);
        Ok(())
    }

    #[test]
    fn load_catalogue_reads_a_yaml_fixture() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "services:\n  \
             - {{ id: video, label: Video, cost: 400, tier: flagship }}\n  \
             - {{ id: seo, label: SEO, cost: 100 }}"
        )?;

        let catalogue = load_catalogue(file.path())?;

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.get("video").map(|item| item.tier), Some(Tier::Flagship));
        assert_eq!(catalogue.get("seo").map(|item| item.tier), Some(Tier::Standard));
        Ok(())
    }

    #[test]
    fn load_catalogue_rejects_duplicate_ids() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "services:\n  \
             - {{ id: seo, label: SEO, cost: 100 }}\n  \
             - {{ id: seo, label: SEO Again, cost: 200 }}"
        )?;

        let result = load_catalogue(file.path());

        assert!(
            matches!(result, Err(FixtureError::Catalogue(CatalogueError::DuplicateId(_)))),
            "expected a duplicate-id error"
        );
        Ok(())
    }
}
