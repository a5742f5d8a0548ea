//! League catalog: the static country -> leagues configuration.
//!
//! Format (JSON):
//! ```json
//! { "england": [ { "title": "Premier League", "teams": ["Arsenal", "Chelsea"] } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueDefinition {
    pub title: String,
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueCatalog {
    countries: BTreeMap<String, Vec<LeagueDefinition>>,
}

impl LeagueCatalog {
    pub fn new(countries: BTreeMap<String, Vec<LeagueDefinition>>) -> Self {
        Self { countries }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: LeagueCatalog = serde_json::from_str(json)?;
        if catalog.countries.is_empty() {
            return Err(CoreError::Catalog("catalog lists no countries".to_string()));
        }
        let empty = catalog.countries.iter().find(|(_, leagues)| leagues.is_empty());
        if let Some((country, _)) = empty {
            return Err(CoreError::Catalog(format!("country '{country}' lists no leagues")));
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Catalog(format!("failed to read catalog at '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Country names, sorted.
    pub fn countries_available(&self) -> Vec<String> {
        self.countries.keys().cloned().collect()
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    /// The last league listed for a country, validated for setup.
    pub fn latest_league(&self, country: &str) -> Result<&LeagueDefinition> {
        let leagues = self.countries.get(country).ok_or_else(|| CoreError::UnknownCountry {
            country: country.to_string(),
            available: self.countries_available(),
        })?;
        let definition = leagues.last().ok_or_else(|| {
            CoreError::Catalog(format!("country '{country}' lists no leagues"))
        })?;

        if definition.teams.is_empty() {
            return Err(CoreError::EmptyLeague {
                country: country.to_string(),
                title: definition.title.clone(),
            });
        }

        Ok(definition)
    }
}
