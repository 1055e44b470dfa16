use serde::{Deserialize, Serialize};

/// Reserved name of the site-wide global configuration.
pub const GLOBAL_CONFIGURATION_NAME: &str = "global";

/// Sort order applied to facet values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FacetSortOrder {
    #[default]
    Count,
    Value,
}

/// A sidebar facet rendered next to search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarFacet {
    pub index_field: String,
    #[serde(default)]
    pub facet_limit: Option<u32>,
    #[serde(default)]
    pub sort_order: FacetSortOrder,
}

/// Settings for the recent-submissions block of a view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentSubmissionsConfiguration {
    pub metadata_sort_field: String,
    pub max: u32,
}

/// Settings for the most-viewed block of a view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MostViewedConfiguration {
    pub max: u32,
}

/// Metadata rendering and highlight settings, resolved by name from the
/// service container rather than from the configuration registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewHighlightConfiguration {
    pub metadata_fields: Vec<String>,
    #[serde(default)]
    pub max_length: Option<u32>,
}

/// A named discovery configuration.
///
/// The `id` equals the name the registry knows it by (or the registry's
/// default id when the entry is the fallback). The resolver only ever reads
/// these; creation and ownership stay with the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscoveryConfiguration {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sidebar_facets: Vec<SidebarFacet>,
    #[serde(default)]
    pub recent_submissions: Option<RecentSubmissionsConfiguration>,
    #[serde(default)]
    pub most_viewed: Option<MostViewedConfiguration>,
}

impl DiscoveryConfiguration {
    /// Bare configuration with the given id and no settings.
    pub fn named(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sidebar_facets: Vec::new(),
            recent_submissions: None,
            most_viewed: None,
        }
    }
}
