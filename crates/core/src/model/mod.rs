pub mod citation;
pub mod configuration;
pub mod object;
pub mod rest;

pub use citation::{CitationRecord, CitationStore, EntityStore};
pub use configuration::{
    DiscoveryConfiguration, FacetSortOrder, MostViewedConfiguration,
    RecentSubmissionsConfiguration, SidebarFacet, ViewHighlightConfiguration,
    GLOBAL_CONFIGURATION_NAME,
};
pub use object::{
    BrowsableObject, Collection, DiscoverableItem, InProgressSubmission, Item, MetadataValue,
    WorkflowItem, WorkspaceItem,
};
pub use rest::{MetadataEntryRest, ObjectRest};
