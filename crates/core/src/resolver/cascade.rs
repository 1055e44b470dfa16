// Configuration cascade - main resolution entry point
// Walks the fixed candidate order for a target and merges the results into
// an ordered, id-deduplicated set.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::DataAccessError;
use crate::model::{
    BrowsableObject, Collection, DiscoverableItem, DiscoveryConfiguration, InProgressSubmission,
    MostViewedConfiguration, RecentSubmissionsConfiguration, GLOBAL_CONFIGURATION_NAME,
};
use crate::registry::{ConfigurationRegistry, PropertySource};
use crate::resolver::diagnostics::{CandidateDiagnostic, CandidateStep, ResolutionReport};
use crate::resolver::names;
use crate::services::DiscoveryServices;

/// Prefix used when resolving for a workspace submission.
pub const WORKSPACE_CONFIGURATION_PREFIX: &str = "workspace";
/// Prefix used when resolving for a workflow submission.
pub const WORKFLOW_CONFIGURATION_PREFIX: &str = "workflow";

/// Ordered, id-unique configurations plus the per-candidate trace.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    pub configurations: Vec<DiscoveryConfiguration>,
    pub report: ResolutionReport,
}

/// True iff the configuration's id equals the bare reserved global name.
/// A prefix-qualified id such as `workspace.global` is not global.
pub fn is_global_configuration(configuration: &DiscoveryConfiguration) -> bool {
    configuration.id == GLOBAL_CONFIGURATION_NAME
}

/// Resolves named configurations against the registry and property source.
///
/// Stateless per call; holds only immutable collaborator handles.
pub struct ConfigurationResolver {
    registry: Arc<dyn ConfigurationRegistry>,
    properties: Arc<dyn PropertySource>,
}

impl ConfigurationResolver {
    pub fn new(
        registry: Arc<dyn ConfigurationRegistry>,
        properties: Arc<dyn PropertySource>,
    ) -> Self {
        Self {
            registry,
            properties,
        }
    }

    pub fn from_services(services: &DiscoveryServices) -> Self {
        Self::new(services.registry().clone(), services.properties().clone())
    }

    /// Soft-fallback lookup: `None` or an unregistered name degrade to the
    /// registry default. Never an error.
    pub fn configuration_by_name(&self, name: Option<&str>) -> DiscoveryConfiguration {
        self.lookup(name).0
    }

    /// Single lookup for an optional prefix and an optional scope object.
    ///
    /// The candidate name is `prefix.handle`, the handle alone, the bare
    /// prefix, or nothing, depending on which parts are present.
    pub fn configuration_for(
        &self,
        prefix: Option<&str>,
        scope: Option<&dyn BrowsableObject>,
    ) -> DiscoveryConfiguration {
        let name = match scope {
            Some(object) => Some(names::qualified(prefix, object.handle())),
            None => prefix.map(str::to_string),
        };
        self.configuration_by_name(name.as_deref())
    }

    /// All configurations applying to a published item, gathering candidates
    /// from every owning collection. Collection-traversal faults propagate
    /// unchanged.
    pub fn item_configurations(
        &self,
        item: &impl DiscoverableItem,
    ) -> Result<ResolutionOutcome, DataAccessError> {
        let collections = item.owning_collections()?;
        Ok(self.cascade(None, &collections, item.type_label()))
    }

    /// All configurations applying to a workspace submission.
    pub fn workspace_configurations(
        &self,
        submission: &impl InProgressSubmission,
    ) -> Result<ResolutionOutcome, DataAccessError> {
        self.submission_configurations(WORKSPACE_CONFIGURATION_PREFIX, submission)
    }

    /// All configurations applying to a submission under workflow review.
    pub fn workflow_configurations(
        &self,
        submission: &impl InProgressSubmission,
    ) -> Result<ResolutionOutcome, DataAccessError> {
        self.submission_configurations(WORKFLOW_CONFIGURATION_PREFIX, submission)
    }

    /// The explicitly defined global configuration, or `None` when the
    /// registry fell back to its overall default for the reserved name.
    pub fn global_configuration(&self) -> Option<DiscoveryConfiguration> {
        let configuration = self.configuration_by_name(Some(GLOBAL_CONFIGURATION_NAME));
        is_global_configuration(&configuration).then_some(configuration)
    }

    /// Recent-submissions settings of the named configuration.
    pub fn recent_submissions_configuration(
        &self,
        name: Option<&str>,
    ) -> Option<RecentSubmissionsConfiguration> {
        self.configuration_by_name(name).recent_submissions
    }

    /// Most-viewed settings of the named configuration.
    pub fn most_viewed_configuration(&self, name: Option<&str>) -> Option<MostViewedConfiguration> {
        self.configuration_by_name(name).most_viewed
    }

    /// Metadata fields excluded from discovery for an object-type code.
    pub fn ignored_metadata_fields(&self, object_type: i32) -> Vec<String> {
        self.registry.ignored_metadata_fields(object_type)
    }

    fn submission_configurations(
        &self,
        prefix: &str,
        submission: &impl InProgressSubmission,
    ) -> Result<ResolutionOutcome, DataAccessError> {
        let collection = submission.collection()?;
        let item = submission.item()?;
        Ok(self.cascade(
            Some(prefix),
            std::slice::from_ref(&collection),
            &item.type_label,
        ))
    }

    fn cascade(
        &self,
        prefix: Option<&str>,
        collections: &[Collection],
        type_label: &str,
    ) -> ResolutionOutcome {
        let mut result = OrderedConfigurations::new();
        let mut report = ResolutionReport::new(prefix);

        // 1. one candidate per owning collection
        for collection in collections {
            let name = names::qualified(prefix, collection.handle());
            self.add_candidate(
                CandidateStep::OwningCollection,
                Some(name),
                &mut result,
                &mut report,
            );
        }

        // 2. the prefix-level default (bare prefix, or no name at all)
        self.add_candidate(
            CandidateStep::PrefixDefault,
            prefix.map(str::to_string),
            &mut result,
            &mut report,
        );

        // 3. basic-view override
        self.add_candidate(
            CandidateStep::BasicView,
            Some(names::qualified(prefix, names::BASIC_VIEW_NAME)),
            &mut result,
            &mut report,
        );

        // 4. system-entity override, guarded against malformed payloads
        let payload = self
            .properties
            .property(names::ENTITY_MODULE, &names::entity_property_key(type_label));
        match payload.as_deref().and_then(names::entity_override_name) {
            Some(extra) => self.add_candidate(
                CandidateStep::EntityOverride,
                Some(names::qualified(prefix, extra)),
                &mut result,
                &mut report,
            ),
            None => {
                if payload.is_some() {
                    debug!(type_label, "system-entity payload carries no override name");
                }
                report.push(CandidateDiagnostic::skipped(CandidateStep::EntityOverride));
            }
        }

        // 5. type-specific override
        self.add_candidate(
            CandidateStep::TypeOverride,
            Some(names::qualified(prefix, &names::type_override_name(type_label))),
            &mut result,
            &mut report,
        );

        // 6. reserved global name
        self.add_candidate(
            CandidateStep::Global,
            Some(names::qualified(prefix, GLOBAL_CONFIGURATION_NAME)),
            &mut result,
            &mut report,
        );

        ResolutionOutcome {
            configurations: result.into_vec(),
            report,
        }
    }

    fn add_candidate(
        &self,
        step: CandidateStep,
        name: Option<String>,
        result: &mut OrderedConfigurations,
        report: &mut ResolutionReport,
    ) {
        let (configuration, fallback) = self.lookup(name.as_deref());
        let resolved_id = configuration.id.clone();
        let added = result.insert(configuration);
        debug!(
            ?step,
            name = name.as_deref().unwrap_or("<default>"),
            %resolved_id,
            fallback,
            added,
            "configuration candidate resolved"
        );
        report.push(CandidateDiagnostic::resolved(
            step,
            name,
            resolved_id,
            fallback,
            added,
        ));
    }

    /// Returns the resolved configuration and whether the registry had to
    /// substitute its default for a name it does not know.
    fn lookup(&self, name: Option<&str>) -> (DiscoveryConfiguration, bool) {
        match name {
            Some(name) => match self.registry.configuration(name) {
                Some(configuration) => (configuration, false),
                None => (self.registry.default_configuration(), true),
            },
            None => (self.registry.default_configuration(), false),
        }
    }
}

/// Insertion-ordered set of configurations, unique by id.
struct OrderedConfigurations {
    entries: Vec<DiscoveryConfiguration>,
    seen: HashSet<String>,
}

impl OrderedConfigurations {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Insert unless the id is already present. Returns whether it entered.
    fn insert(&mut self, configuration: DiscoveryConfiguration) -> bool {
        if self.seen.insert(configuration.id.clone()) {
            self.entries.push(configuration);
            true
        } else {
            false
        }
    }

    fn into_vec(self) -> Vec<DiscoveryConfiguration> {
        self.entries
    }
}
