//! Configuration resolution cascade.
//!
//! This module builds the ordered set of named configurations that apply to
//! an item or an in-progress submission, consulting the registry once per
//! candidate name and deduplicating by configuration id.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_core::resolver::ConfigurationResolver;
//!
//! let resolver = ConfigurationResolver::from_services(&services);
//! let outcome = resolver.item_configurations(&item)?;
//! assert!(!outcome.configurations.is_empty());
//! ```
pub mod cascade;
pub mod diagnostics;
mod names;

pub use cascade::{
    is_global_configuration, ConfigurationResolver, ResolutionOutcome,
    WORKFLOW_CONFIGURATION_PREFIX, WORKSPACE_CONFIGURATION_PREFIX,
};
pub use diagnostics::{CandidateDiagnostic, CandidateDisposition, CandidateStep, ResolutionReport};
