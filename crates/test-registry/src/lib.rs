//! In-memory collaborators and YAML fixtures for exercising the resolver
//! without a backing platform.

pub mod citations;
pub mod errors;
pub mod fixture;
pub mod properties;
pub mod registry;
pub mod scenario;

pub use citations::InMemoryCitationStore;
pub use errors::FixtureError;
pub use fixture::RegistryFixture;
pub use properties::InMemoryPropertySource;
pub use registry::InMemoryConfigurationRegistry;
pub use scenario::{Expectation, ResolutionScenario, ResolutionTarget};
