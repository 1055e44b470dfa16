pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod services;

pub use error::DataAccessError;
pub use model::{DiscoveryConfiguration, GLOBAL_CONFIGURATION_NAME};
pub use registry::{ConfigurationRegistry, PropertySource};
pub use resolver::{is_global_configuration, ConfigurationResolver, ResolutionOutcome};
pub use services::{DiscoveryServices, SearchService, ServiceContainer, ServiceError};
