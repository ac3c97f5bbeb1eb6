mod expand;
mod loader;
mod model;
mod validation;

pub use expand::expand_rules;
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{CONFIG_VERSION, Config, ProjectConfig, RuleConfig, TargetKind};
pub use validation::validate_config_semantics;
