use serde::{Deserialize, Serialize};

/// What [`Factory::register`](crate::Factory::register) does when the key is already bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the existing binding and report [`FactoryError::DuplicateKey`](crate::FactoryError::DuplicateKey).
    #[default]
    Reject,
    /// Swap in the new binding and report success.
    Replace,
}

/// Factory settings, usually read through [`load_config`](crate::config::load_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub duplicates: DuplicatePolicy,
}
