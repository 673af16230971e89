//! Configuration module

mod collections;
mod site;

pub use collections::{CollectionMap, ConfigError};
pub use site::SiteConfig;
