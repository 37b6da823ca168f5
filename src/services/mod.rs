//! Service layer for scriptnav

pub mod config;
pub mod declaration;
pub mod definition;
pub mod settings;

pub use config::{ConfigService, DefaultConfigService};
pub use declaration::{DeclarationFinder, find_declaration};
pub use definition::{DefaultDefinitionService, DefinitionLookup, DefinitionService};
pub use settings::SettingsStore;
