pub mod loader;
pub mod source;
pub mod sources;
pub mod types;

pub use loader::DatasetLoader;
pub use source::{DatasetSource, SourceError};
pub use types::{DatasetOrigin, RequirementKind, VisaDataset, VisaRecord};
