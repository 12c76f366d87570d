pub mod metadata;
pub use metadata::{create_json_metadata_sidecar, extract_metadata_fields};
