//! Patch Kubernetes manifests from environment variables.
//!
//! The pipeline is a single pass: sniff the top-level `kind` of a YAML
//! manifest, deserialize the source into the matching fixed schema, overwrite
//! every field for which an override is set, and serialize the result back
//! out. Overlay routines take an explicit [`Overrides`] map instead of
//! reading the process environment themselves; the binary captures the
//! environment exactly once.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod overlay;

pub use error::Error;
pub use overlay::Overrides;
