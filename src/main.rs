//! manifest-overlay: patch Kubernetes manifests from environment variables
//!
//! Reads a ConfigMap, Secret, or Ingress manifest, overlays the values of
//! same-named environment variables onto its recognized fields, and writes
//! the patched manifest to a new file.

use anyhow::Result;

fn main() -> Result<()> {
    manifest_overlay::cli::run()
}
