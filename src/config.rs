//! Network spec documents (`network.json`).
//!
//! A document pairs a topology with the descriptor that attaches nodes to
//! its routers:
//!
//! ```json
//! {
//!     "schema_version": 1,
//!     "topology": { "kind": "mesh", "k": 2, "n": 2 },
//!     "network": { "attached_router_id": [0, 1, 2, 3] }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::net::NetworkConfigDescriptor;
use crate::topo::TopologySpec;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported schema_version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub schema_version: u32,
    pub topology: TopologySpec,
    pub network: NetworkConfigDescriptor,
}

impl NetworkSpec {
    pub fn new(topology: TopologySpec, network: NetworkConfigDescriptor) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            topology,
            network,
        }
    }

    pub fn load(path: &Path) -> Result<Self, SpecError> {
        info!(path = %path.display(), "loading network spec");
        let raw = fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let spec: NetworkSpec = serde_json::from_str(&raw).map_err(|source| SpecError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if spec.schema_version != SCHEMA_VERSION {
            return Err(SpecError::SchemaVersion {
                found: spec.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(spec)
    }
}
