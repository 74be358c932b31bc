//! Reference engine: binds descriptors against a [`TopologySpec`].

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::{info, warn};

use super::{EngineHandle, NetworkEngine};
use crate::net::{BindError, NetworkConfigDescriptor};
use crate::topo::{Topology, TopologyError, TopologySpec};

/// Whether `build` checks that the booksim config file can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFileCheck {
    #[default]
    Require,
    Skip,
}

#[derive(Debug, Clone)]
pub struct TopologyEngine {
    topology: Topology,
    config_check: ConfigFileCheck,
}

impl TopologyEngine {
    pub fn new(spec: &TopologySpec) -> Result<Self, TopologyError> {
        Ok(Self::from_topology(spec.build()?))
    }

    pub fn from_topology(topology: Topology) -> Self {
        Self {
            topology,
            config_check: ConfigFileCheck::default(),
        }
    }

    pub fn with_config_check(mut self, check: ConfigFileCheck) -> Self {
        self.config_check = check;
        self
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }
}

impl NetworkEngine for TopologyEngine {
    #[tracing::instrument(skip(self, descriptor), fields(nodes = descriptor.num_nodes(), config = %descriptor.config_path()))]
    fn build<'a>(
        &self,
        descriptor: &'a NetworkConfigDescriptor,
    ) -> Result<EngineHandle<'a>, BindError> {
        let handle = EngineHandle::attach(descriptor, self.topology).inspect_err(|e| {
            warn!(error = %e, "router map rejected");
        })?;

        if self.config_check == ConfigFileCheck::Require {
            check_config_file(Path::new(descriptor.config_path())).inspect_err(|e| {
                warn!(error = %e, "booksim config check failed");
            })?;
        }

        info!(
            nodes = handle.num_nodes(),
            routers = handle.num_routers(),
            "network bound"
        );
        Ok(handle)
    }
}

fn check_config_file(path: &Path) -> Result<(), BindError> {
    let to_err = |source: io::Error| BindError::ConfigFile {
        path: path.to_path_buf(),
        source,
    };
    let meta = fs::metadata(path).map_err(to_err)?;
    if !meta.is_file() {
        return Err(to_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    File::open(path).map_err(to_err)?;
    Ok(())
}
