//! Read-only view of a descriptor bound to a topology.

use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::debug;

use crate::net::{BindError, NetworkConfigDescriptor, NodeId, RouterId};
use crate::topo::Topology;

#[derive(Debug, Clone)]
pub struct EngineHandle<'a> {
    descriptor: &'a NetworkConfigDescriptor,
    topology: Topology,
    /// router -> 挂在该路由器上的节点（按节点下标升序）；没有节点的路由器不出现
    nodes_by_router: BTreeMap<usize, Vec<NodeId>>,
}

impl<'a> EngineHandle<'a> {
    /// Checks the router map against `topology` and builds the inverse map.
    ///
    /// Checks run in order: node count, negative ids, ids past the last
    /// router. The first failure is returned.
    pub fn attach(
        descriptor: &'a NetworkConfigDescriptor,
        topology: Topology,
    ) -> Result<Self, BindError> {
        let expected = topology.num_nodes();
        if descriptor.num_nodes() != expected {
            return Err(BindError::NodeCountMismatch {
                expected,
                actual: descriptor.num_nodes(),
            });
        }

        let num_routers = topology.num_routers();
        if let Some((node, router)) = descriptor.attachments().find(|(_, r)| r.0 < 0) {
            return Err(BindError::NegativeRouterId { node, router });
        }

        let mut nodes_by_router: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
        for (node, router) in descriptor.attachments() {
            let r = usize::try_from(router.0)
                .ok()
                .filter(|&r| r < num_routers)
                .ok_or(BindError::UnknownRouter {
                    node,
                    router,
                    num_routers,
                })?;
            nodes_by_router.entry(r).or_default().push(node);
        }

        for (r, nodes) in &nodes_by_router {
            debug!(router = r, nodes = ?nodes, "router attachment");
        }

        Ok(Self {
            descriptor,
            topology,
            nodes_by_router,
        })
    }

    pub fn descriptor(&self) -> &'a NetworkConfigDescriptor {
        self.descriptor
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn num_nodes(&self) -> usize {
        self.descriptor.num_nodes()
    }

    pub fn num_routers(&self) -> usize {
        self.topology.num_routers()
    }

    pub fn router_for(&self, node: NodeId) -> Option<RouterId> {
        self.descriptor.router_id_for(node.0).ok()
    }

    /// 挂在 `router` 上的节点；未知路由器返回空
    pub fn nodes_on(&self, router: RouterId) -> &[NodeId] {
        usize::try_from(router.0)
            .ok()
            .and_then(|r| self.nodes_by_router.get(&r))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 每个节点一行：`node <n> -> router <r> <label>`
    pub fn write_node_map<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (node, router) in self.descriptor.attachments() {
            // attach() 已保证 router 非负
            let label = self.topology.router_label(router.0 as usize);
            writeln!(w, "node {node} -> router {router} {label}")?;
        }
        Ok(())
    }
}
