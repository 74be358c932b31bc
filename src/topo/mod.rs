//! 拓扑描述
//!
//! 只描述 engine 绑定时需要的信息：路由器数、节点数、节点的默认挂接方式。
//! 链路、路由和流控属于外部 engine，不在这里建模。

pub mod fat_tree;
pub mod kncube;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::fat_tree::FatTree;
use self::kncube::KNCube;

/// 单个拓扑允许的最大节点数
pub const MAX_NODES: usize = 1 << 20;
/// mesh / torus 允许的最大维数
pub const MAX_DIMENSIONS: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("invalid {kind} topology: {reason}")]
    Invalid { kind: &'static str, reason: String },
    #[error("{kind} topology is too large to index")]
    Overflow { kind: &'static str },
    #[error("{kind} topology has {nodes} nodes, limit is {limit}")]
    TooLarge {
        kind: &'static str,
        nodes: usize,
        limit: usize,
    },
}

impl TopologyError {
    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            reason: reason.into(),
        }
    }
}

/// Topology as written in a network spec document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    Mesh {
        k: usize,
        n: usize,
        #[serde(default = "default_concentration")]
        concentration: usize,
    },
    Torus {
        k: usize,
        n: usize,
        #[serde(default = "default_concentration")]
        concentration: usize,
    },
    FatTree {
        k: usize,
    },
    /// 两个路由器各挂一个节点
    Dumbbell,
    Custom {
        routers: usize,
        nodes: usize,
    },
}

fn default_concentration() -> usize {
    1
}

impl TopologySpec {
    pub fn kind(&self) -> &'static str {
        match self {
            TopologySpec::Mesh { .. } => "mesh",
            TopologySpec::Torus { .. } => "torus",
            TopologySpec::FatTree { .. } => "fat_tree",
            TopologySpec::Dumbbell => "dumbbell",
            TopologySpec::Custom { .. } => "custom",
        }
    }

    /// 校验参数并得到可查询的拓扑
    pub fn build(&self) -> Result<Topology, TopologyError> {
        let shape = match *self {
            TopologySpec::Mesh {
                k,
                n,
                concentration,
            } => Shape::KNCube(KNCube::new(k, n, concentration, false)?),
            TopologySpec::Torus {
                k,
                n,
                concentration,
            } => Shape::KNCube(KNCube::new(k, n, concentration, true)?),
            TopologySpec::FatTree { k } => Shape::FatTree(FatTree::new(k)?),
            TopologySpec::Dumbbell => Shape::Dumbbell,
            TopologySpec::Custom { routers, nodes } => {
                if routers == 0 && nodes > 0 {
                    return Err(TopologyError::invalid(
                        "custom",
                        "nodes need at least one router to attach to",
                    ));
                }
                if nodes > MAX_NODES {
                    return Err(TopologyError::TooLarge {
                        kind: "custom",
                        nodes,
                        limit: MAX_NODES,
                    });
                }
                Shape::Custom { routers, nodes }
            }
        };
        let topo = Topology(shape);
        // router ids travel as i64
        if i64::try_from(topo.num_routers()).is_err() {
            return Err(TopologyError::Overflow { kind: self.kind() });
        }
        Ok(topo)
    }

    pub fn default_router_map(&self) -> Result<Vec<i64>, TopologyError> {
        Ok(self.build()?.default_router_map())
    }
}

/// Validated topology, obtained from [`TopologySpec::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology(Shape);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    KNCube(KNCube),
    FatTree(FatTree),
    Dumbbell,
    Custom { routers: usize, nodes: usize },
}

impl Topology {
    pub fn kncube(&self) -> Option<&KNCube> {
        match &self.0 {
            Shape::KNCube(cube) => Some(cube),
            _ => None,
        }
    }

    pub fn fat_tree(&self) -> Option<&FatTree> {
        match &self.0 {
            Shape::FatTree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn num_routers(&self) -> usize {
        match self.0 {
            Shape::KNCube(cube) => cube.num_routers(),
            Shape::FatTree(tree) => tree.num_routers(),
            Shape::Dumbbell => 2,
            Shape::Custom { routers, .. } => routers,
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self.0 {
            Shape::KNCube(cube) => cube.num_nodes(),
            Shape::FatTree(tree) => tree.num_nodes(),
            Shape::Dumbbell => 2,
            Shape::Custom { nodes, .. } => nodes,
        }
    }

    /// 节点的惯例挂接路由器；`node` 超出节点数时返回 `None`
    pub fn default_router_of(&self, node: usize) -> Option<usize> {
        if node >= self.num_nodes() {
            return None;
        }
        let router = match self.0 {
            Shape::KNCube(cube) => cube.router_of(node),
            Shape::FatTree(tree) => tree.edge_of(node),
            Shape::Dumbbell => node,
            // nodes > 0 已保证 routers > 0
            Shape::Custom { routers, .. } => node % routers,
        };
        Some(router)
    }

    pub fn default_router_map(&self) -> Vec<i64> {
        (0..self.num_nodes())
            .filter_map(|node| self.default_router_of(node))
            .map(|router| router as i64)
            .collect()
    }

    /// 路由器的可读名称，用于 node map 输出
    pub fn router_label(&self, router: usize) -> String {
        match self.0 {
            Shape::KNCube(cube) => {
                let coords: Vec<String> = cube.coords(router).iter().map(|c| c.to_string()).collect();
                format!("({})", coords.join(","))
            }
            Shape::FatTree(tree) => tree.label(router),
            Shape::Dumbbell => format!("s{router}"),
            Shape::Custom { .. } => format!("r{router}"),
        }
    }
}
