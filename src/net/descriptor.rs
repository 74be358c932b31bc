//! 网络配置描述符
//!
//! 保存两项配置：每个节点挂接的路由器编号，以及外部 booksim 配置文件路径。
//! 构造后不可变；节点数是否匹配、路由器编号是否有效留到 bind 时由 engine 检查。

use serde::{Deserialize, Serialize};

use super::error::DescriptorError;
use super::id::{NodeId, RouterId};

/// 默认的 booksim 配置文件路径（相对路径）
pub const DEFAULT_BOOKSIM_CONFIG: &str = "configs/ruby_booksim/gem5booksim.cfg";

/// Node-to-router association map plus the path of the engine's config file.
///
/// Deserializing goes through [`NetworkConfigDescriptor::new`], so a parsed
/// descriptor obeys the same rules as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor", into = "RawDescriptor")]
pub struct NetworkConfigDescriptor {
    attached_router_id: Vec<i64>,
    booksim_config: String,
}

impl NetworkConfigDescriptor {
    /// Builds a descriptor.
    ///
    /// `router_map` may be empty. `config_path` must contain something other
    /// than whitespace; it is stored as given.
    pub fn new(
        router_map: Vec<i64>,
        config_path: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let booksim_config = config_path.into();
        if booksim_config.trim().is_empty() {
            return Err(DescriptorError::InvalidConfig(
                "booksim config path must not be empty".to_string(),
            ));
        }
        Ok(Self {
            attached_router_id: router_map,
            booksim_config,
        })
    }

    /// Builds a descriptor pointing at [`DEFAULT_BOOKSIM_CONFIG`].
    pub fn with_default_config(router_map: Vec<i64>) -> Self {
        Self {
            attached_router_id: router_map,
            booksim_config: DEFAULT_BOOKSIM_CONFIG.to_string(),
        }
    }

    /// 节点挂接的路由器；`node_index >= num_nodes()` 时返回 `IndexOutOfRange`
    pub fn router_id_for(&self, node_index: usize) -> Result<RouterId, DescriptorError> {
        self.attached_router_id
            .get(node_index)
            .copied()
            .map(RouterId)
            .ok_or(DescriptorError::IndexOutOfRange {
                index: node_index,
                len: self.attached_router_id.len(),
            })
    }

    /// 外部 booksim 配置文件路径，原样返回
    pub fn config_path(&self) -> &str {
        &self.booksim_config
    }

    /// Raw router ids, indexed by node.
    pub fn router_map(&self) -> &[i64] {
        &self.attached_router_id
    }

    pub fn num_nodes(&self) -> usize {
        self.attached_router_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached_router_id.is_empty()
    }

    /// (节点, 路由器) 对，按节点下标顺序
    pub fn attachments(&self) -> impl Iterator<Item = (NodeId, RouterId)> + '_ {
        self.attached_router_id
            .iter()
            .enumerate()
            .map(|(node, &router)| (NodeId(node), RouterId(router)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDescriptor {
    attached_router_id: Vec<i64>,
    #[serde(default = "default_booksim_config")]
    booksim_config: String,
}

fn default_booksim_config() -> String {
    DEFAULT_BOOKSIM_CONFIG.to_string()
}

impl TryFrom<RawDescriptor> for NetworkConfigDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.attached_router_id, raw.booksim_config)
    }
}

impl From<NetworkConfigDescriptor> for RawDescriptor {
    fn from(d: NetworkConfigDescriptor) -> Self {
        Self {
            attached_router_id: d.attached_router_id,
            booksim_config: d.booksim_config,
        }
    }
}
