//! 网络 engine 绑定
//!
//! engine 在 bind 时读取 descriptor，检查节点数、路由器编号等跨越拓扑的约束，
//! 返回只读的 [`EngineHandle`]。handle 借用 descriptor，不持有它。

mod handle;
mod topology_engine;

pub use handle::EngineHandle;
pub use topology_engine::{ConfigFileCheck, TopologyEngine};

use crate::net::{BindError, NetworkConfigDescriptor};

/// Consumer of a [`NetworkConfigDescriptor`].
pub trait NetworkEngine {
    fn build<'a>(
        &self,
        descriptor: &'a NetworkConfigDescriptor,
    ) -> Result<EngineHandle<'a>, BindError>;
}
