//! 网络配置模块
//!
//! 此模块包含网络配置描述符、节点/路由器标识符以及相关错误类型。

// 子模块声明
mod descriptor;
mod error;
mod id;

// 重新导出公共接口
pub use descriptor::{DEFAULT_BOOKSIM_CONFIG, NetworkConfigDescriptor};
pub use error::{BindError, DescriptorError};
pub use id::{NodeId, RouterId};
