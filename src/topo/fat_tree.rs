//! Fat-tree 路由器编号
//!
//! k 叉 fat-tree：k 个 pod，每个 pod 有 k/2 个 edge、k/2 个 agg 交换机，
//! 另有 (k/2)^2 个 core 交换机；每个 edge 交换机下挂 k/2 个主机。
//!
//! 编号顺序：先全部 edge，再全部 agg，最后 core。主机 i 挂在 edge i / (k/2)。

use super::{MAX_NODES, TopologyError};

/// 只能经 [`FatTree::new`] 构造，保证 k 为 >= 2 的偶数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatTree {
    k: usize,
    routers: usize,
    nodes: usize,
}

impl FatTree {
    pub fn new(k: usize) -> Result<Self, TopologyError> {
        if k < 2 || k % 2 != 0 {
            return Err(TopologyError::invalid("fat_tree", "k must be even and >= 2"));
        }
        let half = k / 2;
        let nodes = k
            .checked_mul(half)
            .and_then(|v| v.checked_mul(half))
            .ok_or(TopologyError::Overflow { kind: "fat_tree" })?;
        if nodes > MAX_NODES {
            return Err(TopologyError::TooLarge {
                kind: "fat_tree",
                nodes,
                limit: MAX_NODES,
            });
        }
        // nodes 已受限，下面不会溢出
        let routers = 2 * k * half + half * half;
        Ok(Self { k, routers, nodes })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    fn half(&self) -> usize {
        self.k / 2
    }

    pub fn num_routers(&self) -> usize {
        self.routers
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes
    }

    pub fn edge(&self, pod: usize, edge: usize) -> usize {
        pod * self.half() + edge
    }

    pub fn agg(&self, pod: usize, agg: usize) -> usize {
        self.k * self.half() + pod * self.half() + agg
    }

    pub fn core(&self, group: usize, index: usize) -> usize {
        2 * self.k * self.half() + group * self.half() + index
    }

    /// 主机所在的 edge 交换机
    pub fn edge_of(&self, host: usize) -> usize {
        host / self.half()
    }

    /// 交换机名称：`e<pod>_<i>` / `a<pod>_<i>` / `c<group>_<i>`
    pub fn label(&self, router: usize) -> String {
        let half = self.half();
        let pod_switches = self.k * half;
        if router < pod_switches {
            format!("e{}_{}", router / half, router % half)
        } else if router < 2 * pod_switches {
            let r = router - pod_switches;
            format!("a{}_{}", r / half, r % half)
        } else {
            let r = router - 2 * pod_switches;
            format!("c{}_{}", r / half, r % half)
        }
    }
}
