//! k-ary n-cube（mesh / torus）
//!
//! 路由器按 booksim 惯例编号：第 0 维为最低位，router = Σ coord[d] * k^d。
//! 每个路由器挂 `concentration` 个节点，节点 i 挂在路由器 i / concentration。

use super::{MAX_DIMENSIONS, MAX_NODES, TopologyError};

/// 只能经 [`KNCube::new`] 构造，计数在构造时算好
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KNCube {
    k: usize,
    n: usize,
    concentration: usize,
    /// torus 为 true（只影响链路，不影响计数）
    wrap: bool,
    routers: usize,
    nodes: usize,
}

impl KNCube {
    pub fn new(k: usize, n: usize, concentration: usize, wrap: bool) -> Result<Self, TopologyError> {
        let kind = if wrap { "torus" } else { "mesh" };
        if k == 0 {
            return Err(TopologyError::invalid(kind, "radix k must be >= 1"));
        }
        if n == 0 || n > MAX_DIMENSIONS {
            return Err(TopologyError::invalid(
                kind,
                format!("dimension n must be in 1..={MAX_DIMENSIONS}"),
            ));
        }
        if concentration == 0 {
            return Err(TopologyError::invalid(kind, "concentration must be >= 1"));
        }
        let routers = u32::try_from(n)
            .ok()
            .and_then(|n| k.checked_pow(n))
            .ok_or(TopologyError::Overflow { kind })?;
        let nodes = routers
            .checked_mul(concentration)
            .ok_or(TopologyError::Overflow { kind })?;
        if nodes > MAX_NODES {
            return Err(TopologyError::TooLarge {
                kind,
                nodes,
                limit: MAX_NODES,
            });
        }
        Ok(Self {
            k,
            n,
            concentration,
            wrap,
            routers,
            nodes,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn concentration(&self) -> usize {
        self.concentration
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn num_routers(&self) -> usize {
        self.routers
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes
    }

    pub fn router_of(&self, node: usize) -> usize {
        node / self.concentration
    }

    /// 路由器坐标，第 0 维在前
    pub fn coords(&self, router: usize) -> Vec<usize> {
        let mut rest = router;
        (0..self.n)
            .map(|_| {
                let c = rest % self.k;
                rest /= self.k;
                c
            })
            .collect()
    }
}
