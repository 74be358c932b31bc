//! 生成默认挂接的 network.json
//!
//! 按拓扑的惯例挂接方式（mesh/torus 按 concentration 连续分组，fat-tree 挂 edge 交换机）
//! 生成 `attached_router_id`，输出到 stdout。

use std::process::ExitCode;

use booksim_net::config::NetworkSpec;
use booksim_net::net::{DEFAULT_BOOKSIM_CONFIG, NetworkConfigDescriptor};
use booksim_net::topo::TopologySpec;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Mesh,
    Torus,
    FatTree,
    Dumbbell,
    Custom,
}

#[derive(Debug, Parser)]
#[command(
    name = "router-map",
    about = "Print a network.json with the topology's default node attachment"
)]
struct Args {
    #[arg(long, value_enum)]
    topology: Kind,
    /// Radix (mesh/torus/fat_tree)
    #[arg(long, default_value_t = 4)]
    k: usize,
    /// Dimensions (mesh/torus)
    #[arg(long, default_value_t = 2)]
    n: usize,
    /// Nodes per router (mesh/torus)
    #[arg(long, default_value_t = 1)]
    concentration: usize,
    /// Router count (custom)
    #[arg(long, default_value_t = 1)]
    routers: usize,
    /// Node count (custom)
    #[arg(long, default_value_t = 1)]
    nodes: usize,
    #[arg(long, default_value = DEFAULT_BOOKSIM_CONFIG)]
    booksim_config: String,
    /// Log to stderr
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn topology_spec(&self) -> TopologySpec {
        match self.topology {
            Kind::Mesh => TopologySpec::Mesh {
                k: self.k,
                n: self.n,
                concentration: self.concentration,
            },
            Kind::Torus => TopologySpec::Torus {
                k: self.k,
                n: self.n,
                concentration: self.concentration,
            },
            Kind::FatTree => TopologySpec::FatTree { k: self.k },
            Kind::Dumbbell => TopologySpec::Dumbbell,
            Kind::Custom => TopologySpec::Custom {
                routers: self.routers,
                nodes: self.nodes,
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        } else {
            tracing_subscriber::EnvFilter::new("off")
        })
        .with_writer(std::io::stderr)
        .init();

    let topology = args.topology_spec();
    let router_map = match topology.default_router_map() {
        Ok(map) => map,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(kind = topology.kind(), nodes = router_map.len(), "generated router map");

    let network = match NetworkConfigDescriptor::new(router_map, args.booksim_config.as_str()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let spec = NetworkSpec::new(topology, network);
    match serde_json::to_string_pretty(&spec) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
