//! 绑定检查
//!
//! 读取 network.json，用 TopologyEngine 绑定 descriptor，报告结果。

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use booksim_net::config::NetworkSpec;
use booksim_net::engine::{ConfigFileCheck, NetworkEngine, TopologyEngine};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "bind-check",
    about = "Bind a network.json router map against its topology"
)]
struct Args {
    /// Path to network.json
    #[arg(long)]
    spec: PathBuf,

    /// Do not require the booksim config file to exist
    #[arg(long)]
    skip_config_check: bool,

    /// Print one line per node after binding
    #[arg(long)]
    dump_node_map: bool,
}

fn report(err: &dyn Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let spec = NetworkSpec::load(&args.spec)?;
    let check = if args.skip_config_check {
        ConfigFileCheck::Skip
    } else {
        ConfigFileCheck::Require
    };
    let engine = TopologyEngine::new(&spec.topology)?.with_config_check(check);
    let handle = engine.build(&spec.network)?;

    println!(
        "bound nodes={} routers={} config={}",
        handle.num_nodes(),
        handle.num_routers(),
        handle.descriptor().config_path()
    );
    if args.dump_node_map {
        handle.write_node_map(&mut io::stdout().lock())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // 初始化 tracing（输出到 stderr，stdout 留给结果）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e.as_ref());
            ExitCode::FAILURE
        }
    }
}
