use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{NetworkSpec, SCHEMA_VERSION, SpecError};
use crate::net::{DEFAULT_BOOKSIM_CONFIG, NetworkConfigDescriptor};
use crate::topo::TopologySpec;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let seq = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "booksim-net-spec-{}-{seq}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn network_spec_parses_minimal_json_with_default_config() {
    let raw = r#"
    {
        "schema_version": 1,
        "topology": { "kind": "mesh", "k": 2, "n": 2 },
        "network": { "attached_router_id": [0, 1, 2, 3] }
    }
    "#;
    let spec: NetworkSpec = serde_json::from_str(raw).expect("parse spec");
    assert_eq!(spec.schema_version, SCHEMA_VERSION);
    assert!(matches!(spec.topology, TopologySpec::Mesh { k: 2, n: 2, .. }));
    assert_eq!(spec.network.num_nodes(), 4);
    assert_eq!(spec.network.config_path(), DEFAULT_BOOKSIM_CONFIG);
}

#[test]
fn network_spec_roundtrips_through_json() {
    let spec = NetworkSpec::new(
        TopologySpec::FatTree { k: 2 },
        NetworkConfigDescriptor::new(vec![0, 1], "configs/x.cfg").expect("descriptor"),
    );
    let raw = serde_json::to_string(&spec).expect("serialize spec");
    let decoded: NetworkSpec = serde_json::from_str(&raw).expect("deserialize spec");
    assert_eq!(decoded, spec);
}

#[test]
fn load_reads_file_and_checks_schema_version() {
    let ok = write_temp(
        "network.json",
        r#"{ "schema_version": 1, "topology": { "kind": "dumbbell" },
             "network": { "attached_router_id": [1, 0], "booksim_config": "b.cfg" } }"#,
    );
    let spec = NetworkSpec::load(&ok).expect("load spec");
    assert_eq!(spec.network.config_path(), "b.cfg");

    let future = write_temp(
        "network.json",
        r#"{ "schema_version": 9, "topology": { "kind": "dumbbell" },
             "network": { "attached_router_id": [] } }"#,
    );
    assert!(matches!(
        NetworkSpec::load(&future),
        Err(SpecError::SchemaVersion { found: 9, expected: 1 })
    ));

    for p in [&ok, &future] {
        if let Some(dir) = p.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}

#[test]
fn load_reports_io_and_parse_failures() {
    let missing = std::env::temp_dir().join("booksim-net-definitely-missing.json");
    assert!(matches!(NetworkSpec::load(&missing), Err(SpecError::Io { .. })));

    let blank_path = write_temp(
        "network.json",
        r#"{ "schema_version": 1, "topology": { "kind": "dumbbell" },
             "network": { "attached_router_id": [0, 1], "booksim_config": "" } }"#,
    );
    assert!(matches!(
        NetworkSpec::load(&blank_path),
        Err(SpecError::Parse { .. })
    ));
    if let Some(dir) = blank_path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}
