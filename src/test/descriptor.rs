use std::sync::Arc;
use std::thread;

use crate::net::{DEFAULT_BOOKSIM_CONFIG, DescriptorError, NetworkConfigDescriptor, NodeId, RouterId};

#[test]
fn router_id_for_returns_each_map_entry() {
    let map = vec![3, 0, 7, 7, 1];
    let d = NetworkConfigDescriptor::new(map.clone(), "configs/x.cfg").expect("descriptor");
    for (i, &r) in map.iter().enumerate() {
        assert_eq!(d.router_id_for(i), Ok(RouterId(r)));
    }
    assert_eq!(d.num_nodes(), 5);
    assert_eq!(d.router_map(), map.as_slice());
}

#[test]
fn router_id_for_rejects_indices_past_the_end() {
    let d = NetworkConfigDescriptor::with_default_config(vec![1, 2, 3]);
    for i in [3, 4, 100, usize::MAX] {
        assert_eq!(
            d.router_id_for(i),
            Err(DescriptorError::IndexOutOfRange { index: i, len: 3 })
        );
    }

    let empty = NetworkConfigDescriptor::with_default_config(Vec::new());
    assert!(empty.is_empty());
    assert!(matches!(
        empty.router_id_for(0),
        Err(DescriptorError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn blank_config_path_is_rejected() {
    for path in ["", "   ", "\t\n"] {
        let err = NetworkConfigDescriptor::new(Vec::new(), path).unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidConfig(_)), "path {path:?}");
    }
}

#[test]
fn config_path_is_kept_verbatim() {
    let d = NetworkConfigDescriptor::new(Vec::new(), "configs/x.cfg").expect("descriptor");
    assert_eq!(d.config_path(), "configs/x.cfg");
    assert!(d.is_empty());

    let padded = NetworkConfigDescriptor::new(vec![0], " a.cfg ").expect("descriptor");
    assert_eq!(padded.config_path(), " a.cfg ");
}

#[test]
fn default_config_path_is_gem5booksim_cfg() {
    let d = NetworkConfigDescriptor::with_default_config(vec![1, 2, 3]);
    assert_eq!(d.config_path(), "configs/ruby_booksim/gem5booksim.cfg");
    assert_eq!(d.config_path(), DEFAULT_BOOKSIM_CONFIG);
}

#[test]
fn construction_does_not_check_router_ids() {
    let d = NetworkConfigDescriptor::new(vec![-1, i64::MAX], "x.cfg").expect("descriptor");
    assert_eq!(d.router_id_for(0), Ok(RouterId(-1)));
    assert_eq!(d.router_id_for(1), Ok(RouterId(i64::MAX)));
}

#[test]
fn repeated_lookups_do_not_drift() {
    let d = NetworkConfigDescriptor::new(vec![5, 4, 3], "configs/x.cfg").expect("descriptor");
    let first: Vec<_> = (0..4).map(|i| d.router_id_for(i)).collect();
    for _ in 0..1000 {
        let again: Vec<_> = (0..4).map(|i| d.router_id_for(i)).collect();
        assert_eq!(again, first);
        assert_eq!(d.config_path(), "configs/x.cfg");
    }
}

#[test]
fn shared_descriptor_reads_agree_across_threads() {
    let d = Arc::new(NetworkConfigDescriptor::with_default_config((0..64).collect()));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let d = Arc::clone(&d);
            thread::spawn(move || {
                (0..64)
                    .map(|i| d.router_id_for(i).expect("in range"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for w in workers {
        let seen = w.join().expect("worker");
        assert_eq!(seen, (0..64).map(RouterId).collect::<Vec<_>>());
    }
}

#[test]
fn attachments_pair_nodes_with_routers_in_order() {
    let d = NetworkConfigDescriptor::with_default_config(vec![2, 0]);
    let pairs: Vec<_> = d.attachments().collect();
    assert_eq!(
        pairs,
        vec![(NodeId(0), RouterId(2)), (NodeId(1), RouterId(0))]
    );
}

#[test]
fn descriptor_json_without_path_uses_default() {
    let raw = r#"{ "attached_router_id": [0, 0, 1] }"#;
    let d: NetworkConfigDescriptor = serde_json::from_str(raw).expect("parse descriptor");
    assert_eq!(d.router_map(), &[0, 0, 1]);
    assert_eq!(d.config_path(), DEFAULT_BOOKSIM_CONFIG);
}

#[test]
fn descriptor_json_with_blank_path_fails_to_parse() {
    let raw = r#"{ "attached_router_id": [], "booksim_config": "  " }"#;
    let err = serde_json::from_str::<NetworkConfigDescriptor>(raw).unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "{err}");
}

#[test]
fn descriptor_json_requires_router_map() {
    let raw = r#"{ "booksim_config": "a.cfg" }"#;
    assert!(serde_json::from_str::<NetworkConfigDescriptor>(raw).is_err());
}

#[test]
fn descriptor_serializes_with_parameter_names() {
    let d = NetworkConfigDescriptor::new(vec![1, 0], "configs/x.cfg").expect("descriptor");
    let v = serde_json::to_value(&d).expect("serialize");
    assert_eq!(v["attached_router_id"], serde_json::json!([1, 0]));
    assert_eq!(v["booksim_config"], "configs/x.cfg");
}
