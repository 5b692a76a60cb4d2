use std::fs;

use box_cover::io::{load_edge_list, write_edge_list};
use box_cover::{generators, CoverConfig, Error, Method};

fn scratch(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("box-cover-{}-{}", std::process::id(), name))
}

#[test]
fn load_written_graph() {
    let graph = generators::grid(4, 3);
    let path = scratch("grid.txt");
    write_edge_list(&graph, fs::File::create(&path).unwrap()).unwrap();

    let loaded = load_edge_list(&path, false).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded.graph, graph);
}

#[test]
fn relabeled_labels_survive() {
    let path = scratch("labels.txt");
    fs::write(&path, "% source target\n900 12\n12 77\n77 900\n").unwrap();
    let loaded = load_edge_list(&path, true).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.graph.nodes(), 3);
    assert_eq!(loaded.graph.edges(), 3);
    assert_eq!((0 .. 3).map(|node| loaded.label(node)).collect::<Vec<_>>(), vec![900, 12, 77]);
}

#[test]
fn missing_file_is_io_error() {
    assert!(matches!(load_edge_list(scratch("absent.txt"), false), Err(Error::Io(_))));
}

#[test]
fn config_from_file() {
    let path = scratch("config.json");
    fs::write(&path, r#"{ "method": "random", "seed": 5, "max_parameter": 3, "coverage": true }"#).unwrap();
    let config = CoverConfig::from_path(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.method, Method::Random);
    assert_eq!(config.seed, 5);
    assert_eq!(config.max_parameter, Some(3));
    assert!(config.coverage);
    assert_eq!(config.workers, 1);

    let path = scratch("bad-config.json");
    fs::write(&path, r#"{ "workers": 0 }"#).unwrap();
    let result = CoverConfig::from_path(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
