//! Integration tests for hexagen-core, through the public API only.

use std::path::Path;
use std::sync::Mutex;

use hexagen_core::prelude::*;

struct NullFilesystem;

impl Filesystem for NullFilesystem {
    fn create_dir_all(&self, _path: &Path) -> HexagenResult<()> {
        Ok(())
    }
    fn write_file(&self, _path: &Path, _content: &str) -> HexagenResult<()> {
        Ok(())
    }
    fn remove_file(&self, _path: &Path) -> HexagenResult<()> {
        Ok(())
    }
    fn exists(&self, _path: &Path) -> bool {
        false
    }
}

struct CountingToolchain(&'static Mutex<usize>);

impl Toolchain for CountingToolchain {
    fn run(&self, _command: &ToolchainCommand) -> HexagenResult<()> {
        *self.0.lock().unwrap() += 1;
        Ok(())
    }
}

struct EmptyCatalogue;

impl ArtifactCatalogue for EmptyCatalogue {
    fn artifacts(&self) -> Vec<TemplateArtifact> {
        Vec::new()
    }
}

#[test]
fn every_edge_points_to_an_earlier_layer() {
    let order: Vec<Layer> = LayerGraph::topological_order().collect();
    for (i, layer) in order.iter().enumerate() {
        for target in LayerGraph::edges(*layer) {
            assert!(order[..i].contains(target), "{layer} -> {target}");
        }
    }
}

#[test]
fn invocation_count_matches_the_topology() {
    static CALLS: Mutex<usize> = Mutex::new(0);

    let mut driver = SolutionDriver::new(
        Box::new(NullFilesystem),
        Box::new(CountingToolchain(&CALLS)),
        Box::new(EmptyCatalogue),
    );
    let solution = driver.run(&SolutionParams::new("Demo", "out")).unwrap();

    let expected: usize = 1 + Layer::ALL
        .iter()
        .map(|l| 2 + PackageManifest::packages(*l).len() + LayerGraph::edges(*l).len())
        .sum::<usize>();
    assert_eq!(*CALLS.lock().unwrap(), expected);
    assert_eq!(solution.len(), Layer::COUNT);
    assert_eq!(driver.state(), DriverState::Done);
}

#[test]
fn unknown_layer_names_are_configuration_errors() {
    let err: HexagenError = LayerGraph::edges_by_name("Frontend").unwrap_err().into();
    assert_eq!(err.category(), ErrorCategory::Configuration);
}
