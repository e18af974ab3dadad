//! End-to-end generation against the in-memory adapters.

use std::path::{Path, PathBuf};

use hexagen_adapters::{BuiltinCatalogue, FsOperation, MemoryFilesystem, RecordingToolchain};
use hexagen_core::prelude::*;

struct Harness {
    fs: MemoryFilesystem,
    toolchain: RecordingToolchain,
    driver: SolutionDriver,
}

impl Harness {
    fn new() -> Self {
        Self::with_toolchain(RecordingToolchain::new())
    }

    fn with_toolchain(toolchain: RecordingToolchain) -> Self {
        let fs = MemoryFilesystem::new();
        let driver = SolutionDriver::new(
            Box::new(fs.clone()),
            Box::new(toolchain.clone()),
            Box::new(BuiltinCatalogue::new()),
        );
        Self {
            fs,
            toolchain,
            driver,
        }
    }

    fn file(&self, path: impl AsRef<Path>) -> String {
        self.fs
            .read_file(path.as_ref())
            .unwrap_or_else(|| panic!("missing {}", path.as_ref().display()))
    }
}

fn project_dir(root: &str, name: &str, layer: &str) -> PathBuf {
    Path::new(root).join(name).join(format!("{name}.{layer}"))
}

#[test]
fn demo_solution_has_eight_projects_in_order() {
    let mut h = Harness::new();
    let solution = h.driver.run(&SolutionParams::new("Demo", "./out")).unwrap();

    let names: Vec<&str> = solution
        .projects()
        .iter()
        .map(|p| p.qualified_name())
        .collect();
    assert_eq!(
        names,
        [
            "Demo.Domain",
            "Demo.Helpers",
            "Demo.Dapper",
            "Demo.ExternalServices",
            "Demo.Application",
            "Demo.IoC",
            "Demo.WebAPI",
            "Demo.Tests",
        ]
    );

    let web_api = solution.project(Layer::WebApi).unwrap();
    assert!(web_api.references().contains(&Layer::IoC));

    let tests = solution.project(Layer::Tests).unwrap();
    let mut refs = tests.references().to_vec();
    refs.sort();
    assert_eq!(refs, Layer::ALL[..7]);
}

#[test]
fn solution_is_created_first_with_default_framework() {
    let mut h = Harness::new();
    h.driver.run(&SolutionParams::new("Demo", "./out")).unwrap();

    let commands = h.toolchain.commands();
    assert_eq!(
        commands[0],
        ToolchainCommand::NewSolution {
            name: "Demo".into(),
            output: Path::new("./out").join("Demo"),
        }
    );
    let frameworks: Vec<&str> = commands
        .iter()
        .filter_map(|c| match c {
            ToolchainCommand::NewProject { framework, .. } => Some(framework.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(frameworks, ["netcoreapp3.1"; 8]);
}

#[test]
fn acme_web_api_wires_the_composition_root() {
    let mut h = Harness::new();
    let solution = h.driver.run(&SolutionParams::new("Acme", "proj")).unwrap();

    let web_api = solution.project(Layer::WebApi).unwrap();
    assert_eq!(web_api.qualified_name(), "Acme.WebAPI");
    assert_eq!(web_api.references(), [Layer::Domain, Layer::Helpers, Layer::IoC]);

    let startup = h.file(project_dir("proj", "Acme", "WebAPI").join("Startup.cs"));
    assert!(startup.contains("using Acme.IoC;"));
    assert!(startup.contains("namespace Acme.WebAPI"));

    let launch = h.file(
        project_dir("proj", "Acme", "WebAPI")
            .join("Properties")
            .join("launchSettings.json"),
    );
    assert!(launch.contains("\"Acme.WebAPI\""));
}

#[test]
fn acme_under_a_windows_style_directory() {
    let root = r"C:\proj";
    let mut h = Harness::new();
    let solution = h.driver.run(&SolutionParams::new("Acme", root)).unwrap();

    let web_api = solution.project(Layer::WebApi).unwrap();
    assert_eq!(web_api.qualified_name(), "Acme.WebAPI");
    assert_eq!(web_api.path(), project_dir(root, "Acme", "WebAPI"));
    assert_eq!(web_api.references(), [Layer::Domain, Layer::Helpers, Layer::IoC]);

    let startup = h.file(project_dir(root, "Acme", "WebAPI").join("Startup.cs"));
    assert!(startup.contains("Acme.IoC"));
}

#[test]
fn foo_client_map_uses_its_own_domain_namespace() {
    let mut h = Harness::new();
    h.driver.run(&SolutionParams::new("Foo", "out")).unwrap();

    let map = h.file(project_dir("out", "Foo", "Dapper").join("Maps").join("ClientMap.cs"));
    assert!(map.contains("Foo.Domain.Models"));
    assert!(!map.contains("Project.Test"));
}

#[test]
fn no_generated_file_mentions_a_foreign_solution() {
    let mut h = Harness::new();
    h.driver.run(&SolutionParams::new("Foo", "out")).unwrap();

    let files = h.fs.list_files();
    assert_eq!(files.len(), 17);
    for path in files {
        let body = h.file(&path);
        assert!(!body.contains("Project.Test"), "{}", path.display());
        assert!(!body.contains("{{SOLUTION_NAME}}"), "{}", path.display());
    }
}

#[test]
fn packages_follow_the_manifest_for_every_layer() {
    let mut h = Harness::new();
    let solution = h.driver.run(&SolutionParams::new("Demo", "out")).unwrap();

    for project in solution.projects() {
        assert_eq!(
            project.packages(),
            PackageManifest::packages(project.layer()),
            "{}",
            project.qualified_name()
        );
    }
}

#[test]
fn rerun_keeps_existing_directories_but_rewires() {
    let fs = MemoryFilesystem::new();
    let first = RecordingToolchain::new();
    SolutionDriver::new(
        Box::new(fs.clone()),
        Box::new(first.clone()),
        Box::new(BuiltinCatalogue::new()),
    )
    .run(&SolutionParams::new("Demo", "out"))
    .unwrap();
    let dirs_after_first = fs
        .journal()
        .iter()
        .filter(|op| matches!(op, FsOperation::CreateDir(_)))
        .count();

    let second = RecordingToolchain::new();
    SolutionDriver::new(
        Box::new(fs.clone()),
        Box::new(second.clone()),
        Box::new(BuiltinCatalogue::new()),
    )
    .run(&SolutionParams::new("Demo", "out"))
    .unwrap();
    let dirs_after_second = fs
        .journal()
        .iter()
        .filter(|op| matches!(op, FsOperation::CreateDir(_)))
        .count();

    assert_eq!(dirs_after_first, dirs_after_second);
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn blank_parameters_change_nothing() {
    for params in [
        SolutionParams::new("", "out"),
        SolutionParams::new("Demo", "  "),
        SolutionParams::default(),
    ] {
        let mut h = Harness::new();
        assert!(h.driver.run(&params).is_err());
        assert!(h.fs.journal().is_empty());
        assert!(h.toolchain.commands().is_empty());
    }
}

#[test]
fn toolchain_failure_stops_the_run() {
    // Calls 0..=2 create the solution and scaffold Domain; call 3 is Domain's first package.
    let mut h = Harness::with_toolchain(RecordingToolchain::failing_on(3));
    let err = h.driver.run(&SolutionParams::new("Demo", "out")).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::ExternalTool);
    assert_eq!(h.toolchain.commands().len(), 3);
    assert_eq!(h.driver.state(), DriverState::SolutionCreated);
    assert!(h.fs.list_files().is_empty());
}

#[test]
fn controller_replaces_the_toolchain_sample() {
    let fs = MemoryFilesystem::new();
    let controllers = project_dir("out", "Demo", "WebAPI").join("Controllers");
    fs.create_dir_all(&controllers).unwrap();
    let sample = controllers.join("WeatherForecastController.cs");
    fs.write_file(&sample, "// generated by dotnet new webapi").unwrap();

    SolutionDriver::new(
        Box::new(fs.clone()),
        Box::new(RecordingToolchain::new()),
        Box::new(BuiltinCatalogue::new()),
    )
    .run(&SolutionParams::new("Demo", "out"))
    .unwrap();

    assert!(fs.read_file(&sample).is_none());
    assert!(fs.journal().contains(&FsOperation::RemoveFile(sample)));
    let versioned = fs
        .read_file(&controllers.join("v1").join("WeatherForecastController.cs"))
        .unwrap();
    assert!(versioned.contains("namespace Demo.WebAPI.Controllers.v1"));
}
