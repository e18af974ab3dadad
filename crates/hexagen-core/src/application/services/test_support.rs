//! In-crate fakes for the output ports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::ports::{ArtifactCatalogue, Filesystem, Toolchain};
use crate::domain::{Layer, TemplateArtifact, ToolchainCommand};
use crate::error::HexagenResult;

#[derive(Debug, Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    created: Vec<PathBuf>,
    written: Vec<PathBuf>,
    removed: Vec<PathBuf>,
}

#[derive(Debug, Default, Clone)]
pub struct FakeFilesystem(Arc<Mutex<FsState>>);

impl FakeFilesystem {
    pub fn seed_dir(&self, path: &Path) {
        self.0.lock().unwrap().dirs.insert(path.to_path_buf());
    }

    pub fn seed_file(&self, path: &Path, content: &str) {
        self.0
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.0.lock().unwrap().files.get(path).cloned()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.0.lock().unwrap().created.clone()
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.0.lock().unwrap().written.clone()
    }

    pub fn removed(&self) -> Vec<PathBuf> {
        self.0.lock().unwrap().removed.clone()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> HexagenResult<()> {
        let mut state = self.0.lock().unwrap();
        if state.dirs.insert(path.to_path_buf()) {
            state.created.push(path.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HexagenResult<()> {
        let mut state = self.0.lock().unwrap();
        state.files.insert(path.to_path_buf(), content.to_string());
        state.written.push(path.to_path_buf());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> HexagenResult<()> {
        let mut state = self.0.lock().unwrap();
        if state.files.remove(path).is_some() {
            state.removed.push(path.to_path_buf());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.0.lock().unwrap();
        state.dirs.contains(path) || state.files.contains_key(path)
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingToolchain(Arc<Mutex<Vec<ToolchainCommand>>>);

impl RecordingToolchain {
    pub fn commands(&self) -> Vec<ToolchainCommand> {
        self.0.lock().unwrap().clone()
    }
}

impl Toolchain for RecordingToolchain {
    fn run(&self, command: &ToolchainCommand) -> HexagenResult<()> {
        self.0.lock().unwrap().push(command.clone());
        Ok(())
    }
}

pub struct StaticCatalogue(pub Vec<TemplateArtifact>);

impl StaticCatalogue {
    pub fn sample() -> Self {
        Self(vec![
            TemplateArtifact::new(
                "startup",
                Layer::WebApi,
                "Startup.cs",
                "using {{SOLUTION_NAME}}.IoC;\nnamespace {{SOLUTION_NAME}}.WebAPI {}",
            ),
            TemplateArtifact::new(
                "client",
                Layer::Domain,
                "Models/Client.cs",
                "namespace {{SOLUTION_NAME}}.Domain.Models {}",
            ),
            TemplateArtifact::new(
                "controller",
                Layer::WebApi,
                "Controllers/v1/WeatherForecastController.cs",
                "namespace {{SOLUTION_NAME}}.WebAPI.Controllers.v1 {}",
            )
            .replacing("Controllers/WeatherForecastController.cs"),
        ])
    }
}

impl ArtifactCatalogue for StaticCatalogue {
    fn artifacts(&self) -> Vec<TemplateArtifact> {
        self.0.clone()
    }
}
