use std::path::PathBuf;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, NotFound, Result};

use super::gateway::{Gateway, HttpGateway, Upload, UploadFile};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Version {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version_number: Option<String>,
    #[serde(default)]
    pub files: Vec<VersionFile>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VersionFile {
    pub filename: String,
    pub primary: bool,
    pub size: usize,
}

/// A dependency of a version being created. Serializes to a single identity
/// field next to `dependency_type`, eg. `{"file_name": "lib.jar", "dependency_type": "embedded"}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Dependency {
    #[serde(flatten)]
    pub target: DependencyTarget,
    pub dependency_type: DependencyType,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DependencyTarget {
    ProjectId(String),
    VersionId(String),
    FileName(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Required,
    Optional,
    Incompatible,
    Embedded,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    Alpha,
    Beta,
    Release,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Listed,
    Archived,
    Draft,
    Unlisted,
    Scheduled,
    Unknown,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RequestedStatus {
    Listed,
    Archived,
    Draft,
    Unlisted,
}

impl TryFrom<VersionStatus> for RequestedStatus {
    type Error = Error;

    fn try_from(value: VersionStatus) -> Result<Self> {
        match value {
            VersionStatus::Listed => Ok(Self::Listed),
            VersionStatus::Archived => Ok(Self::Archived),
            VersionStatus::Draft => Ok(Self::Draft),
            VersionStatus::Unlisted => Ok(Self::Unlisted),
            _ => Err(Error::Config(format!("{value:?} can't be requested as a status, pass --requested-status"))),
        }
    }
}

/// Everything needed to create a version, files included.
#[derive(Debug, Serialize, Clone)]
pub struct CreateVersion {
    pub name: String,
    pub version_number: Option<String>,
    pub changelog: String,
    // omitted when empty, never sent as []
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    pub game_versions: Vec<String>,
    pub version_type: VersionType,
    pub loaders: Vec<String>,
    pub featured: bool,
    pub status: VersionStatus,
    pub requested_status: RequestedStatus,
    pub project_id: String,
    /// The first file is the primary one
    #[serde(skip)]
    pub file_paths: Vec<PathBuf>,
}

impl CreateVersion {
    /// Multipart part names, one per file in upload order.
    pub fn file_parts(&self) -> Vec<String> {
        self.file_paths.iter().map(|p| p.to_string_lossy().into_owned()).collect()
    }

    /// The json sent as the `data` part of the upload.
    pub fn metadata(&self) -> Result<Value> {
        #[derive(Serialize)]
        struct Data<'a> {
            #[serde(flatten)]
            version: &'a CreateVersion,
            file_parts: Vec<String>,
            primary_file: String,
        }

        let file_parts = self.file_parts();
        let primary_file = file_parts
            .first()
            .cloned()
            .ok_or_else(|| Error::Config("A version needs at least one file".into()))?;

        Ok(serde_json::to_value(Data { version: self, file_parts, primary_file })?)
    }
}

pub struct ModrinthAPI<G: Gateway = HttpGateway> {
    gateway: G,
}

impl<G: Gateway> ModrinthAPI<G> {
    pub fn new(gateway: G) -> Self {
        ModrinthAPI { gateway }
    }

    #[cfg(test)]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(serde_json::from_value(self.gateway.get(path)?)?)
    }

    pub fn welcome(&self) -> Result<Value> {
        self.gateway.get("/")
    }

    pub fn get_project(&self, id: &str) -> Result<Project> {
        self.get(&format!("/v2/project/{id}"))
    }

    pub fn get_version(&self, id: &str) -> Result<Version> {
        self.get(&format!("/v2/version/{id}"))
    }

    /// Looks up a project by id or slug. Any failure counts as not found,
    /// including auth errors and rate limits.
    pub fn resolve_project(&self, id: &str) -> std::result::Result<Project, NotFound> {
        self.get_project(id).map_err(|err| {
            debug!(id, %err, "project lookup failed");
            NotFound(format!("Project {id}"))
        })
    }

    /// Looks up a version by id, with the same catch-all as [`Self::resolve_project`].
    pub fn resolve_version(&self, id: &str) -> std::result::Result<Version, NotFound> {
        self.get_version(id).map_err(|err| {
            debug!(id, %err, "version lookup failed");
            NotFound(format!("Version {id}"))
        })
    }

    pub fn create_version(&self, version: &CreateVersion) -> Result<Version> {
        let data = version.metadata()?;

        // open everything before sending so a missing file never sends a partial upload
        let files = version
            .file_paths
            .iter()
            .map(|path| UploadFile::open(path))
            .collect::<Result<Vec<_>>>()?;

        let res = self.gateway.post("/v2/version", Upload { data, files })?;
        Ok(serde_json::from_value(res)?)
    }
}
