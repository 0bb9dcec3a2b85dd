//! Domain loaders - suppliers of prompt records.
//!
//! The registry never reads prompt data directly. It walks a [`LoaderTable`]
//! of domain name to loader pairs, so new data sources (compiled-in
//! definitions, JSON files) plug in without touching `registry.rs`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::definitions::{
    AdvancedMath, Algebra, CraftAndStructure, DomainDefinition, ExpressionOfIdeas,
    GeometryAndTrigonometry, InformationAndIdeas, ProblemSolvingAndDataAnalysis,
    StandardEnglishConventions, build_records,
};
use super::error::PromptError;
use super::key::normalize_component;
use super::record::PromptRecord;

/// Trait for implementing domain record suppliers.
///
/// The registry treats loaders as opaque: it does not validate template
/// content, only indexes what comes back.
#[async_trait]
pub trait DomainLoader: Send + Sync {
    /// Display name of the domain this loader supplies.
    fn domain_name(&self) -> &str;

    /// Produce every record of the domain.
    async fn load(&self) -> Result<Vec<PromptRecord>, PromptError>;
}

// ============================================================================
// Compiled-in domains
// ============================================================================

/// Loader backed by a compiled-in [`DomainDefinition`].
pub struct StaticDomainLoader {
    name: &'static str,
    build: fn() -> Vec<PromptRecord>,
}

impl StaticDomainLoader {
    pub fn of<D: DomainDefinition>() -> Self {
        Self {
            name: D::NAME,
            build: build_records::<D>,
        }
    }
}

#[async_trait]
impl DomainLoader for StaticDomainLoader {
    fn domain_name(&self) -> &str {
        self.name
    }

    async fn load(&self) -> Result<Vec<PromptRecord>, PromptError> {
        Ok((self.build)())
    }
}

// ============================================================================
// JSON file domains
// ============================================================================

/// Loader reading a JSON array of [`PromptRecord`] from disk.
///
/// Every record must belong to the loader's domain (compared after
/// normalization); a stray record fails the whole file.
pub struct JsonFileLoader {
    domain: String,
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(domain: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
impl DomainLoader for JsonFileLoader {
    fn domain_name(&self) -> &str {
        &self.domain
    }

    async fn load(&self) -> Result<Vec<PromptRecord>, PromptError> {
        debug!("Reading prompt file {:?}", self.path);
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<PromptRecord> = serde_json::from_str(&raw)?;

        let expected = normalize_component(&self.domain);
        if let Some(stray) = records
            .iter()
            .find(|r| normalize_component(&r.domain) != expected)
        {
            return Err(PromptError::invalid_record(
                &self.domain,
                format!(
                    "record for skill '{}' names domain '{}'",
                    stray.skill, stray.domain
                ),
            ));
        }

        Ok(records)
    }
}

// ============================================================================
// Loader table
// ============================================================================

/// Ordered table of domain loaders.
///
/// Order matters only for logging and for which record wins on a duplicate
/// key (the first one loaded).
#[derive(Clone, Default)]
pub struct LoaderTable {
    entries: Vec<Arc<dyn DomainLoader>>,
}

impl LoaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of all compiled-in SAT domains.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register(StaticDomainLoader::of::<InformationAndIdeas>());
        table.register(StaticDomainLoader::of::<CraftAndStructure>());
        table.register(StaticDomainLoader::of::<ExpressionOfIdeas>());
        table.register(StaticDomainLoader::of::<StandardEnglishConventions>());
        table.register(StaticDomainLoader::of::<Algebra>());
        table.register(StaticDomainLoader::of::<AdvancedMath>());
        table.register(StaticDomainLoader::of::<ProblemSolvingAndDataAnalysis>());
        table.register(StaticDomainLoader::of::<GeometryAndTrigonometry>());
        table
    }

    /// Add a loader. A loader for an already registered domain replaces it
    /// in place.
    pub fn register(&mut self, loader: impl DomainLoader + 'static) {
        self.register_arc(Arc::new(loader));
    }

    pub fn register_arc(&mut self, loader: Arc<dyn DomainLoader>) {
        let key = normalize_component(loader.domain_name());
        match self
            .entries
            .iter()
            .position(|l| normalize_component(l.domain_name()) == key)
        {
            Some(idx) => {
                info!("Replacing loader for domain: {}", loader.domain_name());
                self.entries[idx] = loader;
            }
            None => {
                debug!("Registering loader for domain: {}", loader.domain_name());
                self.entries.push(loader);
            }
        }
    }

    /// Register one [`JsonFileLoader`] per `*.json` file in `dir`.
    ///
    /// The file stem names the domain. A file matching a compiled-in domain
    /// overrides it.
    pub fn with_directory(mut self, dir: impl AsRef<Path>) -> Result<Self, PromptError> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    None
                }
            })
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        for path in files {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("Skipping prompt file with non UTF-8 name: {:?}", path);
                continue;
            };
            let domain = self
                .get(stem)
                .map(|l| l.domain_name().to_string())
                .unwrap_or_else(|| stem.to_string());
            self.register(JsonFileLoader::new(domain, path));
        }

        Ok(self)
    }

    /// Find the loader for a domain name (normalized comparison).
    pub fn get(&self, domain: &str) -> Option<&Arc<dyn DomainLoader>> {
        let key = normalize_component(domain);
        self.entries
            .iter()
            .find(|l| normalize_component(l.domain_name()) == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DomainLoader>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::record::Difficulty;
    use std::fs;
    use tempfile::TempDir;

    fn write_records(dir: &Path, file: &str, records: &[PromptRecord]) -> PathBuf {
        let path = dir.join(file);
        fs::write(&path, serde_json::to_string(records).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_builtin_table() {
        let table = LoaderTable::builtin();
        assert_eq!(table.len(), 8);
        assert!(table.get("Information and Ideas").is_some());
        assert!(table.get("geometry-and-trigonometry").is_some());
        assert!(table.get("Reading").is_none());
    }

    #[tokio::test]
    async fn test_static_loader() {
        let loader = StaticDomainLoader::of::<CraftAndStructure>();
        assert_eq!(loader.domain_name(), "Craft and Structure");

        let records = loader.load().await.unwrap();
        assert_eq!(records.len(), 9);
        assert!(records.iter().any(|r| r.skill == "Words in Context"));
    }

    #[test]
    fn test_register_replaces_same_domain() {
        let mut table = LoaderTable::builtin();
        table.register(JsonFileLoader::new("algebra", "/tmp/algebra.json"));
        assert_eq!(table.len(), 8);
        assert_eq!(table.get("Algebra").unwrap().domain_name(), "algebra");
    }

    #[tokio::test]
    async fn test_json_loader_reads_records() {
        let dir = TempDir::new().unwrap();
        let path = write_records(
            dir.path(),
            "vocabulary.json",
            &[PromptRecord::new("Idioms", "Vocabulary", Difficulty::Easy, "X")],
        );

        let loader = JsonFileLoader::new("Vocabulary", path);
        let records = loader.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].template, "X");
    }

    #[tokio::test]
    async fn test_json_loader_rejects_foreign_domain() {
        let dir = TempDir::new().unwrap();
        let path = write_records(
            dir.path(),
            "vocabulary.json",
            &[PromptRecord::new("Percentages", "Problem-Solving and Data Analysis", Difficulty::Easy, "X")],
        );

        let result = JsonFileLoader::new("Vocabulary", path).load().await;
        assert!(matches!(result, Err(PromptError::InvalidRecord { .. })));
    }

    #[tokio::test]
    async fn test_json_loader_missing_file() {
        let loader = JsonFileLoader::new("Ghost", "/nonexistent/ghost.json");
        assert!(matches!(loader.load().await, Err(PromptError::Io(_))));
    }

    #[tokio::test]
    async fn test_json_loader_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = JsonFileLoader::new("Broken", path).load().await;
        assert!(matches!(result, Err(PromptError::Json(_))));
    }

    #[test]
    fn test_with_directory() {
        let dir = TempDir::new().unwrap();
        write_records(dir.path(), "craft_and_structure.json", &[]);
        write_records(dir.path(), "Vocabulary.json", &[]);
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let table = LoaderTable::builtin().with_directory(dir.path()).unwrap();
        assert_eq!(table.len(), 9);

        // Overrides keep the canonical display name.
        assert_eq!(
            table.get("Craft and Structure").unwrap().domain_name(),
            "Craft and Structure"
        );
        assert!(table.get("vocabulary").is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_with_directory_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.json")), "[]").unwrap();
        write_records(dir.path(), "Vocabulary.json", &[]);

        let table = LoaderTable::builtin().with_directory(dir.path()).unwrap();
        assert_eq!(table.len(), 9);
        assert!(table.get("vocabulary").is_some());
    }

    #[test]
    fn test_with_directory_missing_dir() {
        let result = LoaderTable::builtin().with_directory("/nonexistent/prompt-dir");
        assert!(matches!(result, Err(PromptError::Io(_))));
    }
}
