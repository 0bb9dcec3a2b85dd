//! Prompt Registry - (skill, domain, difficulty) to template lookup.
//!
//! The registry owns a [`LoaderTable`] and builds its catalog on first
//! access. Initialization runs behind a one-time cell: concurrent first
//! callers wait for the same load instead of each invoking the loaders.
//!
//! A missing prompt is a normal outcome (`None` / `false`). A failing domain
//! loader is logged and contributes no records, unless the registry runs in
//! strict mode, in which case initialization fails and is retried on the
//! next access.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, OnceLock};
use tokio::sync::{Mutex, OnceCell, RwLock};
use tracing::{debug, info, warn};

use super::error::PromptError;
use super::key::{RegistryKey, normalize_component};
use super::loader::LoaderTable;
use super::record::{Difficulty, PromptRecord};
use crate::core::config::PromptsConfig;

/// Behaviour switches for [`PromptRegistry`].
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Fail initialization when any domain loader fails.
    pub strict: bool,
}

/// Aggregate counts over the loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptStats {
    pub total_prompts: usize,
    pub total_skills: usize,
    pub total_domains: usize,
    /// Records contributed by each successfully loaded domain.
    pub domain_counts: BTreeMap<String, usize>,
    /// Domains whose loader failed during the last initialization.
    pub failed_domains: Vec<String>,
}

/// A fully loaded set of records plus everything derived from it.
///
/// Dropping the catalog (via [`PromptRegistry::clear_cache`]) drops every
/// cache with it.
#[derive(Default)]
struct Catalog {
    /// Records in load order.
    records: Vec<PromptRecord>,
    index: HashMap<RegistryKey, usize>,
    /// Normalized domain name to first-seen display name.
    domain_names: HashMap<String, String>,
    /// Record count per domain, keyed by display name.
    domain_counts: BTreeMap<String, usize>,
    failed_domains: Vec<String>,

    resolved: RwLock<HashMap<RegistryKey, Arc<str>>>,
    skills: OnceLock<Vec<String>>,
    domains: OnceLock<Vec<String>>,
}

impl Catalog {
    /// Index a loader's records; returns how many were new.
    fn insert_records(&mut self, records: Vec<PromptRecord>) -> usize {
        let mut inserted = 0;
        for record in records {
            let key = RegistryKey::for_record(&record);
            if self.index.contains_key(&key) {
                warn!("Duplicate prompt {} ignored (first loaded wins)", key);
                continue;
            }
            let display = self
                .domain_names
                .entry(normalize_component(&record.domain))
                .or_insert_with(|| record.domain.clone())
                .clone();
            *self.domain_counts.entry(display).or_default() += 1;

            self.index.insert(key, self.records.len());
            self.records.push(record);
            inserted += 1;
        }
        inserted
    }

    /// Loaded record count for a domain name in any spelling.
    fn domain_count(&self, domain: &str) -> usize {
        self.domain_names
            .get(&normalize_component(domain))
            .and_then(|display| self.domain_counts.get(display))
            .copied()
            .unwrap_or(0)
    }

    fn get(&self, key: &RegistryKey) -> Option<&PromptRecord> {
        self.index.get(key).map(|&idx| &self.records[idx])
    }

    /// Distinct display values, first-seen spelling, sorted.
    fn distinct(&self, field: impl Fn(&PromptRecord) -> &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values: Vec<String> = self
            .records
            .iter()
            .map(&field)
            .filter(|value| seen.insert(normalize_component(value)))
            .map(str::to_string)
            .collect();
        values.sort();
        values
    }

    fn skills(&self) -> &[String] {
        self.skills.get_or_init(|| self.distinct(|r| r.skill.as_str()))
    }

    fn domains(&self) -> &[String] {
        self.domains
            .get_or_init(|| self.domain_counts.keys().cloned().collect())
    }
}

/// Registry of question-generation templates.
///
/// Constructed explicitly by the application and shared behind an `Arc`.
pub struct PromptRegistry {
    loaders: LoaderTable,
    options: RegistryOptions,

    /// Swapped for a fresh cell by `clear_cache`.
    state: RwLock<Arc<OnceCell<Arc<Catalog>>>>,

    /// Records fetched by `preload_domain`, keyed by normalized domain name.
    preloaded: Mutex<HashMap<String, Vec<PromptRecord>>>,
}

impl PromptRegistry {
    pub fn new(loaders: LoaderTable, options: RegistryOptions) -> Self {
        Self {
            loaders,
            options,
            state: RwLock::new(Arc::new(OnceCell::new())),
            preloaded: Mutex::new(HashMap::new()),
        }
    }

    /// Registry over the compiled-in SAT domains.
    pub fn builtin() -> Self {
        Self::new(LoaderTable::builtin(), RegistryOptions::default())
    }

    /// Build a registry from configuration: the compiled-in domains plus any
    /// JSON domain files in the configured data directory.
    pub fn from_config(config: &PromptsConfig) -> Result<Self, PromptError> {
        let mut loaders = LoaderTable::builtin();
        if let Some(dir) = &config.data_dir {
            loaders = loaders.with_directory(dir)?;
        }
        Ok(Self::new(
            loaders,
            RegistryOptions {
                strict: config.strict,
            },
        ))
    }

    pub fn loaders(&self) -> &LoaderTable {
        &self.loaders
    }

    /// Load every domain once. Later calls are no-ops until `clear_cache`.
    pub async fn initialize(&self) -> Result<(), PromptError> {
        self.catalog().await.map(|_| ())
    }

    pub async fn is_initialized(&self) -> bool {
        self.loaded().await.is_some()
    }

    /// Template text for a triple, or `None` if the catalog has no such prompt.
    pub async fn get_prompt(
        &self,
        skill: &str,
        domain: &str,
        difficulty: Difficulty,
    ) -> Result<Option<Arc<str>>, PromptError> {
        let catalog = self.catalog().await?;
        let key = RegistryKey::new(skill, domain, difficulty);

        if let Some(template) = catalog.resolved.read().await.get(&key) {
            return Ok(Some(Arc::clone(template)));
        }

        let Some(record) = catalog.get(&key) else {
            debug!("No prompt for {}", key);
            return Ok(None);
        };

        let template: Arc<str> = Arc::from(record.template.as_str());
        catalog
            .resolved
            .write()
            .await
            .insert(key, Arc::clone(&template));
        Ok(Some(template))
    }

    /// Full record for a triple, including version metadata.
    pub async fn get_record(
        &self,
        skill: &str,
        domain: &str,
        difficulty: Difficulty,
    ) -> Result<Option<PromptRecord>, PromptError> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .get(&RegistryKey::new(skill, domain, difficulty))
            .cloned())
    }

    pub async fn has_prompt(
        &self,
        skill: &str,
        domain: &str,
        difficulty: Difficulty,
    ) -> Result<bool, PromptError> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .index
            .contains_key(&RegistryKey::new(skill, domain, difficulty)))
    }

    pub async fn available_skills(&self) -> Result<Vec<String>, PromptError> {
        Ok(self.catalog().await?.skills().to_vec())
    }

    pub async fn available_domains(&self) -> Result<Vec<String>, PromptError> {
        Ok(self.catalog().await?.domains().to_vec())
    }

    /// Difficulties present for a skill/domain pair, easiest first.
    pub async fn available_difficulties(
        &self,
        skill: &str,
        domain: &str,
    ) -> Result<Vec<Difficulty>, PromptError> {
        let catalog = self.catalog().await?;
        Ok(Difficulty::ALL
            .into_iter()
            .filter(|&d| catalog.index.contains_key(&RegistryKey::new(skill, domain, d)))
            .collect())
    }

    /// Whether question generation can be offered for a skill/domain pair.
    pub async fn is_ai_generation_available(
        &self,
        skill: &str,
        domain: &str,
    ) -> Result<bool, PromptError> {
        Ok(!self.available_difficulties(skill, domain).await?.is_empty())
    }

    pub async fn prompt_stats(&self) -> Result<PromptStats, PromptError> {
        let catalog = self.catalog().await?;
        Ok(PromptStats {
            total_prompts: catalog.records.len(),
            total_skills: catalog.skills().len(),
            total_domains: catalog.domains().len(),
            domain_counts: catalog.domain_counts.clone(),
            failed_domains: catalog.failed_domains.clone(),
        })
    }

    /// Drop the loaded catalog and every derived cache.
    ///
    /// The next access re-runs the loaders. Intended for tests and
    /// development reloads.
    pub async fn clear_cache(&self) {
        *self.state.write().await = Arc::new(OnceCell::new());
        self.preloaded.lock().await.clear();
        info!("Prompt registry cache cleared");
    }

    /// Run one domain's loader ahead of initialization.
    ///
    /// The records are staged and picked up by the next initialization
    /// instead of invoking the loader again. Returns the record count.
    pub async fn preload_domain(&self, domain: &str) -> Result<usize, PromptError> {
        let loader = self
            .loaders
            .get(domain)
            .ok_or_else(|| PromptError::unknown_domain(domain))?;

        if let Some(catalog) = self.loaded().await {
            debug!("Domain {} already loaded", loader.domain_name());
            return Ok(catalog.domain_count(loader.domain_name()));
        }

        let key = normalize_component(loader.domain_name());
        if let Some(records) = self.preloaded.lock().await.get(&key) {
            return Ok(records.len());
        }

        let records = loader.load().await?;
        let count = records.len();
        info!("Preloaded {} prompts for domain: {}", count, loader.domain_name());
        self.preloaded.lock().await.insert(key, records);
        Ok(count)
    }

    async fn loaded(&self) -> Option<Arc<Catalog>> {
        self.state.read().await.get().cloned()
    }

    async fn catalog(&self) -> Result<Arc<Catalog>, PromptError> {
        let cell = Arc::clone(&*self.state.read().await);
        let catalog = cell.get_or_try_init(|| self.load_catalog()).await?;
        Ok(Arc::clone(catalog))
    }

    async fn load_catalog(&self) -> Result<Arc<Catalog>, PromptError> {
        info!("Initializing prompt registry ({} domains)", self.loaders.len());

        // Staged records are only released once the catalog is accepted, so a
        // failed strict load can be retried without re-running those loaders.
        let staged = self.preloaded.lock().await.clone();
        let mut catalog = Catalog::default();
        let mut failures: Vec<(String, PromptError)> = Vec::new();

        for loader in self.loaders.iter() {
            let name = loader.domain_name();
            let result = match staged.get(&normalize_component(name)) {
                Some(records) => Ok(records.clone()),
                None => loader.load().await,
            };

            match result {
                Ok(records) => {
                    let count = catalog.insert_records(records);
                    debug!("Loaded {} prompts for domain: {}", count, name);
                }
                Err(e) => {
                    warn!("Failed to load domain {}: {}", name, e);
                    failures.push((name.to_string(), e));
                }
            }
        }

        if self.options.strict && !failures.is_empty() {
            let domains: Vec<&str> = failures.iter().map(|(d, _)| d.as_str()).collect();
            let reasons: Vec<String> = failures.iter().map(|(d, e)| format!("{d}: {e}")).collect();
            return Err(PromptError::domain_load(domains.join(", "), reasons.join("; ")));
        }

        self.preloaded
            .lock()
            .await
            .retain(|domain, _| !staged.contains_key(domain));

        catalog.failed_domains = failures.into_iter().map(|(d, _)| d).collect();
        info!(
            "Prompt registry ready: {} prompts, {} failed domains",
            catalog.records.len(),
            catalog.failed_domains.len()
        );
        Ok(Arc::new(catalog))
    }
}
