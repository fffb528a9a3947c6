use hiring_views::config::ListsConfig;
use hiring_views::dataset;
use hiring_views::error::AppError;
use hiring_views::{EntityKind, ListSettings, ListViewController, Record};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

use crate::samples::sample_records;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only datasets for every list screen, shared across requests.
#[derive(Debug, Default)]
pub(crate) struct ListCatalog {
    settings: ListSettings,
    datasets: BTreeMap<EntityKind, Vec<Record>>,
}

impl ListCatalog {
    pub(crate) fn new(settings: ListSettings) -> Self {
        Self {
            settings,
            datasets: BTreeMap::new(),
        }
    }

    pub(crate) fn with_dataset(mut self, kind: EntityKind, records: Vec<Record>) -> Self {
        self.datasets.insert(kind, records);
        self
    }

    pub(crate) fn samples(settings: ListSettings) -> Self {
        EntityKind::ALL
            .into_iter()
            .fold(Self::new(settings), |catalog, kind| {
                catalog.with_dataset(kind, sample_records(kind))
            })
    }

    /// Loads `<list>.json` (or `<list>.csv`) per list from the configured data
    /// directory, falling back to the built-in samples when none is set.
    pub(crate) fn load(config: &ListsConfig) -> Result<Self, AppError> {
        let settings = config.settings();
        let Some(dir) = config.data_dir.as_deref() else {
            warn!("APP_DATA_DIR not set; serving built-in sample lists");
            return Ok(Self::samples(settings));
        };

        let mut catalog = Self::new(settings);
        for kind in EntityKind::ALL {
            let records = load_kind(dir, kind)?;
            info!(list = %kind, rows = records.len(), "list dataset ready");
            catalog = catalog.with_dataset(kind, records);
        }
        Ok(catalog)
    }

    pub(crate) fn records(&self, kind: EntityKind) -> &[Record] {
        self.datasets.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn controller(&self, kind: EntityKind) -> ListViewController {
        kind.controller(self.records(kind).to_vec(), &self.settings)
    }
}

fn load_kind(dir: &Path, kind: EntityKind) -> Result<Vec<Record>, AppError> {
    for extension in ["json", "csv"] {
        let path = dir.join(format!("{}.{extension}", kind.slug()));
        if path.is_file() {
            return Ok(dataset::load_path(&path)?);
        }
    }

    warn!(list = %kind, dir = %dir.display(), "no dataset found; list will be empty");
    Ok(Vec::new())
}

pub(crate) fn parse_kind(raw: &str) -> Result<EntityKind, String> {
    raw.parse::<EntityKind>().map_err(|err| err.to_string())
}

pub(crate) fn parse_filter(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("filter '{raw}' must look like NAME=VALUE"))
}
