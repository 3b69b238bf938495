//! In-memory report cache.

use std::collections::HashMap;

use pipeline_facade::PipelineConfig;
use serde_json::Value;
use tokio::sync::RwLock;

/// Serialized reports keyed by report name and the full configuration.
///
/// A report is a pure function of its configuration, so an entry never goes
/// stale. Only successful reports are stored.
#[derive(Debug, Default)]
pub struct ReportCache {
    reports: RwLock<HashMap<String, Value>>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for `report` under `config`; `None` if the configuration
    /// cannot be serialized.
    pub fn key(report: &str, config: &PipelineConfig) -> Option<String> {
        serde_json::to_string(config)
            .ok()
            .map(|config| format!("{}:{}", report, config))
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        self.reports.read().await.get(key).cloned()
    }

    pub async fn insert(&self, key: String, report: Value) {
        self.reports.write().await.insert(key, report);
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline_facade::PipelineConfigBuilder;

    #[test]
    fn test_key_depends_on_report_and_config() {
        let reference = PipelineConfig::default();
        let other = PipelineConfigBuilder::new().seed(7).build().unwrap();

        let a = ReportCache::key("metrics", &reference).unwrap();
        assert_eq!(Some(a.clone()), ReportCache::key("metrics", &reference));
        assert_ne!(Some(a.clone()), ReportCache::key("sentiment", &reference));
        assert_ne!(Some(a), ReportCache::key("metrics", &other));
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = ReportCache::new();
        assert!(cache.get("k").await.is_none());
        cache.insert("k".to_string(), serde_json::json!({"alerts": []})).await;
        assert_eq!(cache.get("k").await, Some(serde_json::json!({"alerts": []})));
        assert_eq!(cache.len().await, 1);
    }
}
