use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::namespace::Namespace;
use crate::records::repository::RecordRepository;

/// Application service over the record repository.
/// Owns the presence checks and the per-namespace handling of missing keys.
#[derive(Clone)]
pub struct RecordService {
    repo: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self { Self { repo } }

    /// Upsert `payload` under `key`. Absent or empty inputs are rejected
    /// before the repository is touched.
    #[instrument(skip(self, payload), fields(namespace = %ns))]
    pub async fn save(&self, ns: Namespace, key: Option<&str>, payload: Option<&str>) -> Result<(), ServiceError> {
        let (key, payload) = match (non_empty(key), non_empty(payload)) {
            (Some(k), Some(p)) => (k, p),
            _ => {
                return Err(ServiceError::Validation(format!(
                    "{} and {} are required",
                    ns.key_field(),
                    ns.payload_field()
                )))
            }
        };
        self.repo.put(ns, key, payload).await?;
        info!(namespace = %ns, key, bytes = payload.len(), "record saved");
        Ok(())
    }

    /// Fetch the payload stored under `key`.
    ///
    /// A miss is `NotFound` unless the namespace defines a default payload,
    /// in which case that default is returned.
    #[instrument(skip(self), fields(namespace = %ns))]
    pub async fn load(&self, ns: Namespace, key: &str) -> Result<String, ServiceError> {
        if key.is_empty() {
            return Err(ServiceError::Validation(format!("{} is required", ns.key_field())));
        }
        match self.repo.get(ns, key).await? {
            Some(payload) => {
                info!(namespace = %ns, key, "record loaded");
                Ok(payload)
            }
            None => match ns.missing_default() {
                Some(default) => {
                    info!(namespace = %ns, key, defaulted = true, "record loaded");
                    Ok(default.to_string())
                }
                None => Err(ServiceError::NotFound(format!("no {ns} record for key {key:?}"))),
            },
        }
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}
