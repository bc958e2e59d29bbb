use tokio::sync::{Mutex, RwLock};

use crate::error::FitError;
use crate::models::Sample;
use crate::prelude::*;
use crate::regression::{fit, FittedModel};

/// Single slot holding the active model.
///
/// Readers get an [`Arc`] to an immutable model and never observe a partially
/// replaced one. Training runs outside the slot lock, concurrent trainings are
/// serialized, and a failed training leaves the previous model in place.
#[derive(Default)]
pub struct ModelStore {
    model: RwLock<Option<Arc<FittedModel>>>,
    train_lock: Mutex<()>,
}

impl ModelStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "info", skip_all, fields(n_samples = training_set.len()))]
    pub async fn train(&self, training_set: &[Sample]) -> StdResult<Arc<FittedModel>, FitError> {
        let _guard = self.train_lock.lock().await;
        let start_instant = Instant::now();
        let model = Arc::new(fit(training_set)?);
        *self.model.write().await = Some(Arc::clone(&model));
        info!(
            n_samples = training_set.len(),
            intercept = model.intercept,
            elapsed = ?start_instant.elapsed(),
            "installed a new model"
        );
        Ok(model)
    }

    pub async fn current(&self) -> Option<Arc<FittedModel>> {
        self.model.read().await.clone()
    }

    pub async fn is_trained(&self) -> bool {
        self.model.read().await.is_some()
    }
}
