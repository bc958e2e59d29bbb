use crate::prelude::*;
use crate::samples::SampleSource;
use crate::store::ModelStore;

/// Web application global state.
#[derive(Clone)]
pub struct State {
    pub store: Arc<ModelStore>,

    /// Used for train requests without explicit records.
    pub sample_source: Arc<dyn SampleSource>,

    pub default_samples: usize,
    pub max_samples: usize,
}

impl State {
    pub fn new(
        store: Arc<ModelStore>,
        sample_source: Arc<dyn SampleSource>,
        default_samples: usize,
        max_samples: usize,
    ) -> Self {
        Self {
            store,
            sample_source,
            default_samples,
            max_samples,
        }
    }
}
