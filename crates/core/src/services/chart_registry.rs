use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::chart::{ChartKey, ChartSpec};
use crate::providers::traits::ChartRenderer;

/// Owner of every live chart handle.
///
/// One slot per [`ChartKey`]. Rendering into an occupied slot destroys the
/// previous chart first, so a canvas never has two charts bound to it and
/// repeated submissions never leak handles.
pub struct ChartRegistry<R: ChartRenderer> {
    renderer: R,
    charts: HashMap<ChartKey, R::Handle>,
}

impl<R: ChartRenderer> ChartRegistry<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            charts: HashMap::new(),
        }
    }

    /// Check that every dataset has exactly one value per label.
    pub fn validate(key: ChartKey, spec: &ChartSpec) -> Result<(), CoreError> {
        let expected = spec.labels.len();
        for dataset in &spec.datasets {
            if dataset.values.len() != expected {
                return Err(CoreError::DatasetLengthMismatch {
                    chart: key.to_string(),
                    dataset: dataset.label.clone(),
                    expected,
                    actual: dataset.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Destroy the chart under `key` (if any) and draw `spec` in its place.
    ///
    /// An inconsistent spec is rejected before anything is destroyed, leaving
    /// the current chart untouched. If the renderer fails to create the new
    /// chart the slot is left empty.
    pub fn render_or_replace(&mut self, key: ChartKey, spec: &ChartSpec) -> Result<(), CoreError> {
        Self::validate(key, spec)?;

        if let Some(previous) = self.charts.remove(&key) {
            log::debug!("destroying previous chart {key}");
            self.renderer.destroy(previous);
        }

        let handle = self.renderer.create(key, spec)?;
        log::debug!(
            "created chart {key} ({} points, {} datasets)",
            spec.labels.len(),
            spec.datasets.len()
        );
        self.charts.insert(key, handle);
        Ok(())
    }

    /// Destroy a single chart. Returns `true` if one was live.
    pub fn destroy(&mut self, key: ChartKey) -> bool {
        match self.charts.remove(&key) {
            Some(handle) => {
                self.renderer.destroy(handle);
                log::debug!("destroyed chart {key}");
                true
            }
            None => false,
        }
    }

    /// Destroy every tracked chart.
    pub fn destroy_all(&mut self) {
        let count = self.charts.len();
        for (_, handle) in self.charts.drain() {
            self.renderer.destroy(handle);
        }
        if count > 0 {
            log::debug!("destroyed {count} charts");
        }
    }

    pub fn contains(&self, key: ChartKey) -> bool {
        self.charts.contains_key(&key)
    }

    pub fn get(&self, key: ChartKey) -> Option<&R::Handle> {
        self.charts.get(&key)
    }

    /// Number of live charts.
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Keys with a live chart, in display order.
    pub fn live_keys(&self) -> Vec<ChartKey> {
        let mut keys: Vec<ChartKey> = self.charts.keys().copied().collect();
        keys.sort_by_key(|k| display_order(*k));
        keys
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

fn display_order(key: ChartKey) -> u8 {
    match key {
        ChartKey::Asset => 0,
        ChartKey::Cost => 1,
        ChartKey::Roi => 2,
        ChartKey::Shares => 3,
        ChartKey::Compare => 4,
    }
}
