use crate::errors::CoreError;

/// Exclusive selection over named tabs.
///
/// Each tab and its content panel share one identifier. Selecting a tab
/// deactivates every other tab/panel pair and activates exactly the selected
/// one. The initial selection is whatever the markup declared; it is not
/// normalised at construction.
#[derive(Debug, Clone)]
pub struct TabController {
    tabs: Vec<String>,
    active: Option<usize>,
}

impl TabController {
    /// `initially_active` that does not name a known tab leaves nothing active.
    pub fn new<I, S>(tabs: I, initially_active: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tabs: Vec<String> = tabs.into_iter().map(Into::into).collect();
        let active = initially_active.and_then(|id| tabs.iter().position(|t| t == id));
        Self { tabs, active }
    }

    /// Activate `id`. Unknown ids are rejected and leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> Result<(), CoreError> {
        let index = self
            .tabs
            .iter()
            .position(|t| t == id)
            .ok_or_else(|| CoreError::UnknownTab(id.to_string()))?;
        if self.active != Some(index) {
            log::debug!("tab switched to {id}");
        }
        self.active = Some(index);
        Ok(())
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.tabs[i].as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// A panel is visible exactly when its tab is active.
    pub fn is_panel_visible(&self, id: &str) -> bool {
        self.is_active(id)
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// `(id, active)` for every tab, in declaration order.
    pub fn states(&self) -> Vec<(&str, bool)> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), self.active == Some(i)))
            .collect()
    }
}
