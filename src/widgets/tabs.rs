use crate::utils::error::{PageError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// The link's `data-tab` attribute.
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabContent {
    pub id: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TabNavigation {
    links: Vec<NavLink>,
    contents: Vec<TabContent>,
}

impl TabNavigation {
    pub fn new<L, C>(link_targets: L, content_ids: C) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            links: link_targets
                .into_iter()
                .map(|target| NavLink {
                    target: target.into(),
                    active: false,
                })
                .collect(),
            contents: content_ids
                .into_iter()
                .map(|id| TabContent {
                    id: id.into(),
                    active: false,
                })
                .collect(),
        }
    }

    /// Marks a link and content active, as if present in the page markup.
    pub fn with_initial(mut self, index: usize) -> Self {
        if let Some(link) = self.links.get_mut(index) {
            link.active = true;
            let target = link.target.clone();
            for content in &mut self.contents {
                content.active = content.id == target;
            }
        }
        self
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn contents(&self) -> &[TabContent] {
        &self.contents
    }

    pub fn active_link(&self) -> Option<usize> {
        self.links.iter().position(|link| link.active)
    }

    pub fn active_content(&self) -> Option<&str> {
        self.contents
            .iter()
            .find(|content| content.active)
            .map(|content| content.id.as_str())
    }

    /// Click on the link at `index`. Returns the target tab id.
    pub fn select(&mut self, index: usize) -> Result<&str> {
        if index >= self.links.len() {
            return Err(PageError::UnknownTabError {
                index,
                available: self.links.len(),
            });
        }

        for link in &mut self.links {
            link.active = false;
        }
        for content in &mut self.contents {
            content.active = false;
        }

        self.links[index].active = true;
        let target = &self.links[index].target;
        // a link without matching content leaves every panel hidden
        if let Some(content) = self.contents.iter_mut().find(|c| &c.id == target) {
            content.active = true;
        }

        tracing::info!("Switched to tab: {}", target);
        Ok(target)
    }
}
