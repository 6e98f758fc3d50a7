use crate::utils::error::{PageError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub active: bool,
}

/// Accordion where opening one item closes the rest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FaqAccordion {
    items: Vec<FaqItem>,
}

impl FaqAccordion {
    pub fn new<I>(questions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            items: questions
                .into_iter()
                .map(|question| FaqItem {
                    question: question.into(),
                    active: false,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn open_item(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }

    /// Click on the question of item `index`. Returns whether it is now open.
    pub fn click(&mut self, index: usize) -> Result<bool> {
        let available = self.items.len();
        let was_active = self
            .items
            .get(index)
            .map(|item| item.active)
            .ok_or(PageError::UnknownFaqItemError { index, available })?;

        for (i, item) in self.items.iter_mut().enumerate() {
            if i != index {
                item.active = false;
            }
        }

        self.items[index].active = !was_active;
        if was_active {
            tracing::info!("FAQ item closed");
        } else {
            tracing::info!("FAQ item opened");
        }
        Ok(!was_active)
    }

    /// Escape closes the first open item, if any.
    pub fn close_active(&mut self) -> Option<usize> {
        let index = self.open_item()?;
        self.items[index].active = false;
        Some(index)
    }
}
