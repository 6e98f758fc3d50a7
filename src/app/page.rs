use crate::adapters::{FilePreferenceStore, HeadlessForm, MemoryPreferenceStore};
use crate::app::events::PageEvent;
use crate::config::toml_config::PageConfig;
use crate::core::form::FormInput;
use crate::core::validator::FieldValidator;
use crate::domain::ports::PreferenceStore;
use crate::utils::error::Result;
use crate::widgets::color::{ColorPicker, ColorPreview};
use crate::widgets::contact_form::ContactForm;
use crate::widgets::counter::Counter;
use crate::widgets::faq::FaqAccordion;
use crate::widgets::mouse::{AreaOrigin, MouseTracker};
use crate::widgets::tabs::TabNavigation;
use crate::widgets::theme::{ThemeMode, ThemeToggle};
use chrono::Utc;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Every interactive element of the page, driven one event at a time.
#[derive(Debug)]
pub struct Page {
    title: String,
    theme: ThemeToggle,
    tabs: TabNavigation,
    counter: Counter,
    mouse: MouseTracker,
    color: ColorPicker,
    form: ContactForm,
    faq: FaqAccordion,
    search_requests: usize,
    started: Instant,
}

impl Page {
    /// Builds the page, persisting preferences where the config says.
    pub fn from_config(config: &PageConfig) -> Result<Self> {
        let store: Box<dyn PreferenceStore> = match &config.theme.storage_path {
            Some(path) => Box::new(FilePreferenceStore::new(path)),
            None => Box::new(MemoryPreferenceStore::new()),
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: &PageConfig, store: Box<dyn PreferenceStore>) -> Result<Self> {
        let started = Instant::now();
        config.validate_config()?;

        let theme = ThemeToggle::load(store)?;

        let mut tabs = TabNavigation::new(config.tabs.links.clone(), config.tabs.contents.clone());
        if let Some(initial) = config.tabs.initial {
            tabs = tabs.with_initial(initial);
        }

        let mouse = MouseTracker::new(AreaOrigin {
            left: config.mouse.area_left.unwrap_or(0.0),
            top: config.mouse.area_top.unwrap_or(0.0),
        });

        let color = match &config.color.initial {
            Some(initial) => ColorPicker::new(initial)?,
            None => ColorPicker::default(),
        };

        let form = ContactForm::new(
            FieldValidator::new(config.numeric_parsing()),
            HeadlessForm::new(chrono::Duration::seconds(config.success_display_seconds())),
        );

        let page = Self {
            title: config.page.title.clone(),
            theme,
            tabs,
            counter: Counter::new(),
            mouse,
            color,
            form,
            faq: FaqAccordion::new(config.faq.questions.clone()),
            search_requests: 0,
            started,
        };

        tracing::info!("🚀 {} loaded successfully!", page.title);
        Ok(page)
    }

    /// Logs and returns the time since the page started initialising.
    pub fn loaded(&self) -> Duration {
        let elapsed = self.started.elapsed();
        tracing::info!("🎉 Page fully loaded");
        tracing::info!("Page load time: {}ms", elapsed.as_millis());
        elapsed
    }

    /// Handles one event. Returns whether the browser default was prevented.
    pub fn dispatch(&mut self, event: PageEvent) -> Result<bool> {
        tracing::debug!("Dispatching {:?}", event);

        match event {
            PageEvent::ToggleTheme => {
                self.theme.toggle()?;
            }
            PageEvent::SelectTab { index } => {
                self.tabs.select(index)?;
                return Ok(true);
            }
            PageEvent::CounterIncrease => {
                self.counter.increase();
            }
            PageEvent::CounterDecrease => {
                self.counter.decrease();
            }
            PageEvent::CounterReset => {
                self.counter.reset();
            }
            PageEvent::KeyDown { key, ctrl, meta } => {
                return Ok(self.key_down(&key, ctrl, meta));
            }
            PageEvent::MouseEnter => self.mouse.enter(),
            PageEvent::MouseMove { x, y } => {
                self.mouse.move_to(x, y);
            }
            PageEvent::MouseLeave => self.mouse.leave(),
            PageEvent::ColorInput { color } => self.color.input(&color)?,
            PageEvent::ColorApply => self.color.apply(),
            PageEvent::Input { field, value } => {
                self.form.input(field, &value);
            }
            PageEvent::Check { field, checked } => {
                self.form.set_checked(field, checked);
            }
            PageEvent::Blur { field } => {
                self.form.blur(field);
            }
            PageEvent::Submit => {
                self.form.submit();
                return Ok(true);
            }
            PageEvent::FaqClick { index } => {
                self.faq.click(index)?;
            }
        }

        Ok(false)
    }

    fn key_down(&mut self, key: &str, ctrl: bool, meta: bool) -> bool {
        let mut prevented = false;

        if (ctrl || meta) && key == "k" {
            self.search_requests += 1;
            tracing::info!("Search shortcut triggered");
            prevented = true;
        }

        if key == "Escape" {
            self.faq.close_active();
        }

        self.counter.handle_key(key);
        prevented
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> &ThemeToggle {
        &self.theme
    }

    pub fn tabs(&self) -> &TabNavigation {
        &self.tabs
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn mouse(&self) -> &MouseTracker {
        &self.mouse
    }

    pub fn color(&self) -> &ColorPicker {
        &self.color
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn faq(&self) -> &FaqAccordion {
        &self.faq
    }

    pub fn search_requests(&self) -> usize {
        self.search_requests
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            title: self.title.clone(),
            theme: ThemeSnapshot {
                mode: self.theme.mode(),
                button_label: self.theme.button_label(),
                body_class: self.theme.body_class(),
            },
            tabs: self.tabs.clone(),
            counter: CounterSnapshot {
                value: self.counter.value(),
                color: self.counter.color(),
            },
            mouse: MouseSnapshot {
                coords: self.mouse.coords_text(),
                transform: self.mouse.transform(),
            },
            color: self.color.preview().clone(),
            form: FormSnapshot {
                values: self.form.input_values().clone(),
                strength_class: self.form.view().strength_class(),
                status_visible: self.form.view().status_visible_at(Utc::now()),
                view: self.form.view().clone(),
            },
            faq: self.faq.clone(),
            search_requests: self.search_requests,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub button_label: &'static str,
    pub body_class: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterSnapshot {
    pub value: i64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MouseSnapshot {
    pub coords: String,
    pub transform: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub values: FormInput,
    pub strength_class: String,
    pub status_visible: bool,
    pub view: HeadlessForm,
}

/// Serialisable picture of the whole page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub title: String,
    pub theme: ThemeSnapshot,
    pub tabs: TabNavigation,
    pub counter: CounterSnapshot,
    pub mouse: MouseSnapshot,
    pub color: ColorPreview,
    pub form: FormSnapshot,
    pub faq: FaqAccordion,
    pub search_requests: usize,
}
