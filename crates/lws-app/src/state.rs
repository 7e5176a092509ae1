//! Application state (Model in TEA pattern)

use lws_core::{ContactDraft, Page, SubmissionStatus, Theme};

use crate::config::Settings;

/// Which page is on screen and how it is themed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: Page,
    pub theme: Theme,
}

/// Where the contact form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing typed yet
    Idle,
    Editing,
    /// Request in flight; inputs and the submit button are disabled
    Pending,
    /// Last attempt succeeded and nothing has been typed since
    Success,
    /// Last attempt failed and nothing has been typed since
    Failure,
}

/// Contact form draft plus the result of the latest submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub draft: ContactDraft,

    /// Banner state; stays visible until the next submission replaces it
    pub status: SubmissionStatus,

    /// Set by edits, cleared when a submission resolves
    pub edited_since_resolution: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        match &self.status {
            SubmissionStatus::Pending => FormPhase::Pending,
            SubmissionStatus::Success(_) if !self.edited_since_resolution => FormPhase::Success,
            SubmissionStatus::Failure(_) if !self.edited_since_resolution => FormPhase::Failure,
            _ if self.draft.is_empty() => FormPhase::Idle,
            _ => FormPhase::Editing,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Inputs and the submit button are disabled while a request is in flight
    pub fn inputs_disabled(&self) -> bool {
        self.is_pending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: ViewState,

    pub contact: ContactFormState,

    /// Loaded settings (relay credential, preference key)
    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state: home page, theme as read from the preference store
    pub fn with_settings(settings: Settings, theme: Theme) -> Self {
        Self {
            view: ViewState {
                current_page: Page::Home,
                theme,
            },
            contact: ContactFormState::new(),
            settings,
        }
    }

    pub fn current_page(&self) -> Page {
        self.view.current_page
    }

    pub fn theme(&self) -> Theme {
        self.view.theme
    }
}
