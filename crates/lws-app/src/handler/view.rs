//! Navigation and theme handlers

use lws_core::prelude::*;
use lws_core::Page;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_navigate(state: &mut AppState, page: Page) -> UpdateResult {
    if state.view.current_page != page {
        debug!("Navigate {} -> {}", state.view.current_page, page);
        state.view.current_page = page;
    }
    UpdateResult::none()
}

pub(crate) fn handle_toggle_theme(state: &mut AppState) -> UpdateResult {
    let theme = state.view.theme.toggled();
    debug!("Theme switched to {:?}", theme);
    state.view.theme = theme;
    UpdateResult::action(UpdateAction::PersistTheme { theme })
}
