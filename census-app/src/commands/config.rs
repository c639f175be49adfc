use crate::state::{AppConfig, AppState};

pub fn get_config(state: &AppState) -> AppConfig {
    let mut config = state.config.clone();
    // Report the date actually in effect, pinned or not
    config.today = Some(state.today());
    config
}
