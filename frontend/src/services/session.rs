use gloo::storage::{LocalStorage, Storage};
use shared::Session;
use yew::prelude::*;

use crate::services::logging::Logger;

const SESSION_KEY: &str = "feastly.session";

/// Hydrate the session written by the external identity provider, falling
/// back to a guest session when none is stored.
pub fn load_session() -> Session {
    match LocalStorage::get::<Session>(SESSION_KEY) {
        Ok(session) => {
            Logger::info_with_component(
                "session",
                &format!("restored session for {}", session.display_name),
            );
            session
        }
        Err(_) => {
            Logger::debug_with_component("session", "no stored session, using guest");
            Session::guest()
        }
    }
}

/// Current session from context. Guest when no provider is mounted.
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::guest)
}
