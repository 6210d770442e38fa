//! `#toggle-server-button`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::controller::server_toggle::{ServerToggle, ToggleOutcome};

/// Starts or stops the OPC-UA server depending on its current label.
#[component]
pub fn ServerToggleButton() -> impl IntoView {
    let toggle = RwSignal::new(ServerToggle::default());

    let on_click = move |_| {
        let action = toggle.with_untracked(ServerToggle::action);
        spawn_local(async move {
            let reply = api::toggle_server(action).await;
            match toggle.try_update(|t| t.apply_reply(action, reply)) {
                Some(ToggleOutcome::Alert(message)) => browser::alert(&message),
                Some(ToggleOutcome::Log(message)) => leptos::logging::error!("{message}"),
                None => {}
            }
        });
    };

    view! {
        <button id="toggle-server-button" on:click=on_click>
            {move || toggle.with(|t| t.label().to_string())}
        </button>
    }
}
