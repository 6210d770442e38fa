use leptos::prelude::*;

pub mod api;
mod browser;
mod components;
pub mod controller;

use components::{AddDevice, DeviceTrees, ServerToggleButton};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <header>
            <h1>"plcbridge"</h1>
            <ServerToggleButton/>
        </header>
        <main>
            <AddDevice/>
            <DeviceTrees/>
        </main>
    }
}
