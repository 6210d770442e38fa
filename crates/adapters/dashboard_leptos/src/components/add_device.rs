//! "Add Device" trigger and the single device form it mounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use plcbridge_domain::protocol::Protocol;

use crate::api;
use crate::browser;
use crate::controller::form::{ALREADY_OPEN_MESSAGE, DeviceFormState, FormLifecycle, SaveOutcome};

/// The trigger button plus `#device-container`, which hosts at most one form.
#[component]
pub fn AddDevice() -> impl IntoView {
    let lifecycle = RwSignal::new(FormLifecycle::default());

    let open = move |_| {
        if let Some(Err(_)) = lifecycle.try_update(FormLifecycle::open) {
            browser::alert(ALREADY_OPEN_MESSAGE);
        }
    };

    view! {
        <button
            id="add-device-button"
            on:click=open
            disabled=move || !lifecycle.with(FormLifecycle::trigger_enabled)
        >
            "Add Device"
        </button>
        <div id="device-container">
            <Show when=move || lifecycle.with(FormLifecycle::is_mounted)>
                <DeviceForm lifecycle=lifecycle/>
            </Show>
        </div>
    }
}

#[component]
fn DeviceForm(lifecycle: RwSignal<FormLifecycle>) -> impl IntoView {
    let value = move |read: fn(&DeviceFormState) -> String| {
        lifecycle.with(|l| l.form().map(read).unwrap_or_default())
    };
    let edit = move |write: fn(&mut DeviceFormState, String)| {
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            lifecycle.update(|l| l.edit(|form| write(form, text)));
        }
    };
    let panel = move |protocol: Protocol| {
        let visible = lifecycle.with(|l| l.form().is_some_and(|f| f.is_panel_visible(protocol)));
        if visible { "block" } else { "none" }
    };

    let select_protocol = move |ev: leptos::ev::Event| {
        let selected = event_target_value(&ev);
        lifecycle.update(|l| l.edit(|form| form.select_protocol(&selected)));
    };

    let save = move |_| {
        let Some(request) = lifecycle.with_untracked(|l| l.form().map(DeviceFormState::to_request))
        else {
            return;
        };
        spawn_local(async move {
            let reply = api::add_device(&request).await;
            match lifecycle.try_update(|l| l.apply_save_reply(reply)) {
                Some(SaveOutcome::Reload) => browser::reload(),
                Some(SaveOutcome::Alert(message)) => browser::alert(&message),
                Some(SaveOutcome::Log(message)) => leptos::logging::error!("{message}"),
                None => {}
            }
        });
    };

    view! {
        <div class="device-form">
            <h3>"Add Device"</h3>
            <label>
                "Device Name:"
                <input
                    type="text"
                    name="device-name"
                    required=true
                    prop:value=move || value(|f| f.device_name.clone())
                    on:input=edit(|f, text| f.device_name = text)
                />
            </label>
            <label>
                "Protocol:"
                <select name="protocol" on:change=select_protocol>
                    {Protocol::ALL
                        .into_iter()
                        .map(|protocol| {
                            view! {
                                <option value=protocol.as_str() selected={protocol == Protocol::default()}>
                                    {protocol.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <div class="modbus-config" style:display=move || panel(Protocol::Modbus)>
                <label>
                    "Modbus IP:"
                    <input
                        type="text"
                        name="modbus-ip"
                        placeholder="192.168.0.1"
                        prop:value=move || value(|f| f.modbus_ip.clone())
                        on:input=edit(|f, text| f.modbus_ip = text)
                    />
                </label>
                <label>
                    "Modbus Port:"
                    <input
                        type="number"
                        name="modbus-port"
                        prop:value=move || value(|f| f.modbus_port.clone())
                        on:input=edit(|f, text| f.modbus_port = text)
                    />
                </label>
            </div>
            <div class="s7-config" style:display=move || panel(Protocol::S7)>
                <label>
                    "S7 IP:"
                    <input
                        type="text"
                        name="s7-ip"
                        placeholder="192.168.0.1"
                        prop:value=move || value(|f| f.s7_ip.clone())
                        on:input=edit(|f, text| f.s7_ip = text)
                    />
                </label>
                <label>
                    "S7 Rack:"
                    <input
                        type="number"
                        name="s7-rack"
                        prop:value=move || value(|f| f.s7_rack.clone())
                        on:input=edit(|f, text| f.s7_rack = text)
                    />
                </label>
                <label>
                    "S7 Slot:"
                    <input
                        type="number"
                        name="s7-slot"
                        prop:value=move || value(|f| f.s7_slot.clone())
                        on:input=edit(|f, text| f.s7_slot = text)
                    />
                </label>
            </div>
            <div class="form-actions">
                <button class="remove-device-button" on:click=move |_| lifecycle.update(FormLifecycle::remove)>
                    "Remove"
                </button>
                <button class="save-device-button" on:click=save>
                    "Save"
                </button>
            </div>
        </div>
    }
}
