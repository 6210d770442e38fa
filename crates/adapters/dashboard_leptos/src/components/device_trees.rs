//! `#modbus-tree` and `#s7-tree`, filled once from the device listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use plcbridge_domain::protocol::Protocol;

use crate::api;
use crate::controller::tree::{DeviceNode, DeviceTree, TagEditor};

#[component]
pub fn DeviceTrees() -> impl IntoView {
    let tree = RwSignal::new(DeviceTree::default());

    spawn_local(async move {
        match api::list_devices().await {
            Ok(devices) => tree.set(DeviceTree::from_devices(&devices)),
            Err(err) => leptos::logging::error!("failed to load devices: {err}"),
        }
    });

    let branch = move |protocol: Protocol| {
        tree.with(|t| {
            t.branch(protocol)
                .iter()
                .cloned()
                .map(|node| view! { <DeviceNodeItem node=node/> })
                .collect_view()
        })
    };

    view! {
        <section class="trees">
            <div>
                <h2>"Modbus"</h2>
                <ul id="modbus-tree">{move || branch(Protocol::Modbus)}</ul>
            </div>
            <div>
                <h2>"S7"</h2>
                <ul id="s7-tree">{move || branch(Protocol::S7)}</ul>
            </div>
        </section>
    }
}

/// A device entry with its session-local tag input and list.
#[component]
fn DeviceNodeItem(node: DeviceNode) -> impl IntoView {
    let editor = RwSignal::new(TagEditor::default());

    view! {
        <li class="device-node">
            {node.label()}
            <input
                placeholder="Add tag"
                prop:value=move || editor.with(|e| e.input.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    editor.update(|e| e.input = text);
                }
                on:keydown=move |ev| {
                    let key = ev.key();
                    let composing = ev.is_composing();
                    editor.update(|e| {
                        e.key(&key, composing);
                    });
                }
            />
            <ul>
                {move || {
                    editor.with(|e| {
                        e.tags()
                            .iter()
                            .map(|tag| view! { <li>{tag.clone()}</li> })
                            .collect_view()
                    })
                }}
            </ul>
        </li>
    }
}
