//! Zoom controls, current section name and the full-size button.

use common::ViewerAction;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdOpenInNew, MdZoomIn, MdZoomOut};
use dioxus_free_icons::icons::md_navigation_icons::MdRefresh;
use dioxus_free_icons::{Icon, IconShape};

use crate::data_definitions::viewer_control::ViewerControl;

#[component]
pub fn ViewerToolbar() -> Element {
    let control = use_context::<ViewerControl>();
    let view = control.view;
    let section_name = use_memo(move || view.read().current_section_name.clone());
    let zoom_percent = use_memo(move || (view.read().zoom_factor * 100.0).round() as u32);
    let disable_zoom_in = use_memo(move || !view.read().can_zoom_in);
    let disable_zoom_out = use_memo(move || !view.read().can_zoom_out);
    let full_size_url = use_memo(move || view.read().full_size_url.clone());
    let disable_full_size = use_memo(move || full_size_url.read().is_none());

    rsx! {
        div {
            style: "
                position: absolute;
                top: 0;
                left: 0;
                right: 0;
                z-index: 10;
                display: grid;
                grid-template-columns: 1fr 1fr 1fr;
                gap: 4px;
                padding: 2px;
                background-color: rgba(0, 0, 0, 0.3);
                border-radius: 6px;
            ",
            // zoom
            div {
                style: "display: flex; gap: 4px; align-items: center;",
                ToolbarButton { icon: MdZoomIn, label: "Zoom In", disabled: disable_zoom_in, onclick: move |_| {
                    control.dispatch.call(ViewerAction::ZoomIn);
                } }
                ToolbarButton { icon: MdZoomOut, label: "Zoom Out", disabled: disable_zoom_out, onclick: move |_| {
                    control.dispatch.call(ViewerAction::ZoomOut);
                } }
                ToolbarButton { icon: MdRefresh, label: "Reset Zoom", disabled: disable_zoom_out, onclick: move |_| {
                    control.dispatch.call(ViewerAction::ResetZoom);
                } }
                span {
                    style: "color: white; font-size: 13px; margin-left: 6px;",
                    "{zoom_percent}%"
                }
            }
            // section name
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-weight: 600;
                    font-size: 14px;
                ",
                "{section_name}"
            }
            // full size
            div {
                style: "display: flex; justify-content: flex-end;",
                ToolbarButton { icon: MdOpenInNew, label: "Open Full Size", disabled: disable_full_size, onclick: move |_| {
                    if let Some(url) = full_size_url.read().as_deref() {
                        open_in_new_tab(url);
                    }
                } }
            }
        }
    }
}

#[component]
fn ToolbarButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    let btn_opacity = use_memo(move || if *disabled.read() { "0.5" } else { "1" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                display: flex;
                justify-content: center;
                padding: 6px;
                border: none;
                border-radius: 4px;
                background-color: #374151;
                color: white;
                cursor: {btn_cursor};
                opacity: {btn_opacity};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 20px; height: 20px;" }
        }
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No browser window available to open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(_) => tracing::info!("Opened full size image: {}", url),
        Err(e) => tracing::error!("Failed to open {}: {:?}", url, e),
    }
}
