//! Previous / next buttons over the image, for sections with several attachments.

use common::ViewerAction;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};

use crate::data_definitions::viewer_control::ViewerControl;

#[component]
pub fn NavigationOverlay() -> Element {
    let control = use_context::<ViewerControl>();
    let nav = use_memo(move || control.view.read().nav);
    let disable_previous = use_memo(move || nav().map(|n| !n.can_prev).unwrap_or(true));
    let disable_next = use_memo(move || nav().map(|n| !n.can_next).unwrap_or(true));
    let Some(nav_now) = nav() else {
        return rsx! {};
    };

    rsx! {
        NavigationButton { icon: MdChevronLeft, label: "Previous Image", side: "left", disabled: disable_previous, onclick: move |_| {
            control.dispatch.call(ViewerAction::PrevImage);
        } }
        div {
            style: "
                position: absolute;
                bottom: 16px;
                left: 50%;
                transform: translateX(-50%);
                padding: 2px 10px;
                border-radius: 9999px;
                background-color: rgba(0, 0, 0, 0.5);
                color: white;
                font-size: 14px;
            ",
            "{nav_now.position} / {nav_now.len}"
        }
        NavigationButton { icon: MdChevronRight, label: "Next Image", side: "right", disabled: disable_next, onclick: move |_| {
            control.dispatch.call(ViewerAction::NextImage);
        } }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, side: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_opacity = use_memo(move || if *disabled.read() { "0.5" } else { "1" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                position: absolute;
                {side}: 16px;
                top: 50%;
                transform: translateY(-50%);
                padding: 8px;
                border: none;
                border-radius: 9999px;
                background-color: rgba(0, 0, 0, 0.5);
                color: white;
                pointer-events: auto;
                opacity: {btn_opacity};
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px;" }
        }
    }
}
