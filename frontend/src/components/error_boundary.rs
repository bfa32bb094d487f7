//! Error boundary and error display for the media browser.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                dioxus::logger::tracing::error!("render error in {}: {}", boundary_name.read(), error_txt);
                rsx! {
                    ComponentErrorDisplay {
                        title: "Viewer Error".to_string(),
                        error_txt,
                        button {
                            style: "color:#1D4ED8; font-size: 18px; border: 1px solid #1D4ED8; padding: 8px 14px; border-radius: 5px; margin: 15px; background: white; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(
    title: ReadSignal<String>,
    error_txt: ReadSignal<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            background_color: "#111827",

            h1 {
                style: "color:#F87171; font-size: 34px; border: 1px solid #F87171; padding: 10px; border-radius: 5px; margin: 5px;",
                "{title}",
            }

            pre {
                style: "color:#FECACA; border: 1px solid #F87171; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
