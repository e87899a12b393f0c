//! Error boundaries for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            gap: 10px;
                            padding: 30px;
                        ",
                        h1 {
                            style: "color: #B91C1C; font-size: 42px;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: rgb(75, 87, 112); font-size: 18px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #4F46E5; font-size: 18px; border: 1px solid #4F46E5; padding: 8px 12px; border-radius: 6px;",
                            "Return to Dashboard"
                        }
                        pre {
                            style: "color: #1C212D; border: 1px solid #B91C1C; padding: 10px; border-radius: 6px; text-wrap: auto; max-width: 700px;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 15px; border: 1px solid #4F46E5; background: white; padding: 8px 12px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "8px",

            h2 {
                style: "color: #B91C1C; font-size: 22px;",
                "This section failed to load",
            }

            pre {
                style: "color: rgb(75, 87, 112); border: 1px solid #E5E7EB; background: white; padding: 10px; border-radius: 6px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
