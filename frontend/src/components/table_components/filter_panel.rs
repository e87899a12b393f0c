//! Filter controls for the keyword table.
//!
//! Every control writes back into the URL query string through
//! `KeywordTableState::set_params`; nothing here owns filter state beyond
//! the in-flight draft of the text inputs.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdDelete, MdSearch},
        md_editor_icons::MdInsertLink,
        md_file_icons::MdFileDownload,
        md_toggle_icons::{MdStar, MdStarBorder},
    },
};

use common::country::{COUNTRY_CODES, DEFAULT_COUNTRY};
use common::filter_params::{FilterParams, ThresholdMetric};
use common::tag::KeywordTag;

use crate::api::tag_api::{delete_tag, list_tags, update_tag};
use crate::pages::keywords_page::KeywordTableState;

const SEARCH_DEBOUNCE_MS: u32 = 400;

#[component]
pub fn FilterPanel() -> Element {
    let state = use_context::<KeywordTableState>();

    rsx! {
        div {
            id: "x-keyword-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 12px 14px;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 14px;
                    flex-wrap: wrap;
                ",
                SearchInput {}
                StarredToggle {}
                CountrySelect {}
                LandingPageInput {}
                // empty space
                div { style: "flex-grow: 1;" }
                CopyFilterLinkButton {}
                ExportCsvLink {}
                ClearFiltersButton {}
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 24px;
                    flex-wrap: wrap;
                ",
                ThresholdFilterRow { metric: ThresholdMetric::Rank, label: "Rank" }
                ThresholdFilterRow { metric: ThresholdMetric::Clicks, label: "Clicks" }
                ThresholdFilterRow { metric: ThresholdMetric::Impressions, label: "Impressions" }
            }

            TagFilterSection {}
        }
    }
}

fn edit_params(state: &KeywordTableState, edit: impl FnOnce(&mut FilterParams)) {
    let mut params = state.params.peek().clone();
    edit(&mut params);
    state.set_params.call(params);
}

#[component]
fn SearchInput() -> Element {
    let state = use_context::<KeywordTableState>();
    let mut draft = use_signal(|| state.params.peek().get("search").unwrap_or("").to_string());
    // navigation resets the draft to what the URL says
    use_effect(move || {
        let committed = state.params.read().get("search").unwrap_or("").to_string();
        draft.set(committed);
    });

    let mut debounce_generation = use_signal(|| 0_u64);
    let commit = move || {
        edit_params(&state, |params| params.set("search", draft.peek().clone()));
    };

    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                border: 1px solid #D1D5DB;
                border-radius: 9999px;
                padding: 5px 10px;
                width: 260px;
            ",
            Icon { icon: MdSearch, style: "width: 16px; height: 16px; color: #6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search keywords (comma-separated)",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    font-size: 13px;
                ",
                value: "{draft}",
                oninput: move |e| {
                    draft.set(e.value());
                    let generation = *debounce_generation.peek() + 1;
                    debounce_generation.set(generation);
                    spawn(async move {
                        gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                        // only the latest keystroke commits
                        if *debounce_generation.peek() == generation {
                            commit();
                        }
                    });
                },
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        commit();
                    }
                },
            }
        }
    }
}

#[component]
fn StarredToggle() -> Element {
    let state = use_context::<KeywordTableState>();
    let starred = use_memo(move || state.params.read().starred_only());
    rsx! {
        button {
            title: "Show starred keywords only",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                background: white;
                padding: 5px 8px;
                font-size: 13px;
                cursor: pointer;
            ",
            onclick: move |_| {
                let enable = !starred();
                edit_params(&state, |params| {
                    if enable {
                        params.set("starred", "true");
                    } else {
                        params.remove("starred");
                    }
                });
            },
            if starred() {
                Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #EAB308;" }
            } else {
                Icon { icon: MdStarBorder, style: "width: 16px; height: 16px; color: #6B7280;" }
            }
            "Starred"
        }
    }
}

#[component]
fn CountrySelect() -> Element {
    let state = use_context::<KeywordTableState>();
    let selected = use_memo(move || {
        state
            .params
            .read()
            .country()
            .unwrap_or(DEFAULT_COUNTRY)
            .to_string()
    });
    rsx! {
        select {
            title: "Country",
            style: "
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                padding: 5px 8px;
                font-size: 13px;
                background: white;
            ",
            onchange: move |e| {
                let value = e.value();
                edit_params(&state, |params| {
                    if value == DEFAULT_COUNTRY {
                        params.remove("country");
                    } else {
                        params.set("country", value);
                    }
                });
            },
            for (name, code) in COUNTRY_CODES.iter().copied() {
                option {
                    value: code,
                    selected: selected() == code,
                    "{capitalize_words(name)}"
                }
            }
        }
    }
}

#[component]
fn LandingPageInput() -> Element {
    let state = use_context::<KeywordTableState>();
    let mut draft = use_signal(|| {
        state
            .params
            .peek()
            .get("landingPages")
            .unwrap_or("")
            .to_string()
    });
    use_effect(move || {
        let committed = state
            .params
            .read()
            .get("landingPages")
            .unwrap_or("")
            .to_string();
        draft.set(committed);
    });
    let commit = move || {
        edit_params(&state, |params| {
            params.set("landingPages", draft.peek().clone())
        });
    };
    rsx! {
        input {
            r#type: "text",
            title: "Filter by landing page URL fragments",
            placeholder: "Landing pages",
            style: "
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                padding: 5px 8px;
                font-size: 13px;
                width: 170px;
            ",
            value: "{draft}",
            oninput: move |e| draft.set(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    commit();
                }
            },
            onblur: move |_| commit(),
        }
    }
}

#[component]
fn ThresholdFilterRow(metric: ThresholdMetric, label: String) -> Element {
    let state = use_context::<KeywordTableState>();
    let prefix = metric.key_prefix();

    let op = use_memo(move || {
        state
            .params
            .read()
            .get(&format!("{prefix}Type"))
            .unwrap_or("")
            .to_string()
    });
    let value1 = use_memo(move || {
        state
            .params
            .read()
            .get(&format!("{prefix}Value1"))
            .unwrap_or("")
            .to_string()
    });
    let value2 = use_memo(move || {
        state
            .params
            .read()
            .get(&format!("{prefix}Value2"))
            .unwrap_or("")
            .to_string()
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                font-size: 13px;
            ",
            span { style: "color: rgb(75, 87, 112); min-width: 76px;", "{label}" }
            select {
                style: "border: 1px solid #D1D5DB; border-radius: 6px; padding: 4px; background: white;",
                onchange: move |e| {
                    let value = e.value();
                    edit_params(&state, |params| {
                        if value.is_empty() {
                            params.remove(&format!("{prefix}Type"));
                            params.remove(&format!("{prefix}Value1"));
                            params.remove(&format!("{prefix}Value2"));
                        } else {
                            if value != "between" {
                                params.remove(&format!("{prefix}Value2"));
                            }
                            params.set(&format!("{prefix}Type"), value);
                        }
                    });
                },
                option { value: "", selected: op().is_empty(), "Any" }
                option { value: "equals", selected: op() == "equals", "=" }
                option { value: "greater", selected: op() == "greater", ">" }
                option { value: "less", selected: op() == "less", "<" }
                option { value: "between", selected: op() == "between", "between" }
            }
            if !op().is_empty() {
                input {
                    r#type: "number",
                    style: "border: 1px solid #D1D5DB; border-radius: 6px; padding: 4px; width: 70px;",
                    value: "{value1}",
                    onchange: move |e| {
                        edit_params(&state, |params| params.set(&format!("{prefix}Value1"), e.value()));
                    },
                }
            }
            if op() == "between" {
                span { "and" }
                input {
                    r#type: "number",
                    style: "border: 1px solid #D1D5DB; border-radius: 6px; padding: 4px; width: 70px;",
                    value: "{value2}",
                    onchange: move |e| {
                        edit_params(&state, |params| params.set(&format!("{prefix}Value2"), e.value()));
                    },
                }
            }
        }
    }
}

#[component]
fn TagFilterSection() -> Element {
    let mut tags = use_resource(move || list_tags());
    let tag_list = use_memo(move || match tags.read().as_ref() {
        Some(Ok(list)) => list.clone(),
        Some(Err(e)) => {
            // tag CRUD failures are never fatal for the table
            dioxus::logger::tracing::warn!("tag fetch failed: {e}");
            Vec::new()
        }
        None => Vec::new(),
    });
    let reload_tags = Callback::new(move |_: ()| {
        tags.clear();
        tags.restart();
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                flex-wrap: wrap;
            ",
            span { style: "font-size: 13px; color: rgb(75, 87, 112);", "Tags:" }
            for tag in tag_list.read().iter().cloned() {
                TagChip { key: "{tag.id}", tag, reload_tags }
            }
            if tag_list.read().is_empty() {
                span { style: "font-size: 13px; color: #9CA3AF;", "no tags" }
            }
        }
    }
}

#[component]
fn TagChip(tag: ReadSignal<KeywordTag>, reload_tags: Callback<()>) -> Element {
    let state = use_context::<KeywordTableState>();
    let mut editing = use_signal(|| false);

    let tag_name = use_memo(move || tag.read().name.clone());
    let is_selected = use_memo(move || {
        state
            .params
            .read()
            .tag_names()
            .iter()
            .any(|name| name.to_lowercase() == tag_name().to_lowercase())
    });

    let toggle_selected = move |_| {
        let name = tag_name();
        edit_params(&state, |params| {
            let mut names = params.tag_names();
            let folded = name.to_lowercase();
            if let Some(i) = names.iter().position(|n| n.to_lowercase() == folded) {
                names.remove(i);
            } else {
                names.push(name);
            }
            params.set("tags", names.join(","));
        });
    };

    let mut rename = move |new_name: String| {
        let updated = KeywordTag {
            id: tag.peek().id,
            name: new_name,
        };
        spawn(async move {
            if let Err(e) = update_tag(updated).await {
                dioxus::logger::tracing::warn!("tag rename failed: {e}");
            }
            reload_tags(());
        });
        editing.set(false);
    };

    let remove = move |_| {
        let tag_id = tag.peek().id;
        spawn(async move {
            if let Err(e) = delete_tag(tag_id).await {
                dioxus::logger::tracing::warn!("tag delete failed: {e}");
            }
            reload_tags(());
        });
    };

    let chip_border = use_memo(move || if is_selected() { "#4F46E5" } else { "#D1D5DB" });

    rsx! {
        span {
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                border: 1px solid {chip_border};
                border-radius: 9999px;
                padding: 2px 8px;
                font-size: 13px;
                background: white;
            ",
            if editing() {
                input {
                    r#type: "text",
                    style: "border: none; outline: none; width: 90px; font-size: 13px;",
                    value: "{tag_name}",
                    autofocus: true,
                    onkeydown: move |e| {
                        if e.key() == Key::Escape {
                            editing.set(false);
                        }
                    },
                    // text inputs fire change on Enter and on blur
                    onchange: move |e| rename(e.value()),
                }
            } else {
                span {
                    title: "Filter by this tag (double-click to rename)",
                    style: "cursor: pointer;",
                    onclick: toggle_selected,
                    ondoubleclick: move |_| editing.set(true),
                    "{tag_name}"
                }
            }
            button {
                title: "Delete tag",
                style: "border: none; background: none; cursor: pointer; color: #9CA3AF; padding: 0;",
                onclick: remove,
                Icon { icon: MdDelete, style: "width: 14px; height: 14px;" }
            }
        }
    }
}

#[component]
fn CopyFilterLinkButton() -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let url = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        if let Some(window) = web_sys::window() {
            let _r = window.navigator().clipboard().write_text(&url);
        }
        dioxus::logger::tracing::info!("Filter link copied to clipboard: {:#?}", url);
    });
    rsx! {
        button {
            title: "Copy a link to the current filters",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                background: white;
                padding: 5px 8px;
                font-size: 13px;
                cursor: pointer;
            ",
            onclick: move |_| do_copy_link(()),
            Icon { icon: MdInsertLink, style: "width: 16px; height: 16px;" }
            "Copy link"
        }
    }
}

#[component]
fn ExportCsvLink() -> Element {
    let state = use_context::<KeywordTableState>();
    let href = use_memo(move || format!("/_export_keywords/{}", state.domain_id.read()));
    rsx! {
        a {
            title: "Download the keyword list as CSV",
            href: "{href}",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                background: white;
                padding: 5px 8px;
                font-size: 13px;
            ",
            Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
            "Export CSV"
        }
    }
}

#[component]
fn ClearFiltersButton() -> Element {
    let state = use_context::<KeywordTableState>();
    let has_filters = use_memo(move || !state.params.read().is_empty());
    rsx! {
        if has_filters() {
            button {
                style: "
                    border: none;
                    background: none;
                    font-size: 13px;
                    color: #4F46E5;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    state.set_params.call(FilterParams::default());
                },
                "Clear filters"
            }
        }
    }
}

fn capitalize_words(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
