//! The sortable, paginated keyword table.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_navigation_icons::{MdArrowBack, MdArrowDownward, MdArrowForward, MdArrowUpward},
        md_toggle_icons::{MdStar, MdStarBorder},
    },
};

use common::columns::{KEYWORD_COLUMNS, TableColumn};
use common::format::{format_count, format_delta, format_position};
use common::keyword::KeywordRecord;
use common::table_const::PAGE_SIZE;

use crate::pages::keywords_page::KeywordTableState;

#[component]
pub fn KeywordTable() -> Element {
    let state = use_context::<KeywordTableState>();
    let sorted_keywords = state.sorted_keywords;
    let current_page = state.current_page;

    let page_slice = use_memo(move || {
        let records = sorted_keywords.read();
        let start = (*current_page.read() * PAGE_SIZE) as usize;
        let end = (start + PAGE_SIZE as usize).min(records.len());
        if start >= records.len() {
            Vec::new()
        } else {
            records[start..end].to_vec()
        }
    });

    rsx! {
        div {
            id: "x-keyword-table-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                width: 100%;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                ",
                h2 {
                    style: "font-size: 16px; font-weight: 300; color: rgb(75, 87, 112);",
                    "{sorted_keywords.read().len()} keywords"
                }
                // empty space
                div { style: "flex-grow: 1;" }
                PaginationControls {}
            }

            table {
                class: "rw-table",
                thead {
                    tr {
                        for column in KEYWORD_COLUMNS.iter().copied() {
                            SortableHeaderCell { column }
                        }
                    }
                }
                tbody {
                    for record in page_slice.read().iter().cloned() {
                        KeywordRow { key: "{record.id}", record }
                    }
                }
            }

            if sorted_keywords.read().is_empty() {
                div {
                    style: "
                        padding: 30px;
                        text-align: center;
                        color: rgb(75, 87, 112);
                        font-size: 16px;
                    ",
                    "No keywords match the current filters."
                }
            }
        }
    }
}

#[component]
fn SortableHeaderCell(column: TableColumn) -> Element {
    let state = use_context::<KeywordTableState>();
    let outcome = state.outcome;

    let is_active = use_memo(move || outcome.read().sort.field == column.key);
    let is_descending = use_memo(move || outcome.read().sort.descending);

    let on_click = move |_| {
        let mut params = state.params.peek().clone();
        if is_active() {
            // second click on the same column flips the direction
            if is_descending() {
                params.remove("dir");
            } else {
                params.set("dir", "desc");
            }
        } else {
            params.set("sort", column.key);
            params.remove("dir");
        }
        state.set_params.call(params);
    };

    rsx! {
        th {
            class: if column.numeric { "rw-numeric" },
            title: "Sort by {column.label}",
            onclick: on_click,
            "{column.label}"
            if is_active() {
                if is_descending() {
                    Icon { icon: MdArrowDownward, style: "width: 14px; height: 14px; vertical-align: middle;" }
                } else {
                    Icon { icon: MdArrowUpward, style: "width: 14px; height: 14px; vertical-align: middle;" }
                }
            }
        }
    }
}

#[component]
fn KeywordRow(record: ReadSignal<KeywordRecord>) -> Element {
    let record = record.read().clone();
    let rank_txt = record
        .position()
        .map(format_position)
        .unwrap_or("-".to_string());
    let volume_txt = record
        .search_volume
        .map(format_count)
        .unwrap_or("-".to_string());
    let clicks_txt = record
        .clicks()
        .map(format_count)
        .unwrap_or("-".to_string());
    let impressions_txt = record
        .impressions()
        .map(format_count)
        .unwrap_or("-".to_string());

    rsx! {
        tr {
            td {
                style: "width: 30px; color: #EAB308;",
                if record.starred {
                    Icon { icon: MdStar, style: "width: 18px; height: 18px;" }
                } else {
                    Icon { icon: MdStarBorder, style: "width: 18px; height: 18px; color: #C4C8D0;" }
                }
            }
            td {
                "{record.title}"
                span {
                    style: "margin-left: 8px;",
                    for tag in record.tags.iter() {
                        span { class: "rw-tag-chip", "{tag.name}" }
                    }
                }
            }
            td { class: "rw-numeric", "{rank_txt}" }
            RankDeltaCell { delta: record.position_delta() }
            td { class: "rw-numeric", "{volume_txt}" }
            td { class: "rw-numeric", "{clicks_txt}" }
            td { class: "rw-numeric", "{impressions_txt}" }
            td { "{record.location.country.to_uppercase()}" }
        }
    }
}

#[component]
fn RankDeltaCell(delta: ReadSignal<Option<f64>>) -> Element {
    let Some(delta) = *delta.read() else {
        return rsx! { td { class: "rw-numeric", "-" } };
    };
    let class = if delta > 0.0 {
        "rw-numeric rw-delta-up"
    } else if delta < 0.0 {
        "rw-numeric rw-delta-down"
    } else {
        "rw-numeric"
    };
    rsx! {
        td { class: class, "{format_delta(delta)}" }
    }
}

#[component]
fn PaginationControls() -> Element {
    let state = use_context::<KeywordTableState>();
    let sorted_keywords = state.sorted_keywords;
    let current_page = state.current_page;

    let max_pages = use_memo(move || {
        let count = sorted_keywords.read().len() as u64;
        count.div_ceil(PAGE_SIZE).max(1)
    });
    let selected_page = use_memo(move || (*current_page.read() + 1).min(*max_pages.read()));
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < *max_pages.read());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
            ",
            PageButton {
                label: "Previous page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| { state.set_current_page.call(selected_page() - 2); },
                Icon { icon: MdArrowBack, style: "width: 18px; height: 18px;" }
            }
            div {
                style: "font-size: 14px;",
                "{selected_page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    " / {*max_pages.read()}"
                }
            }
            PageButton {
                label: "Next page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| { state.set_current_page.call(selected_page()); },
                Icon { icon: MdArrowForward, style: "width: 18px; height: 18px;" }
            }
        }
    }
}

#[component]
fn PageButton(
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
    children: Element,
) -> Element {
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: label,
            disabled: *disabled.read(),
            style: "
                width: 28px;
                height: 28px;
                background: white;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                padding: 3px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            {children}
        }
    }
}
