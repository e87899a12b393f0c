//! The tracked-domain overview table.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_navigation_icons::{MdArrowDownward, MdArrowUpward},
};

use common::columns::{DOMAIN_COLUMNS, TableColumn};
use common::domain::DomainRecord;
use common::filter::SortDirective;
use common::format::{format_count, format_delta, format_position};

use crate::routes::Route;

#[component]
pub fn DomainTable(
    domains: ReadSignal<Vec<DomainRecord>>,
    sort: ReadSignal<SortDirective>,
    set_sort: Callback<&'static str>,
) -> Element {
    rsx! {
        table {
            class: "rw-table",
            thead {
                tr {
                    for column in DOMAIN_COLUMNS.iter().copied() {
                        DomainHeaderCell { column, sort, set_sort }
                    }
                }
            }
            tbody {
                for domain in domains.read().iter().cloned() {
                    DomainRow { key: "{domain.id}", domain }
                }
            }
        }
        if domains.read().is_empty() {
            div {
                style: "
                    padding: 30px;
                    text-align: center;
                    color: rgb(75, 87, 112);
                    font-size: 16px;
                ",
                "No tracked domains yet."
            }
        }
    }
}

#[component]
fn DomainHeaderCell(
    column: TableColumn,
    sort: ReadSignal<SortDirective>,
    set_sort: Callback<&'static str>,
) -> Element {
    let is_active = use_memo(move || sort.read().field == column.key);
    rsx! {
        th {
            class: if column.numeric { "rw-numeric" },
            title: "Sort by {column.label}",
            onclick: move |_| set_sort(column.key),
            "{column.label}"
            if is_active() {
                if sort.read().descending {
                    Icon { icon: MdArrowDownward, style: "width: 14px; height: 14px; vertical-align: middle;" }
                } else {
                    Icon { icon: MdArrowUpward, style: "width: 14px; height: 14px; vertical-align: middle;" }
                }
            }
        }
    }
}

#[component]
fn DomainRow(domain: ReadSignal<DomainRecord>) -> Element {
    let domain = domain.read().clone();
    let domain_id = domain.id;
    let average_txt = domain
        .average_position
        .map(format_position)
        .unwrap_or("-".to_string());
    let delta = domain.average_position_delta();
    let delta_txt = delta.map(format_delta).unwrap_or("".to_string());
    let delta_class = match delta {
        Some(d) if d > 0.0 => "rw-delta-up",
        Some(d) if d < 0.0 => "rw-delta-down",
        _ => "",
    };

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| {
                navigator().push(Route::keywords_page(domain_id));
            },
            td {
                style: "font-weight: 500;",
                "{domain.display_name}"
            }
            td { class: "rw-numeric", "{format_count(domain.keyword_count)}" }
            td {
                class: "rw-numeric",
                "{average_txt} "
                span { class: delta_class, "{delta_txt}" }
            }
            td { class: "rw-numeric", "{format_count(domain.clicks)}" }
            td { class: "rw-numeric", "{format_count(domain.impressions)}" }
            td { class: "rw-numeric", "{format_count(domain.top_three_count)}" }
        }
    }
}
