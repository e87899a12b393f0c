//! Dashboard page: the tracked-domain overview table.

use dioxus::prelude::*;

use common::columns::DOMAIN_COLUMNS;
use common::compare::compare_records;
use common::domain::DomainRecord;
use common::filter::SortDirective;

use crate::api::rank_api::list_domains;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::table_components::domain_table::DomainTable;


#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Title { "Rankwatch - Domains" }
        div {
            id: "x-dashboard-root",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 100%;
                height: 100%;
                padding: 24px 28px;
                overflow-y: auto;
            ",
            h1 {
                style: "font-size: 24px; font-weight: 500;",
                "Tracked domains"
            }
            SuspendWrapper {
                DomainTableView {}
            }
        }
    }
}

#[component]
fn DomainTableView() -> Element {
    let domains = use_resource(move || list_domains());

    let domain_list = use_memo(move || match domains.read().as_ref() {
        Some(Ok(list)) => list.clone(),
        Some(Err(e)) => {
            // upstream failure degrades to an empty overview
            dioxus::logger::tracing::warn!("domain fetch failed: {e}");
            Vec::new()
        }
        None => Vec::new(),
    });

    // the dashboard sort is page-local; only the keyword table reads it from the URL
    let mut sort = use_signal(|| SortDirective {
        field: "keywords".to_string(),
        descending: true,
    });
    let set_sort = Callback::new(move |field: &'static str| {
        let current = sort.peek().clone();
        let descending = if current.field == field {
            !current.descending
        } else {
            DOMAIN_COLUMNS.iter().any(|c| c.key == field && c.numeric)
        };
        sort.set(SortDirective {
            field: field.to_string(),
            descending,
        });
    });

    let sorted_domains = use_memo(move || {
        let directive = sort.read().clone();
        let mut list: Vec<DomainRecord> = domain_list.read().clone();
        list.sort_by(|a, b| compare_records(a, b, &directive.field, directive.descending));
        list
    });

    rsx! {
        DomainTable {
            domains: sorted_domains,
            sort,
            set_sort,
        }
    }
}
