//! Keyword table page for one tracked domain.
//!
//! The URL query string is the filter/sort configuration: every change to it
//! re-runs the filter pipeline over the keyword list held in memory.

use dioxus::prelude::*;

use common::columns::KEYWORD_COLUMNS;
use common::compare::compare_records;
use common::filter::{FilterOutcome, apply_filters, merge_new_keywords};
use common::filter_params::FilterParams;
use common::keyword::KeywordRecord;

use crate::api::rank_api::list_keywords;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::table_components::add_keyword_form::AddKeywordForm;
use crate::components::table_components::filter_panel::FilterPanel;
use crate::components::table_components::keyword_table::KeywordTable;
use crate::data_definitions::live_updates::use_keyword_live_channel;
use crate::routes::Route;

const DEFAULT_SORT_FIELD: &str = "rank";

#[component]
pub fn KeywordsPage(domain_id: ReadSignal<u64>, filters: ReadSignal<String>) -> Element {
    rsx! {
        Title { "Rankwatch - Keywords" }
        KeywordsPageRoot { domain_id, filters }
    }
}

#[derive(Clone, Copy)]
pub struct KeywordTableState {
    pub domain_id: ReadSignal<u64>,
    pub params: Memo<FilterParams>,
    pub outcome: Memo<FilterOutcome>,
    pub sorted_keywords: Memo<Vec<KeywordRecord>>,
    pub current_page: ReadSignal<u64>,
    pub set_current_page: Callback<u64>,
    pub set_params: Callback<FilterParams>,
}

#[component]
fn KeywordsPageRoot(domain_id: ReadSignal<u64>, filters: ReadSignal<String>) -> Element {
    let params = use_memo(move || FilterParams::from_query(&filters.read()));

    let mut fetched = use_resource(move || {
        let id = *domain_id.read();
        list_keywords(id)
    });
    // refetch when the route points at another domain
    use_effect(move || {
        let _ = domain_id.read();
        fetched.clear();
        fetched.restart();
    });

    let mut held_keywords = use_signal(Vec::<KeywordRecord>::new);
    use_effect(move || {
        match fetched.read().as_ref() {
            Some(Ok(list)) => held_keywords.set(list.clone()),
            Some(Err(e)) => {
                // upstream failure degrades to an empty table
                dioxus::logger::tracing::warn!("keyword fetch failed: {e}");
                held_keywords.set(Vec::new());
            }
            None => {}
        }
    });

    // keywords created elsewhere on the page arrive through the live channel
    let on_batch = Callback::new(move |batch: Vec<KeywordRecord>| {
        let merged = merge_new_keywords(&held_keywords.peek(), &batch);
        held_keywords.set(merged);
    });
    use_keyword_live_channel(on_batch);

    let outcome = use_memo(move || {
        apply_filters(
            &held_keywords.read(),
            &params.read(),
            KEYWORD_COLUMNS,
            DEFAULT_SORT_FIELD,
        )
    });
    let sorted_keywords = use_memo(move || {
        let outcome = outcome.read();
        let sort = outcome.sort.clone();
        let mut records = outcome.records.clone();
        records.sort_by(|a, b| compare_records(a, b, &sort.field, sort.descending));
        records
    });

    let set_params = Callback::new(move |new_params: FilterParams| {
        navigator().push(Route::keywords_page_with_filters(
            *domain_id.peek(),
            &new_params,
        ));
    });

    let mut current_page = use_signal(|| 0_u64);
    // changing any filter resets pagination
    use_effect(move || {
        let _ = params.read();
        current_page.set(0);
    });
    let set_current_page = Callback::new(move |page: u64| {
        current_page.set(page);
    });

    use_context_provider(move || KeywordTableState {
        domain_id,
        params,
        outcome,
        sorted_keywords,
        current_page: current_page.into(),
        set_current_page,
        set_params,
    });

    rsx! {
        div {
            id: "x-keywords-page-root",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 100%;
                height: 100%;
                padding: 24px 28px;
                overflow-y: auto;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 14px;
                ",
                h1 {
                    style: "font-size: 24px; font-weight: 500;",
                    "Keywords"
                }
                // empty space
                div { style: "flex-grow: 1;" }
                AddKeywordForm {}
            }

            FilterPanel {}

            SuspendWrapper {
                KeywordTable {}
            }
        }
    }
}
