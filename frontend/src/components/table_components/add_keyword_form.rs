//! Form for tracking new keywords on the open domain.
//!
//! Created records come back from the server and are published on the
//! live-update channel, so the table picks them up without a refetch.

use dioxus::prelude::*;

use crate::api::rank_api::create_keywords;
use crate::data_definitions::live_updates::use_keyword_live_updates;
use crate::pages::keywords_page::KeywordTableState;

#[component]
pub fn AddKeywordForm() -> Element {
    let state = use_context::<KeywordTableState>();
    let live_updates = use_keyword_live_updates();
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mut submit = move |_: ()| {
        let titles: Vec<String> = draft
            .peek()
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if titles.is_empty() || *busy.peek() {
            return;
        }
        let domain_id = *state.domain_id.peek();
        busy.set(true);
        spawn(async move {
            match create_keywords(domain_id, titles).await {
                Ok(batch) => {
                    draft.set(String::new());
                    live_updates.publish(batch);
                }
                Err(e) => {
                    dioxus::logger::tracing::warn!("keyword create failed: {e}");
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
            ",
            input {
                r#type: "text",
                placeholder: "Track new keywords (comma-separated)",
                style: "
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    padding: 6px 10px;
                    font-size: 13px;
                    width: 260px;
                ",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        submit(());
                    }
                },
            }
            button {
                disabled: *busy.read(),
                style: "
                    border: none;
                    border-radius: 6px;
                    background: #4F46E5;
                    color: white;
                    padding: 6px 12px;
                    font-size: 13px;
                    cursor: pointer;
                ",
                onclick: move |_| submit(()),
                if *busy.read() { "Adding..." } else { "Add" }
            }
        }
    }
}
