//! In-page publish/subscribe channel for freshly created keywords.
//!
//! The add-keyword form publishes the records returned by the create call;
//! the open table subscribes and merges them without a refetch. Delivery is
//! idempotent on the consumer side (ids already in the table are ignored),
//! so repeated sends are harmless.

use dioxus::prelude::*;
use futures_util::StreamExt;

use common::keyword::KeywordRecord;


#[derive(Clone, Copy)]
pub struct KeywordLiveUpdates {
    channel: Coroutine<Vec<KeywordRecord>>,
}

impl KeywordLiveUpdates {
    pub fn publish(&self, batch: Vec<KeywordRecord>) {
        self.channel.send(batch);
    }
}

/// Install the channel in context. `on_batch` runs once per published batch.
pub fn use_keyword_live_channel(on_batch: Callback<Vec<KeywordRecord>>) -> KeywordLiveUpdates {
    let channel = use_coroutine(move |mut rx: UnboundedReceiver<Vec<KeywordRecord>>| async move {
        while let Some(batch) = rx.next().await {
            on_batch.call(batch);
        }
    });
    use_context_provider(move || KeywordLiveUpdates { channel })
}

pub fn use_keyword_live_updates() -> KeywordLiveUpdates {
    use_context()
}
