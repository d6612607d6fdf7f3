//! Fixtures shared by the client tests

use std::sync::Arc;

use meili_core::JsonCodec;
use meili_transport::MemoryTransport;
use serde_json::json;

use crate::Client;

pub(crate) fn memory_client() -> (Client, Arc<MemoryTransport>) {
    let transport = Arc::new(MemoryTransport::new());
    let client = Client::with_transport(transport.clone(), JsonCodec::default());
    (client, transport)
}

pub(crate) fn task_json(uid: u64, status: &str, task_type: &str) -> String {
    json!({
        "uid": uid,
        "indexUid": "books_test",
        "status": status,
        "type": task_type,
        "details": null,
        "enqueuedAt": "2022-07-21T08:59:56.347413Z"
    })
    .to_string()
}

pub(crate) fn task_info_json(uid: u64, index_uid: &str, task_type: &str) -> String {
    json!({
        "taskUid": uid,
        "indexUid": index_uid,
        "status": "enqueued",
        "type": task_type,
        "enqueuedAt": "2022-07-21T08:59:56.347413Z"
    })
    .to_string()
}
