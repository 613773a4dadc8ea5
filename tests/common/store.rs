//! Scripted in-memory store
//!
//! Replies are queued per tracked item; an item with an empty queue succeeds.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tracker_gateway::storage::ParamValue;
use tracker_gateway::{Principal, ProcedureOutput, ProcedureParams, StoreError, StoreGateway};

pub type Reply = Result<ProcedureOutput, StoreError>;

/// One recorded `execute_procedure` call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub procedure: String,
    pub payload: Value,
    pub at: tokio::time::Instant,
}

#[derive(Default)]
pub struct ScriptedStore {
    replies: Mutex<HashMap<i64, VecDeque<Reply>>>,
    principals: Mutex<HashMap<String, Principal>>,
    calls: Mutex<Vec<RecordedCall>>,
    lookups: Mutex<Vec<String>>,
    ping: Mutex<Option<StoreError>>,
}

impl ScriptedStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_principal(self: Arc<Self>, subject: &str, principal: Principal) -> Arc<Self> {
        self.principals
            .lock()
            .unwrap()
            .insert(subject.to_string(), principal);
        self
    }

    /// Queue replies for `item_id`
    pub fn script(self: Arc<Self>, item_id: i64, replies: Vec<Reply>) -> Arc<Self> {
        self.replies
            .lock()
            .unwrap()
            .entry(item_id)
            .or_default()
            .extend(replies);
        self
    }

    pub fn failing_ping(self: Arc<Self>, error: StoreError) -> Arc<Self> {
        *self.ping.lock().unwrap() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, item_id: i64) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.payload["item_id"].as_i64() == Some(item_id))
            .collect()
    }

    pub fn principal_lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreGateway for ScriptedStore {
    async fn execute_procedure(&self, name: &str, params: &ProcedureParams) -> Reply {
        let payload = params
            .iter()
            .find_map(|p| match &p.value {
                ParamValue::Json(value) => Some(value.clone()),
                _ => None,
            })
            .unwrap_or(Value::Null);
        let item_id = payload["item_id"].as_i64().unwrap_or_default();

        self.calls.lock().unwrap().push(RecordedCall {
            procedure: name.to_string(),
            payload,
            at: tokio::time::Instant::now(),
        });

        self.replies
            .lock()
            .unwrap()
            .get_mut(&item_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Ok(ProcedureOutput::from_document(
                    json!({ "SuccessMessage": "Step progress updated" }),
                ))
            })
    }

    async fn find_principal(&self, subject: &str) -> Result<Option<Principal>, StoreError> {
        self.lookups.lock().unwrap().push(subject.to_string());
        Ok(self.principals.lock().unwrap().get(subject).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match self.ping.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
