//! In-memory stand-ins for the card's remote collaborators.
//!
//! Each double is a cheap handle over shared state: clone it, hand one clone to
//! the card and keep the other to script responses and inspect calls.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::categorize::{lookup_category, Categorizer};
use crate::error::RemoteError;
use crate::model::{Completion, ListItem};
use crate::store::{HostServices, ListStore};

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// A call received by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Fetch,
    Add(String),
    SetCompletion(String, Completion),
    Remove(Vec<String>),
    Rename(String, String),
}

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<ListItem>,
    next_uid: usize,
    scripted: VecDeque<Vec<ListItem>>,
    failing: HashSet<&'static str>,
    calls: Vec<StoreCall>,
}

/// A list store backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` (builder).
    pub fn with_items(self, items: Vec<ListItem>) -> Self {
        self.set_items(items);
        self
    }

    pub fn items(&self) -> Vec<ListItem> {
        self.state.borrow().items.clone()
    }

    /// Replace the contents, as another client would.
    pub fn set_items(&self, items: Vec<ListItem>) {
        self.state.borrow_mut().items = items;
    }

    /// Queue contents that replace the list on each following fetch, one per fetch.
    pub fn script_fetches(&self, snapshots: impl IntoIterator<Item = Vec<ListItem>>) {
        self.state.borrow_mut().scripted.extend(snapshots);
    }

    /// Make every call of `operation` fail until [`heal`](Self::heal).
    ///
    /// Operation names: `fetch`, `add`, `set_completion`, `remove`, `rename`.
    pub fn fail(&self, operation: &'static str) {
        self.state.borrow_mut().failing.insert(operation);
    }

    pub fn heal(&self) {
        self.state.borrow_mut().failing.clear();
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.borrow().calls.clone()
    }

    /// Calls other than fetches.
    pub fn mutations(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|call| *call != StoreCall::Fetch)
            .collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| **call == StoreCall::Fetch)
            .count()
    }

    fn record(&self, operation: &'static str, call: StoreCall) -> Result<(), RemoteError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.failing.contains(operation) {
            return Err(RemoteError::transient(operation, "store unavailable"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ListStore for MemoryStore {
    async fn fetch_all(&self, _list: &str) -> Result<Vec<ListItem>, RemoteError> {
        self.record("fetch", StoreCall::Fetch)?;
        let mut state = self.state.borrow_mut();
        if let Some(next) = state.scripted.pop_front() {
            state.items = next;
        }
        Ok(state.items.clone())
    }

    async fn add(&self, _list: &str, text: &str) -> Result<(), RemoteError> {
        self.record("add", StoreCall::Add(text.to_owned()))?;
        let mut state = self.state.borrow_mut();
        state.next_uid += 1;
        let uid = format!("new-{}", state.next_uid);
        state.items.push(ListItem::new(uid, text));
        Ok(())
    }

    async fn set_completion(
        &self,
        _list: &str,
        uid: &str,
        completion: Completion,
    ) -> Result<(), RemoteError> {
        self.record(
            "set_completion",
            StoreCall::SetCompletion(uid.to_owned(), completion),
        )?;
        let mut state = self.state.borrow_mut();
        if let Some(item) = state.items.iter_mut().find(|item| item.uid == uid) {
            item.completion = completion;
        }
        Ok(())
    }

    async fn remove(&self, _list: &str, uids: &[String]) -> Result<(), RemoteError> {
        self.record("remove", StoreCall::Remove(uids.to_vec()))?;
        self.state
            .borrow_mut()
            .items
            .retain(|item| !uids.contains(&item.uid));
        Ok(())
    }

    async fn rename(&self, _list: &str, uid: &str, text: &str) -> Result<(), RemoteError> {
        self.record("rename", StoreCall::Rename(uid.to_owned(), text.to_owned()))?;
        let mut state = self.state.borrow_mut();
        if let Some(item) = state.items.iter_mut().find(|item| item.uid == uid) {
            item.text = text.to_owned();
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RecordingServices
// ---------------------------------------------------------------------------

/// A host service call received by [`RecordingServices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    PressButton(String),
    ToggleBoolean(String),
}

#[derive(Debug, Default)]
struct ServicesState {
    calls: Vec<ServiceCall>,
    failing: bool,
}

/// Host services that only record what they were asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingServices {
    state: Rc<RefCell<ServicesState>>,
}

impl RecordingServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.state.borrow().calls.clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.borrow_mut().failing = failing;
    }

    fn record(&self, operation: &'static str, call: ServiceCall) -> Result<(), RemoteError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.failing {
            return Err(RemoteError::transient(operation, "service unavailable"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl HostServices for RecordingServices {
    async fn press_button(&self, entity: &str) -> Result<(), RemoteError> {
        self.record("press_button", ServiceCall::PressButton(entity.to_owned()))
    }

    async fn toggle_boolean(&self, entity: &str) -> Result<(), RemoteError> {
        self.record("toggle_boolean", ServiceCall::ToggleBoolean(entity.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// ScriptedCategorizer
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct CategorizerState {
    remote: HashMap<String, String>,
    batches: Vec<Vec<String>>,
    trailing: Vec<String>,
    failing: bool,
}

/// The local dictionary plus a scripted remote service.
///
/// Remote answers are looked up by lowercase item text; unknown texts get no
/// suggestion. Every batch request is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCategorizer {
    state: Rc<RefCell<CategorizerState>>,
}

impl ScriptedCategorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `category` for `text` from the remote service (builder).
    pub fn with_remote(self, text: &str, category: &str) -> Self {
        self.state
            .borrow_mut()
            .remote
            .insert(text.to_lowercase(), category.to_owned());
        self
    }

    /// Append `category` after the real answers of every batch, as a chatty
    /// service would (builder).
    pub fn with_trailing_answer(self, category: &str) -> Self {
        self.state.borrow_mut().trailing.push(category.to_owned());
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.borrow_mut().failing = failing;
    }

    /// The texts of each batch request, in call order.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.state.borrow().batches.clone()
    }
}

#[async_trait(?Send)]
impl Categorizer for ScriptedCategorizer {
    fn suggest(&self, text: &str) -> Option<String> {
        lookup_category(text).map(str::to_owned)
    }

    async fn suggest_batch(
        &self,
        texts: &[String],
        _categories: &[String],
    ) -> Result<Vec<Option<String>>, RemoteError> {
        let mut state = self.state.borrow_mut();
        state.batches.push(texts.to_vec());
        if state.failing {
            return Err(RemoteError::transient("suggest_batch", "categorizer unavailable"));
        }
        Ok(texts
            .iter()
            .map(|text| state.remote.get(&text.to_lowercase()).cloned())
            .chain(state.trailing.iter().cloned().map(Some))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn memory_store_round() {
        let store = MemoryStore::new().with_items(vec![ListItem::new("a", "Milk")]);
        store.add("todo.x", "Eggs").await.unwrap();
        store
            .set_completion("todo.x", "a", Completion::Completed)
            .await
            .unwrap();
        store.rename("todo.x", "new-1", "[DAIRY] Eggs").await.unwrap();

        let items = store.fetch_all("todo.x").await.unwrap();
        assert_eq!(
            items,
            vec![
                ListItem::completed("a", "Milk"),
                ListItem::new("new-1", "[DAIRY] Eggs"),
            ]
        );

        store.remove("todo.x", &["a".to_owned()]).await.unwrap();
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failing_operation_is_still_recorded() {
        let store = MemoryStore::new();
        store.fail("add");
        let err = store.add("todo.x", "Milk").await.unwrap_err();
        assert_eq!(err.operation(), "add");
        assert_eq!(store.calls(), vec![StoreCall::Add("Milk".into())]);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn scripted_fetches_replace_contents_in_order() {
        let store = MemoryStore::new().with_items(vec![ListItem::new("a", "Milk")]);
        store.script_fetches([vec![], vec![ListItem::new("b", "[DAIRY] Milk")]]);
        assert!(store.fetch_all("todo.x").await.unwrap().is_empty());
        assert_eq!(store.fetch_all("todo.x").await.unwrap().len(), 1);
        assert_eq!(store.fetch_all("todo.x").await.unwrap()[0].uid, "b");
    }

    #[tokio::test]
    async fn scripted_categorizer_answers_by_text() {
        let categorizer = ScriptedCategorizer::new().with_remote("Saffron", "PANTRY");
        let out = categorizer
            .suggest_batch(&["saffron".into(), "unobtainium".into()], &[])
            .await
            .unwrap();
        assert_eq!(out, vec![Some("PANTRY".to_owned()), None]);
        assert_eq!(categorizer.batches().len(), 1);
        assert_eq!(categorizer.suggest("milk").as_deref(), Some("DAIRY"));
    }
}
