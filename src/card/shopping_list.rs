//! The shopping list card: host lifecycle, user input, refresh scheduling.
//!
//! The card owns the live tree and is its only writer. Remote calls are the
//! only suspension points; each one is awaited in place and its failure is
//! logged, never propagated into rendering. Timed work (the refresh debounce,
//! the sort poll, removal fallbacks) is driven by the host through
//! [`ShoppingListCard::next_deadline`] and [`ShoppingListCard::run_due`].

use std::collections::HashSet;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error, info, trace, warn};

use super::config::CardConfig;
use super::debounce::Debouncer;
use super::focus::{FocusGuard, RenderDecision};
use super::host::HostContext;
use super::orchestrator::{build_rows, RenderState};
use super::shell::{Shell, AUTO_SORT_OFF_TITLE, AUTO_SORT_ON_TITLE};
use crate::categorize::Categorizer;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::error::{ConfigError, RemoteError};
use crate::event::action::{Action, Envelope};
use crate::event::handler::EventDispatcher;
use crate::event::input::Key;
use crate::model::category;
use crate::model::ListItem;
use crate::reconcile::{reconcile, LiveTree, ReconcileStats};
use crate::store::{HostServices, ListStore};
use crate::widgets::input::{AddItemInput, InputOutcome};

/// Interval between store polls while a sort runs.
pub const SORT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A sort stops polling after this long, categorized or not.
pub const SORT_TIMEOUT: Duration = Duration::from_secs(15);

/// Relative height reported to the host's layout.
pub const SIZE_HINT: u32 = 3;

/// A running sort: the host workflow was started and the store is being polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SortJob {
    started: Instant,
    next_poll: Instant,
    /// The list was seen empty (the host cleared it to re-add sorted items).
    saw_empty: bool,
    /// Items came back after being empty; one more poll, then stop.
    settling: bool,
}

// ---------------------------------------------------------------------------
// ShoppingListCard
// ---------------------------------------------------------------------------

pub struct ShoppingListCard {
    store: Box<dyn ListStore>,
    categorizer: Box<dyn Categorizer>,
    services: Box<dyn HostServices>,

    config: Option<CardConfig>,
    tree: LiveTree,
    shell: Option<Shell>,
    dispatcher: EventDispatcher,
    input: AddItemInput,
    guard: FocusGuard,
    debounce: Debouncer,

    items: Vec<ListItem>,
    completed_collapsed: bool,
    pending: HashSet<String>,

    host: Option<HostContext>,
    initial_fetch_done: bool,
    last_list_change: Option<String>,
    auto_sort_state: Option<String>,

    attached: bool,
    sort: Option<SortJob>,
    categorizing: bool,
    render_count: usize,
    last_stats: ReconcileStats,
}

impl ShoppingListCard {
    pub fn new(
        store: Box<dyn ListStore>,
        categorizer: Box<dyn Categorizer>,
        services: Box<dyn HostServices>,
    ) -> Self {
        Self {
            store,
            categorizer,
            services,
            config: None,
            tree: LiveTree::new(),
            shell: None,
            dispatcher: EventDispatcher::new(),
            input: AddItemInput::new(),
            guard: FocusGuard::new(),
            debounce: Debouncer::default(),
            items: Vec::new(),
            completed_collapsed: true,
            pending: HashSet::new(),
            host: None,
            initial_fetch_done: false,
            last_list_change: None,
            auto_sort_state: None,
            attached: false,
            sort: None,
            categorizing: false,
            render_count: 0,
            last_stats: ReconcileStats::default(),
        }
    }

    /// Example configuration offered by the host's card picker.
    pub fn stub_config() -> serde_json::Value {
        serde_json::json!({
            "entity": "todo.shopping_list",
            "title": "Shopping List",
        })
    }

    /// Relative height hint for the host's layout.
    pub fn size_hint(&self) -> u32 {
        SIZE_HINT
    }

    // ── Host lifecycle ───────────────────────────────────────────────

    /// Apply a configuration object from the host.
    ///
    /// Rebuilds the shell and forces a fresh fetch on the next host context.
    pub fn set_configuration(&mut self, value: serde_json::Value) -> Result<(), ConfigError> {
        let config = CardConfig::from_value(value)?;
        self.configure(config)
    }

    /// Apply an already decoded configuration.
    pub fn configure(&mut self, config: CardConfig) -> Result<(), ConfigError> {
        let config = config.validate()?;

        self.tree = LiveTree::new();
        self.shell = Some(Shell::build(&mut self.tree, &config));
        self.input.clear();
        self.guard = FocusGuard::new();
        self.sort = None;
        self.initial_fetch_done = false;
        self.auto_sort_state = None;
        info!(entity = %config.entity, title = %config.title, "card configured");
        self.config = Some(config);
        self.sync_auto_sort_button();
        Ok(())
    }

    /// Receive a new host snapshot.
    ///
    /// The first snapshot after configuration fetches immediately. Later ones
    /// schedule a debounced refresh when the list entity's change marker moved.
    pub async fn set_host_context(&mut self, context: HostContext) {
        let Some(entity) = self.entity() else {
            self.host = Some(context);
            return;
        };
        let marker = context.last_changed(&entity).map(str::to_owned);
        self.host = Some(context);
        self.sync_auto_sort_button();

        if !self.initial_fetch_done {
            self.initial_fetch_done = true;
            self.last_list_change = marker;
            self.refresh().await;
            return;
        }

        if marker != self.last_list_change {
            debug!(entity = %entity, "list changed on host");
            self.last_list_change = marker;
            self.schedule_refresh();
        }
    }

    pub fn on_attach(&mut self) {
        self.attached = true;
    }

    /// The card left the page: no timed work may fire afterwards.
    pub fn on_detach(&mut self) {
        self.attached = false;
        self.debounce.cancel();
        if self.sort.is_some() {
            self.finish_sort("detached");
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    pub fn tree(&self) -> &LiveTree {
        &self.tree
    }

    pub fn dom(&self) -> &Dom {
        self.tree.dom()
    }

    pub fn shell(&self) -> Option<&Shell> {
        self.shell.as_ref()
    }

    /// The container rows are reconciled into.
    pub fn items_container(&self) -> Option<NodeId> {
        self.shell.map(|shell| shell.items)
    }

    /// The add-item text field node.
    pub fn input_node(&self) -> Option<NodeId> {
        self.shell.map(|shell| shell.input)
    }

    /// Items from the last successful fetch.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_input_focused(&self) -> bool {
        self.guard.is_focused()
    }

    pub fn is_sorting(&self) -> bool {
        self.sort.is_some()
    }

    pub fn is_completed_collapsed(&self) -> bool {
        self.completed_collapsed
    }

    /// Number of renders applied to the items container.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Stats of the most recent applied render.
    pub fn last_stats(&self) -> ReconcileStats {
        self.last_stats
    }

    /// Whether a refresh is waiting for its quiet interval.
    pub fn refresh_scheduled(&self) -> bool {
        self.debounce.is_armed()
    }

    // ── User input ───────────────────────────────────────────────────

    /// Deliver a click on `node` and run the resulting action.
    pub async fn click(&mut self, node: NodeId) {
        match self.tree.resolve_click(node) {
            Some(envelope) => self.dispatcher.push(envelope),
            None => {
                debug!(?node, "click without handler");
                return;
            }
        }
        for envelope in self.dispatcher.drain() {
            self.handle(envelope).await;
        }
        self.drain_lifecycle();
    }

    pub fn focus_input(&mut self) {
        self.guard.on_focus();
    }

    /// The text field lost focus. Runs the render deferred meanwhile, if any.
    pub fn blur_input(&mut self) {
        if self.guard.on_blur() {
            debug!("flushing render deferred during input focus");
            self.render_now();
        }
    }

    /// Deliver a key press to the text field.
    pub async fn press_key(&mut self, key: Key) {
        let outcome = self.input.handle_key(key);
        self.sync_input_node();
        match outcome {
            InputOutcome::Submit(text) => self.add_item(text).await,
            InputOutcome::Cancel => self.blur_input(),
            InputOutcome::Edited | InputOutcome::Ignored => {}
        }
    }

    /// Type `text` into the field, one character at a time.
    pub async fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch)).await;
        }
    }

    /// A removal transition on `node` finished.
    pub fn animation_end(&mut self, node: NodeId) -> bool {
        let detached = self.tree.animation_end(node);
        self.drain_lifecycle();
        detached
    }

    // ── Timed work ───────────────────────────────────────────────────

    /// The earliest instant at which [`run_due`](Self::run_due) has work.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.debounce.deadline(),
            self.sort.map(|job| job.next_poll),
            self.tree.next_removal_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Run everything whose deadline has passed.
    pub async fn run_due(&mut self) {
        let now = Instant::now();
        let swept = self.tree.sweep_removals(now);
        if swept > 0 {
            debug!(swept, "removal fallback detached rows");
            self.drain_lifecycle();
        }
        if self.debounce.take_due(now) {
            self.refresh().await;
        }
        if self.sort.is_some_and(|job| job.next_poll <= now) {
            self.poll_sort(now).await;
        }
    }

    /// Sleep until each pending deadline and run it, until nothing is left.
    pub async fn settle(&mut self) {
        while let Some(deadline) = self.next_deadline() {
            tokio::time::sleep_until(deadline).await;
            self.run_due().await;
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn request_render(&mut self) {
        match self.guard.request() {
            RenderDecision::Apply => self.render_now(),
            RenderDecision::Defer => debug!("render deferred while input focused"),
        }
    }

    fn render_now(&mut self) {
        let (Some(shell), Some(config)) = (self.shell, self.config.as_ref()) else {
            return;
        };
        let state = RenderState {
            completed_collapsed: self.completed_collapsed,
            category_order: config.effective_category_order(),
            pending: self.pending.clone(),
        };
        let rows = build_rows(&self.items, &state);

        let active = self.items.iter().filter(|item| !item.is_completed()).count();
        if let Some(badge) = self.tree.dom_mut().get_mut(shell.count_badge) {
            badge.set_text(&active.to_string());
        }

        self.last_stats = reconcile(&mut self.tree, shell.items, &rows);
        self.render_count += 1;
        self.drain_lifecycle();
    }

    /// Hand row lifecycle events to the trace log so the queue never outlives a pass.
    fn drain_lifecycle(&mut self) {
        for event in self.tree.lifecycle_mut().pending_events() {
            trace!(?event, "row lifecycle");
        }
    }

    fn sync_input_node(&mut self) {
        let Some(shell) = self.shell else {
            return;
        };
        let value = self.input.value().to_owned();
        if let Some(data) = self.tree.dom_mut().get_mut(shell.input) {
            data.set_text(&value);
        }
    }

    fn sync_auto_sort_button(&mut self) {
        let Some(button) = self.shell.and_then(|shell| shell.auto_sort_button) else {
            return;
        };
        let state = self
            .config
            .as_ref()
            .and_then(|config| config.auto_sort_entity.as_deref())
            .and_then(|entity| self.host.as_ref()?.entity(entity))
            .map(|entity| entity.state.clone());
        if state.is_none() || state == self.auto_sort_state {
            return;
        }
        let on = state.as_deref() == Some("on");
        self.auto_sort_state = state;
        if let Some(data) = self.tree.dom_mut().get_mut(button) {
            data.set_class("active", on);
            data.title = Some(if on { AUTO_SORT_ON_TITLE } else { AUTO_SORT_OFF_TITLE }.to_owned());
        }
    }

    fn set_shell_class(&mut self, node: Option<NodeId>, class: &str, on: bool) {
        let Some(node) = node else {
            return;
        };
        if let Some(data) = self.tree.dom_mut().get_mut(node) {
            data.set_class(class, on);
        }
    }

    // ── Refresh ──────────────────────────────────────────────────────

    fn entity(&self) -> Option<String> {
        self.config.as_ref().map(|config| config.entity.clone())
    }

    fn schedule_refresh(&mut self) {
        if !self.attached {
            debug!("refresh skipped while detached");
            return;
        }
        self.debounce.trigger(Instant::now());
    }

    /// Fetch the list and render it. Returns `false` if the fetch failed.
    async fn refresh(&mut self) -> bool {
        let Some(list) = self.entity() else {
            return false;
        };
        match self.store.fetch_all(&list).await {
            Ok(items) => {
                debug!(list = %list, count = items.len(), "fetched items");
                self.items = items;
                self.request_render();
                true
            }
            Err(err) => {
                error!(list = %list, error = %err, "failed to fetch items");
                false
            }
        }
    }

    /// Log a failed mutation, or schedule a refresh after a successful one.
    fn after_mutation(&mut self, result: Result<(), RemoteError>, what: &str) {
        match result {
            Ok(()) => self.schedule_refresh(),
            Err(err) => error!(operation = what, error = %err, "list update failed"),
        }
    }

    // ── Actions ──────────────────────────────────────────────────────

    async fn handle(&mut self, envelope: Envelope) {
        let Some(list) = self.entity() else {
            return;
        };
        debug!(action = %envelope.action, bubbled = envelope.bubbled(), "handling action");

        match envelope.action {
            Action::ToggleItem { row } => {
                let Some(record) = self.tree.record(row).cloned() else {
                    debug!(?row, "toggle on a row that is gone");
                    return;
                };
                let result = self
                    .store
                    .set_completion(&list, &record.uid, record.completion.toggled())
                    .await;
                self.after_mutation(result, "toggle item");
            }
            Action::RemoveItem { row } => {
                let Some(record) = self.tree.record(row).cloned() else {
                    debug!(?row, "remove on a row that is gone");
                    return;
                };
                let result = self.store.remove(&list, &[record.uid]).await;
                self.after_mutation(result, "remove item");
            }
            Action::ToggleCompletedSection => {
                self.completed_collapsed = !self.completed_collapsed;
                self.request_render();
            }
            Action::ClearCompleted => {
                let uids: Vec<String> = self
                    .items
                    .iter()
                    .filter(|item| item.is_completed())
                    .map(|item| item.uid.clone())
                    .collect();
                if uids.is_empty() {
                    return;
                }
                let result = self.store.remove(&list, &uids).await;
                self.after_mutation(result, "clear completed");
            }
            Action::CategorizeUncategorized { button } => {
                self.categorize_uncategorized(&list, button).await;
            }
            Action::TriggerSort => self.start_sort().await,
            Action::ToggleAutoSort => {
                let Some(entity) = self
                    .config
                    .as_ref()
                    .and_then(|config| config.auto_sort_entity.clone())
                else {
                    return;
                };
                if let Err(err) = self.services.toggle_boolean(&entity).await {
                    error!(entity = %entity, error = %err, "toggle auto-sort failed");
                }
            }
        }
    }

    async fn add_item(&mut self, text: String) {
        let Some(list) = self.entity() else {
            return;
        };
        if let Err(err) = self.store.add(&list, &text).await {
            error!(list = %list, error = %err, "failed to add item");
            return;
        }
        self.schedule_refresh();

        if category::parse(&text).category.is_none() && self.auto_sort_on() {
            self.categorize_in_background(&list, text).await;
        }
    }

    fn auto_sort_on(&self) -> bool {
        let entity = self
            .config
            .as_ref()
            .and_then(|config| config.auto_sort_entity.as_deref());
        match (entity, self.host.as_ref()) {
            (Some(entity), Some(host)) => host.is_on(entity),
            _ => false,
        }
    }

    // ── Categorization ───────────────────────────────────────────────

    /// Categorize one freshly added item: locally if possible, else remotely.
    async fn categorize_in_background(&mut self, list: &str, text: String) {
        if self.categorizing {
            debug!(text = %text, "categorization already running");
            return;
        }
        self.categorizing = true;

        let suggestion = match self.categorizer.suggest(&text) {
            Some(category) => Some(category),
            None => {
                let add_row = self.shell.map(|shell| shell.add_row);
                self.set_shell_class(add_row, "categorizing", true);
                let order = self.category_order();
                let result = self
                    .categorizer
                    .suggest_batch(std::slice::from_ref(&text), &order)
                    .await;
                self.set_shell_class(add_row, "categorizing", false);
                match result {
                    Ok(suggestions) => suggestions.into_iter().next().flatten(),
                    Err(err) => {
                        warn!(text = %text, error = %err, "categorizer failed, item stays uncategorized");
                        None
                    }
                }
            }
        };

        if let Some(category) = suggestion.as_deref().and_then(category::normalize_label) {
            self.apply_category(list, &text, &category).await;
        }
        self.categorizing = false;
    }

    /// Rename the active item whose text is `text` to `[category] Text`.
    async fn apply_category(&mut self, list: &str, text: &str, category: &str) {
        if !self.refresh().await {
            return;
        }
        let wanted = text.to_lowercase();
        let Some(uid) = self
            .items
            .iter()
            .find(|item| !item.is_completed() && item.text.to_lowercase() == wanted)
            .map(|item| item.uid.clone())
        else {
            debug!(text = %text, "added item not found for categorization");
            return;
        };

        let renamed = category::format(category, &category::capitalize_first(text));
        self.pending.insert(uid.clone());
        self.request_render();
        let result = self.store.rename(list, &uid, &renamed).await;
        self.pending.remove(&uid);
        if result.is_err() {
            self.request_render();
        }
        self.after_mutation(result, "categorize item");
    }

    /// Categorize every uncategorized active item.
    async fn categorize_uncategorized(&mut self, list: &str, button: NodeId) {
        if self
            .tree
            .dom()
            .get(button)
            .is_some_and(|data| data.has_class("working"))
        {
            debug!("bulk categorization already running");
            return;
        }

        let targets: Vec<(String, String)> = self
            .items
            .iter()
            .filter(|item| !item.is_completed() && item.parsed().category.is_none())
            .map(|item| (item.uid.clone(), item.text.clone()))
            .collect();
        if targets.is_empty() {
            return;
        }

        self.set_shell_class(Some(button), "working", true);
        self.pending.extend(targets.iter().map(|(uid, _)| uid.clone()));
        self.request_render();

        let order = self.category_order();
        match self.rename_all(list, &targets, &order).await {
            Ok(renamed) => {
                info!(renamed, total = targets.len(), "bulk categorization finished");
                self.schedule_refresh();
            }
            Err(err) => error!(list = %list, error = %err, "bulk categorization failed"),
        }

        for (uid, _) in &targets {
            self.pending.remove(uid);
        }
        self.set_shell_class(Some(button), "working", false);
        self.request_render();
    }

    /// Local suggestions first, then one batch call for the rest.
    async fn rename_all(
        &self,
        list: &str,
        targets: &[(String, String)],
        order: &[String],
    ) -> Result<usize, RemoteError> {
        let mut renamed = 0;
        let mut remote = Vec::new();

        for (uid, text) in targets {
            match self.categorizer.suggest(text).as_deref().and_then(category::normalize_label) {
                Some(category) => {
                    let new_text = category::format(&category, &category::capitalize_first(text));
                    self.store.rename(list, uid, &new_text).await?;
                    renamed += 1;
                }
                None => remote.push((uid, text)),
            }
        }
        if remote.is_empty() {
            return Ok(renamed);
        }

        let texts: Vec<String> = remote.iter().map(|(_, text)| (*text).clone()).collect();
        let suggestions = self.categorizer.suggest_batch(&texts, order).await?;
        if suggestions.len() > texts.len() {
            warn!(answers = suggestions.len(), items = texts.len(), "ignoring extra batch answers");
        }
        for ((uid, text), suggestion) in remote.into_iter().zip(suggestions) {
            let Some(category) = suggestion.as_deref().and_then(category::normalize_label) else {
                continue;
            };
            let new_text = category::format(&category, &category::capitalize_first(text));
            self.store.rename(list, uid, &new_text).await?;
            renamed += 1;
        }
        Ok(renamed)
    }

    fn category_order(&self) -> Vec<String> {
        self.config
            .as_ref()
            .map(CardConfig::effective_category_order)
            .unwrap_or_else(category::default_order)
    }

    // ── Sort workflow ────────────────────────────────────────────────

    async fn start_sort(&mut self) {
        if self.sort.is_some() {
            debug!("sort already running");
            return;
        }
        let Some(entity) = self
            .config
            .as_ref()
            .and_then(|config| config.sort_button_entity.clone())
        else {
            return;
        };

        let sort_button = self.shell.and_then(|shell| shell.sort_button);
        self.set_shell_class(sort_button, "sorting", true);
        if let Err(err) = self.services.press_button(&entity).await {
            error!(entity = %entity, error = %err, "sort failed to start");
            self.set_shell_class(sort_button, "sorting", false);
            return;
        }

        let now = Instant::now();
        info!(entity = %entity, "sort started");
        self.sort = Some(SortJob {
            started: now,
            next_poll: now + SORT_POLL_INTERVAL,
            saw_empty: false,
            settling: false,
        });
    }

    async fn poll_sort(&mut self, now: Instant) {
        let Some(mut job) = self.sort else {
            return;
        };
        let fetched = self.refresh().await;

        if fetched {
            if job.settling {
                self.finish_sort("settled");
                return;
            }
            let active: Vec<&ListItem> =
                self.items.iter().filter(|item| !item.is_completed()).collect();
            if active.is_empty() {
                job.saw_empty = true;
            } else if job.saw_empty {
                job.settling = true;
            } else if active.iter().all(|item| item.parsed().category.is_some()) {
                self.finish_sort("categorized");
                return;
            }
        }

        if now.duration_since(job.started) >= SORT_TIMEOUT {
            warn!("sort timed out waiting for categorized items");
            self.finish_sort("timed out");
            return;
        }
        job.next_poll = now + SORT_POLL_INTERVAL;
        self.sort = Some(job);
    }

    fn finish_sort(&mut self, reason: &str) {
        self.sort = None;
        let sort_button = self.shell.and_then(|shell| shell.sort_button);
        self.set_shell_class(sort_button, "sorting", false);
        info!(reason, "sort finished");
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{host_context, MemoryStore, RecordingServices, ScriptedCategorizer};

    fn card(items: Vec<ListItem>) -> (ShoppingListCard, MemoryStore) {
        let store = MemoryStore::new().with_items(items);
        let mut card = ShoppingListCard::new(
            Box::new(store.clone()),
            Box::new(ScriptedCategorizer::new()),
            Box::new(RecordingServices::new()),
        );
        card.configure(CardConfig::new("todo.shopping_list")).unwrap();
        card.on_attach();
        (card, store)
    }

    #[test]
    fn stub_config_is_valid() {
        let config = CardConfig::from_value(ShoppingListCard::stub_config()).unwrap();
        assert_eq!(config.entity, "todo.shopping_list");
    }

    #[test]
    fn idle_card_has_no_deadline() {
        let (card, _) = card(vec![]);
        assert!(card.next_deadline().is_none());
        assert_eq!(card.render_count(), 0);
        assert!(card.items_container().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn next_deadline_is_the_debounce() {
        let (mut card, _) = card(vec![]);
        card.set_host_context(host_context("t1", false)).await;
        let now = Instant::now();
        card.set_host_context(host_context("t2", false)).await;
        assert_eq!(card.next_deadline(), Some(now + crate::card::REFRESH_DEBOUNCE));
    }

    #[tokio::test(start_paused = true)]
    async fn detach_ends_running_sort() {
        let (mut card, _) = card(vec![ListItem::new("1", "Milk")]);
        card.set_host_context(host_context("t1", false)).await;
        let button = card.shell().and_then(|shell| shell.sort_button).unwrap();
        card.click(button).await;
        assert!(card.is_sorting());

        card.on_detach();
        assert!(!card.is_sorting());
        assert!(card.next_deadline().is_none());
        assert!(!card.dom().get(button).unwrap().has_class("sorting"));
    }

    #[tokio::test(start_paused = true)]
    async fn reconfigure_refetches() {
        let (mut card, store) = card(vec![]);
        card.set_host_context(host_context("t1", false)).await;
        card.configure(CardConfig::new("todo.shopping_list").with_title("Groceries"))
            .unwrap();
        card.set_host_context(host_context("t1", false)).await;
        assert_eq!(store.fetch_count(), 2);
        assert_eq!(card.render_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn lifecycle_queue_is_drained_every_render() {
        let (mut card, store) = card(vec![
            ListItem::new("1", "[DAIRY] Milk"),
            ListItem::new("2", "Bread"),
        ]);
        card.set_host_context(host_context("t0", false)).await;
        for n in 1..=50 {
            if n % 2 == 0 {
                store.set_items(vec![ListItem::new("2", "Bread"), ListItem::new("3", "Eggs")]);
            } else {
                store.set_items(vec![ListItem::new("1", "[DAIRY] Milk"), ListItem::new("2", "Bread")]);
            }
            card.set_host_context(host_context(&format!("t{n}"), false)).await;
            card.settle().await;
            assert!(!card.tree().lifecycle().has_pending());
        }
        assert_eq!(card.render_count(), 51);
    }

    #[tokio::test(start_paused = true)]
    async fn detached_card_does_not_schedule_refresh() {
        let (mut card, store) = card(vec![]);
        card.set_host_context(host_context("t1", false)).await;
        card.on_detach();
        card.set_host_context(host_context("t2", false)).await;
        assert!(!card.refresh_scheduled());
        assert!(card.next_deadline().is_none());

        card.on_attach();
        card.set_host_context(host_context("t3", false)).await;
        assert!(card.refresh_scheduled());
        card.settle().await;
        assert_eq!(store.fetch_count(), 2);
    }
}
