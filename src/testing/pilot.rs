//! Pilot: programmatic interaction with a headless card.
//!
//! The `Pilot` builds a [`ShoppingListCard`] wired to the in-memory doubles,
//! keeps handles on those doubles, and offers lookups by row key and control
//! class so tests read like user interaction.

use crate::card::{CardConfig, HostContext, ShoppingListCard};
use crate::dom::node::NodeId;
use crate::error::ConfigError;
use crate::event::input::Key;
use crate::model::ListItem;

use super::doubles::{MemoryStore, RecordingServices, ScriptedCategorizer};
use super::snapshot::render_to_string;

/// Entity id the pilot configures by default.
pub const LIST_ENTITY: &str = "todo.shopping_list";

/// A host snapshot with the list entity at change marker `marker` and the
/// auto-sort switch `on` or off.
pub fn host_context(marker: &str, auto_sort_on: bool) -> HostContext {
    HostContext::new()
        .with_entity(LIST_ENTITY, "0", marker)
        .with_entity(
            crate::card::config::DEFAULT_AUTO_SORT_ENTITY,
            if auto_sort_on { "on" } else { "off" },
            "t0",
        )
}

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless card driver for testing.
///
/// # Examples
///
/// ```ignore
/// use grouped_shopping_list::testing::{host_context, Pilot};
///
/// let mut pilot = Pilot::new(vec![ListItem::new("1", "[DAIRY] Milk")]);
/// pilot.connect(host_context("t1", false)).await;
/// assert_eq!(pilot.row_keys(), ["cat:DAIRY", "item:1", "spacer"]);
/// ```
pub struct Pilot {
    card: ShoppingListCard,
    pub store: MemoryStore,
    pub services: RecordingServices,
    pub categorizer: ScriptedCategorizer,
}

impl Pilot {
    /// A card with the default configuration over a store holding `items`.
    pub fn new(items: Vec<ListItem>) -> Self {
        Self::with_config(CardConfig::new(LIST_ENTITY), items)
    }

    /// A card with `config` over a store holding `items`.
    ///
    /// Falls back to the default configuration when `config` is invalid.
    pub fn with_config(config: CardConfig, items: Vec<ListItem>) -> Self {
        let mut pilot = Self::unconfigured(items);
        if pilot.configure(config).is_err() {
            let _ = pilot.configure(CardConfig::new(LIST_ENTITY));
        }
        pilot
    }

    /// A card that has not been configured yet.
    pub fn unconfigured(items: Vec<ListItem>) -> Self {
        let store = MemoryStore::new().with_items(items);
        let services = RecordingServices::new();
        let categorizer = ScriptedCategorizer::new();
        let card = ShoppingListCard::new(
            Box::new(store.clone()),
            Box::new(categorizer.clone()),
            Box::new(services.clone()),
        );
        Self {
            card,
            store,
            services,
            categorizer,
        }
    }

    /// Replace the remote categorizer script (builder).
    pub fn with_categorizer(mut self, categorizer: ScriptedCategorizer) -> Self {
        let store = self.store.clone();
        let services = self.services.clone();
        let config = self.card.config().cloned();
        self.card = ShoppingListCard::new(
            Box::new(store),
            Box::new(categorizer.clone()),
            Box::new(services),
        );
        if let Some(config) = config {
            let _ = self.card.configure(config);
        }
        self.categorizer = categorizer;
        self
    }

    pub fn configure(&mut self, config: CardConfig) -> Result<(), ConfigError> {
        self.card.configure(config)
    }

    /// Attach and deliver the first host snapshot.
    pub async fn connect(&mut self, context: HostContext) {
        self.card.on_attach();
        self.card.set_host_context(context).await;
    }

    // ── Access ───────────────────────────────────────────────────────

    pub fn card(&self) -> &ShoppingListCard {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut ShoppingListCard {
        &mut self.card
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Keys of the rows in the items container, in order.
    pub fn row_keys(&self) -> Vec<String> {
        self.card
            .items_container()
            .map(|container| self.card.dom().child_keys(container))
            .unwrap_or_default()
    }

    /// The row node with `key`.
    pub fn row(&self, key: &str) -> Option<NodeId> {
        let container = self.card.items_container()?;
        self.card.dom().child_by_key(container, key)
    }

    /// The first node with `class` inside the row with `key`.
    pub fn control(&self, key: &str, class: &str) -> Option<NodeId> {
        let row = self.row(key)?;
        self.card.dom().find_by_class(row, class)
    }

    /// The first node with `class` anywhere in the card.
    pub fn find(&self, class: &str) -> Option<NodeId> {
        self.card.dom().query_by_class(class).into_iter().next()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.card
            .dom()
            .get(node)
            .is_some_and(|data| data.has_class(class))
    }

    pub fn text(&self, node: NodeId) -> Option<String> {
        self.card.dom().get(node).and_then(|data| data.text.clone())
    }

    /// Text dump of the items container.
    pub fn snapshot(&self) -> String {
        self.card
            .items_container()
            .map(|container| render_to_string(self.card.dom(), container))
            .unwrap_or_default()
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Click `node`. Returns `false` if it no longer exists.
    pub async fn click(&mut self, node: NodeId) -> bool {
        if !self.card.dom().contains(node) {
            return false;
        }
        self.card.click(node).await;
        true
    }

    /// Click the control with `class` inside row `key`.
    pub async fn click_control(&mut self, key: &str, class: &str) -> bool {
        match self.control(key, class) {
            Some(node) => self.click(node).await,
            None => false,
        }
    }

    /// Focus the field, type `text` and press Enter.
    pub async fn add_item(&mut self, text: &str) {
        self.card.focus_input();
        self.card.type_text(text).await;
        self.card.press_key(Key::Enter).await;
    }

    pub async fn press_key(&mut self, key: Key) {
        self.card.press_key(key).await;
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Run all timed work to completion on the (paused) tokio clock.
    pub async fn settle(&mut self) {
        self.card.settle().await;
    }

    /// Advance the clock by `duration` and run whatever fell due.
    pub async fn advance(&mut self, duration: std::time::Duration) {
        tokio::time::advance(duration).await;
        self.card.run_due().await;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
