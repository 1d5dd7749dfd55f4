//! Row descriptors: the desired-state description of one rendered row.
//!
//! A descriptor is built fresh for every render pass and dropped once the
//! reconciler has consumed it. Its [`RowKey`] is what ties it to a live node
//! across passes, so the key is always derived inside the constructors here and
//! never spelled out by callers.

use std::fmt;

use crate::model::Completion;

/// Stable identity of a row within one container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(String);

impl RowKey {
    /// Key for an item row. Depends only on the uid, never on the category.
    pub fn item(uid: &str) -> Self {
        Self(format!("item:{uid}"))
    }

    pub fn category(label: &str) -> Self {
        Self(format!("cat:{label}"))
    }

    pub fn empty() -> Self {
        Self("empty".to_owned())
    }

    pub fn completed_header() -> Self {
        Self("completed-header".to_owned())
    }

    pub fn completed_section() -> Self {
        Self("completed-section".to_owned())
    }

    pub fn spacer() -> Self {
        Self("spacer".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload-free discriminant of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Empty,
    CategoryHeader,
    Item,
    CompletedHeader,
    CompletedSection,
    Spacer,
}

impl RowKind {
    /// Whether live nodes of this kind are patched in place on reuse.
    ///
    /// Static kinds are built once and left alone afterwards.
    pub fn is_patchable(self) -> bool {
        matches!(
            self,
            Self::Item | Self::CompletedHeader | Self::CompletedSection
        )
    }

    /// Whether removal goes through the fade-out transition.
    pub fn animates_removal(self) -> bool {
        self == Self::Item
    }
}

/// One item row's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub uid: String,
    /// Display name, category tag already stripped.
    pub name: String,
    pub completion: Completion,
    /// A background operation (e.g. categorization) is in flight for this item.
    pub pending: bool,
}

impl ItemRow {
    pub fn new(uid: impl Into<String>, name: impl Into<String>, completion: Completion) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            completion,
            pending: false,
        }
    }
}

/// A category group header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHeader {
    pub emoji: String,
    pub label: String,
    /// Show the "categorize these" action (only on the uncategorized group).
    pub offers_bulk_categorize: bool,
}

/// Kind-specific row content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Empty,
    CategoryHeader(CategoryHeader),
    Item(ItemRow),
    CompletedHeader { count: usize, collapsed: bool },
    CompletedSection { items: Vec<ItemRow>, collapsed: bool },
    Spacer,
}

impl Row {
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Empty => RowKind::Empty,
            Self::CategoryHeader(_) => RowKind::CategoryHeader,
            Self::Item(_) => RowKind::Item,
            Self::CompletedHeader { .. } => RowKind::CompletedHeader,
            Self::CompletedSection { .. } => RowKind::CompletedSection,
            Self::Spacer => RowKind::Spacer,
        }
    }
}

/// A keyed row: the unit of desired state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDescriptor {
    pub key: RowKey,
    pub row: Row,
}

impl RowDescriptor {
    pub fn empty() -> Self {
        Self {
            key: RowKey::empty(),
            row: Row::Empty,
        }
    }

    pub fn category(header: CategoryHeader) -> Self {
        Self {
            key: RowKey::category(&header.label),
            row: Row::CategoryHeader(header),
        }
    }

    pub fn item(item: ItemRow) -> Self {
        Self {
            key: RowKey::item(&item.uid),
            row: Row::Item(item),
        }
    }

    pub fn completed_header(count: usize, collapsed: bool) -> Self {
        Self {
            key: RowKey::completed_header(),
            row: Row::CompletedHeader { count, collapsed },
        }
    }

    pub fn completed_section(items: Vec<ItemRow>, collapsed: bool) -> Self {
        Self {
            key: RowKey::completed_section(),
            row: Row::CompletedSection { items, collapsed },
        }
    }

    pub fn spacer() -> Self {
        Self {
            key: RowKey::spacer(),
            row: Row::Spacer,
        }
    }

    pub fn kind(&self) -> RowKind {
        self.row.kind()
    }
}
