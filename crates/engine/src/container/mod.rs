//! The container core
//!
//! [`Container`] composes an [`OrderedStore`] with the invariant validator,
//! the mutation protocol and the per-kind operation policy. Typed variants
//! (Map, Set, Tuple, AnyArray) are thin configurations of this type.
//!
//! ## Operation gate
//!
//! Every public operation passes the same gate before touching the store:
//!
//! 1. Read-only: a mutator on a read-only container raises `Error::Mutation`
//! 2. Policy: an operation the kind disallows raises `Error::Method`
//! 3. Key shape, null policy and item type, for operations that take them
//!
//! ## Sequential kinds
//!
//! Set and Tuple keys are renumbered to `0..n-1` after every mutation that
//! removes or reorders items.
//!
//! The implementation is split by concern:
//! - `mutate`: protocol-backed writes (set, pop, remove, fill, ...)
//! - `query`: lookups and derived reads (search, find, uniq, slice, ...)
//! - `transform`: whole-store rewrites (map, filter, merge, reverse)
//! - `sort`: value, key, natural and locale-aware sorting
//! - `random`: shuffle and sampling
//! - `aggregate`: arithmetic folds (calc, sum, averages)
//! - `extension`: per-instance operations registered with `prototype`
//! - `serialize`: array, object and JSON projections

mod aggregate;
mod extension;
mod mutate;
mod query;
mod random;
mod serialize;
mod sort;
mod transform;

pub use aggregate::{CalcResult, Operator};
pub use extension::Extension;
pub use random::Sample;
pub use sort::{compare_keys, natural_cmp, SortFlags};

use std::fmt;

use tracing::debug;
use typed_arrays_core::{
    CalcPolicy, ContainerConfig, ContainerOptions, Error, ItemType, Key, Kind, Pairs, Result,
    Value,
};
use typed_arrays_storage::{Iter, OrderedStore};

use crate::policy::{self, Operation};
use crate::validate::Validator;
use extension::Extensions;

/// A typed, ordered key-value container
#[derive(Clone)]
pub struct Container {
    pub(crate) kind: Kind,
    pub(crate) options: ContainerOptions,
    pub(crate) store: OrderedStore,
    pub(crate) extensions: Extensions,
}

impl Container {
    /// Create a container of `kind` with the kind's default options.
    ///
    /// Fails with a validation error if the items violate the kind's
    /// key shape or null policy.
    pub fn new<I>(kind: Kind, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        Self::with_options(kind, items, ContainerOptions::for_kind(kind))
    }

    /// Create a container with explicit options.
    ///
    /// Tuples are read-only whatever `options.read_only` says.
    pub fn with_options<I>(kind: Kind, items: I, mut options: ContainerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        if kind.is_always_read_only() {
            options.read_only = true;
        }
        let items: Pairs = items
            .into_iter()
            .map(|(k, v)| (canonical_key(kind, k), v))
            .collect();
        Validator::new(kind, &options).validate(&items)?;

        let store = OrderedStore::from_pairs(items);
        debug!(
            target: "typed_arrays::container",
            kind = %kind,
            size = store.len(),
            read_only = options.read_only,
            allow_nulls = options.allow_nulls,
            "Created container"
        );
        Ok(Self {
            kind,
            options,
            store,
            extensions: Extensions::default(),
        })
    }

    /// An empty container of `kind` with the kind's default options
    pub fn empty_of(kind: Kind) -> Self {
        Self {
            kind,
            options: ContainerOptions::for_kind(kind),
            store: OrderedStore::new(),
            extensions: Extensions::default(),
        }
    }

    /// Create a container from values keyed `0..n-1`
    pub fn from_values<I>(kind: Kind, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::new(kind, keyed(values))
    }

    /// Create a container from a parsed configuration
    pub fn from_config<I>(config: &ContainerConfig, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        Self::with_options(config.kind, items, config.options()?)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Container kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Container type name used in diagnostics (`Map`, `Set`, `Tuple`, `AnyArray`)
    pub fn name(&self) -> &'static str {
        self.kind.container_name()
    }

    /// Declared item type, if any
    pub fn item_type(&self) -> Option<&ItemType> {
        self.options.item_type.as_ref()
    }

    /// True if every mutation is rejected
    pub fn is_read_only(&self) -> bool {
        self.options.read_only
    }

    /// True if null values are accepted
    pub fn allows_nulls(&self) -> bool {
        self.options.allow_nulls
    }

    /// Non-numeric handling for `calc`
    pub fn calc_policy(&self) -> CalcPolicy {
        self.options.calc_policy
    }

    /// Locale configured for `sort_locale_default`
    pub fn default_locale(&self) -> Option<&str> {
        self.options.locale.as_deref()
    }

    /// Construction options
    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Operations this container's kind rejects
    pub fn disallowed(&self) -> Vec<Operation> {
        policy::disallowed(self.kind)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of items
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Number of items
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// True if the container holds no items
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Value stored under `key`, without key-shape checks
    pub fn item(&self, key: impl Into<Key>) -> Option<&Value> {
        self.store.get(&self.canonical(key.into()))
    }

    /// All items in order
    pub fn items(&self) -> Pairs {
        self.store.to_pairs()
    }

    /// All items as two-element `[key, value]` arrays
    pub fn items_pairs(&self) -> Vec<Value> {
        self.store
            .iter()
            .map(|(k, v)| Value::Array(vec![Value::from(k.clone()), v.clone()]))
            .collect()
    }

    /// Deep copy; mutating the copy never affects `self`
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy of the items
    pub fn copy_array(&self) -> Pairs {
        self.store.to_pairs()
    }

    /// Keys in order
    pub fn keys(&self) -> Vec<Key> {
        self.store.keys().cloned().collect()
    }

    /// Values in order
    pub fn values(&self) -> Vec<Value> {
        self.store.values().cloned().collect()
    }

    /// First value by position
    pub fn first(&self) -> Option<&Value> {
        self.store.first().map(|(_, v)| v)
    }

    /// First key by position
    pub fn first_key(&self) -> Option<&Key> {
        self.store.first().map(|(k, _)| k)
    }

    /// Last value by position
    pub fn last(&self) -> Option<&Value> {
        self.store.last().map(|(_, v)| v)
    }

    /// Last key by position
    pub fn last_key(&self) -> Option<&Key> {
        self.store.last().map(|(k, _)| k)
    }

    /// Forward traversal over the current state
    pub fn iter(&self) -> Iter<'_> {
        self.store.iter()
    }

    /// Reverse traversal over the current state
    pub fn iter_rev(&self) -> Iter<'_> {
        self.store.iter_rev()
    }

    /// Traversal in either direction
    pub fn generate(&self, reverse: bool) -> Iter<'_> {
        self.store.iterate(reverse)
    }

    /// Backing store
    pub fn store(&self) -> &OrderedStore {
        &self.store
    }

    // ========================================================================
    // Internals shared by the operation modules
    // ========================================================================

    pub(crate) fn validator(&self) -> Validator<'_> {
        Validator::new(self.kind, &self.options)
    }

    /// Read-only check, then the kind policy
    pub(crate) fn gate(&self, op: Operation) -> Result<()> {
        if op.is_mutator() && self.options.read_only {
            return Err(Error::mutation(self.name(), op.as_str()));
        }
        if policy::is_disallowed(self.kind, op) {
            return Err(Error::method_not_allowed(self.name(), op.as_str()));
        }
        Ok(())
    }

    /// Restore the dense key sequence of Set/Tuple containers
    pub(crate) fn normalize(&mut self) {
        if self.kind.is_set_like() && !self.store.is_sequential() {
            self.store.renumber();
        }
    }

    /// AnyArray string keys spelling a canonical integer name the
    /// integer key
    pub(crate) fn canonical(&self, key: Key) -> Key {
        canonical_key(self.kind, key)
    }

    /// Swap in a new item sequence, then normalize
    pub(crate) fn commit(&mut self, pairs: Pairs) {
        let kind = self.kind;
        self.store
            .replace_all(pairs.into_iter().map(|(k, v)| (canonical_key(kind, k), v)));
        self.normalize();
    }

    /// Validate then commit a replacement item sequence
    pub(crate) fn replace_validated(&mut self, pairs: Pairs) -> Result<()> {
        self.validator().validate_replacement(&pairs)?;
        self.commit(pairs);
        Ok(())
    }

    /// Re-key reordered items: Map keeps its keys, other kinds keep them
    /// only when asked to
    pub(crate) fn rekey(&self, pairs: Pairs, preserve_keys: bool) -> Pairs {
        if preserve_keys || self.kind.is_map_like() {
            pairs
        } else {
            renumber(pairs)
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut extensions: Vec<_> = self.extensions.keys().collect();
        extensions.sort();
        f.debug_struct("Container")
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("store", &self.store)
            .field("extensions", &extensions)
            .finish()
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.options == other.options && self.store == other.store
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn canonical_key(kind: Kind, key: Key) -> Key {
    match key {
        Key::Str(s) if kind == Kind::Any => Key::parse(&s),
        key => key,
    }
}

/// Key values as `0..n-1`
pub fn keyed<I>(values: I) -> Pairs
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (Key::from(i), v))
        .collect()
}

/// Discard keys, renumbering `0..n-1`
pub fn renumber(pairs: Pairs) -> Pairs {
    keyed(pairs.into_iter().map(|(_, v)| v))
}

/// Renumber integer keys in order while keeping string keys; a repeated
/// string key keeps its first position and its last value
pub fn merge_keys(pairs: Pairs) -> Pairs {
    let mut store = OrderedStore::with_capacity(pairs.len());
    for (key, value) in pairs {
        match key {
            Key::Int(_) => {
                store.push_value(value);
            }
            key => {
                store.set(key, value);
            }
        }
    }
    store.into_pairs()
}
