//! Operation vocabulary and per-kind policy
//!
//! Every public container operation has an [`Operation`] name. The name is
//! what read-only and not-allowed checks report, and what extension
//! registration collides against.

use std::fmt;

use typed_arrays_core::Kind;

macro_rules! operations {
    ($($variant:ident => $name:literal, $mutator:literal;)*) => {
        /// A named container operation
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $(
                #[doc = concat!("`", $name, "()`")]
                $variant,
            )*
        }

        impl Operation {
            /// Every built-in operation
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// Operation name as reported in errors
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// True if the operation writes to the store
            pub fn is_mutator(&self) -> bool {
                match self {
                    $(Operation::$variant => $mutator,)*
                }
            }
        }
    };
}

operations! {
    // Protocol commands
    Set => "set", true;
    Get => "get", false;
    Unset => "unset", true;
    Put => "put", true;
    Push => "push", true;
    Pull => "pull", true;
    Pop => "pop", true;
    Shift => "shift", true;
    Unpop => "unpop", true;
    Unshift => "unshift", true;

    // Derived mutators
    Add => "add", true;
    Append => "append", true;
    Prepend => "prepend", true;
    Remove => "remove", true;
    RemoveAt => "remove_at", true;
    RemoveAll => "remove_all", true;
    Replace => "replace", true;
    ReplaceAt => "replace_at", true;
    Pad => "pad", true;
    Fill => "fill", true;
    Flip => "flip", true;
    Reset => "reset", true;
    ResetItems => "reset_items", true;
    Empty => "empty", true;
    Map => "map", true;
    Filter => "filter", true;
    Merge => "merge", true;
    Reverse => "reverse", true;
    Shuffle => "shuffle", true;
    Sort => "sort", true;
    SortKey => "sort_key", true;
    SortNatural => "sort_natural", true;
    SortLocale => "sort_locale", true;

    // Lookups
    Item => "item", false;
    Items => "items", false;
    Search => "search", false;
    SearchLast => "search_last", false;
    IndexOf => "index_of", false;
    LastIndexOf => "last_index_of", false;
    Has => "has", false;
    HasKey => "has_key", false;
    Find => "find", false;
    FindKey => "find_key", false;
    FindIndex => "find_index", false;
    Keys => "keys", false;
    Values => "values", false;
    First => "first", false;
    FirstKey => "first_key", false;
    Last => "last", false;
    LastKey => "last_key", false;
    Size => "size", false;
    Count => "count", false;
    IsEmpty => "is_empty", false;
    CountValues => "count_values", false;
    Iter => "iter", false;

    // Derived reads
    Copy => "copy", false;
    CopyArray => "copy_array", false;
    ToArray => "to_array", false;
    ToObject => "to_object", false;
    ToJson => "to_json", false;
    Reduce => "reduce", false;
    Diff => "diff", false;
    Uniq => "uniq", false;
    Ununiq => "ununiq", false;
    Uniqs => "uniqs", false;
    Chunk => "chunk", false;
    Slice => "slice", false;
    Pick => "pick", false;
    Omit => "omit", false;
    Rand => "rand", false;
    Test => "test", false;
    TestAll => "test_all", false;
    Min => "min", false;
    Max => "max", false;
    Calc => "calc", false;
    CalcAvg => "calc_avg", false;
    Sum => "sum", false;
    SumAvg => "sum_avg", false;

    // Extension point
    Prototype => "prototype", false;
    Call => "call", false;
    Execute => "execute", false;
}

impl Operation {
    /// Look up a built-in operation by name
    pub fn from_name(name: &str) -> Option<Operation> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const MAP_DISALLOWED: &[Operation] = &[
    Operation::Add,
    Operation::Append,
    Operation::Prepend,
    Operation::Unpop,
    Operation::Unshift,
    Operation::Flip,
    Operation::Pad,
    Operation::Fill,
];

const SET_DISALLOWED: &[Operation] = &[Operation::Flip];

/// True if `kind` rejects `op` regardless of its read-only state.
///
/// Tuples reject every mutator plus the scanning lookups that return keys.
pub fn is_disallowed(kind: Kind, op: Operation) -> bool {
    match kind {
        Kind::Any => false,
        Kind::Map => MAP_DISALLOWED.contains(&op),
        Kind::Set => SET_DISALLOWED.contains(&op),
        Kind::Tuple => {
            op.is_mutator()
                || matches!(
                    op,
                    Operation::Search
                        | Operation::SearchLast
                        | Operation::Find
                        | Operation::FindKey
                        | Operation::FindIndex
                )
        }
    }
}

/// All operations `kind` rejects
pub fn disallowed(kind: Kind) -> Vec<Operation> {
    Operation::ALL
        .iter()
        .copied()
        .filter(|op| is_disallowed(kind, *op))
        .collect()
}
