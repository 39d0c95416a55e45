use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::token::value_objects::GroupLabel;

/// A selectable leaf of the dropdown.
///
/// Options compare by identifier only, whatever their label says.
pub trait ListOption: Clone {
    fn option_id(&self) -> &str;
    fn option_label(&self) -> String;

    fn same_option(&self, other: &Self) -> bool {
        self.option_id() == other.option_id()
    }
}

/// Identity of one flattened sequence.
///
/// Every call to [`flatten`] mints a fresh id, so a windower can tell a
/// rebuilt sequence apart from the one it measured even when both have the
/// same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(u64);

impl SequenceId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlattenedRow<T> {
    GroupHeader(GroupLabel),
    OptionRow { option: T, option_index: usize },
}

impl<T> FlattenedRow<T> {
    pub fn is_header(&self) -> bool {
        matches!(self, FlattenedRow::GroupHeader(_))
    }

    pub fn option(&self) -> Option<&T> {
        match self {
            FlattenedRow::OptionRow { option, .. } => Some(option),
            FlattenedRow::GroupHeader(_) => None,
        }
    }

    /// Index of the option in the sequence handed to [`flatten`]
    pub fn option_index(&self) -> Option<usize> {
        match self {
            FlattenedRow::OptionRow { option_index, .. } => Some(*option_index),
            FlattenedRow::GroupHeader(_) => None,
        }
    }
}

/// The sequence the windower actually lays out
#[derive(Debug, Clone)]
pub struct FlattenedRows<T> {
    id: SequenceId,
    rows: Vec<FlattenedRow<T>>,
    option_count: usize,
}

impl<T> FlattenedRows<T> {
    pub fn empty() -> Self {
        Self { id: SequenceId::next(), rows: Vec::new(), option_count: 0 }
    }

    pub fn id(&self) -> SequenceId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    pub fn header_count(&self) -> usize {
        self.rows.len() - self.option_count
    }

    pub fn get(&self, index: usize) -> Option<&FlattenedRow<T>> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[FlattenedRow<T>] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlattenedRow<T>> {
        self.rows.iter()
    }
}

// Structural equality: two flattenings of the same input are equal even though
// they carry different sequence ids.
impl<T: PartialEq> PartialEq for FlattenedRows<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<'a, T> IntoIterator for &'a FlattenedRows<T> {
    type Item = &'a FlattenedRow<T>;
    type IntoIter = std::slice::Iter<'a, FlattenedRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Flattens options into header and option rows.
///
/// Each maximal run of options sharing a group label gets exactly one header
/// in front of it; options without a label are emitted bare. `group_of` must
/// be pure, a label that changes between calls yields undefined grouping.
pub fn flatten<T, G>(options: &[T], group_of: Option<G>) -> FlattenedRows<T>
where
    T: Clone,
    G: Fn(&T) -> Option<GroupLabel>,
{
    let Some(group_of) = group_of else {
        return FlattenedRows {
            id: SequenceId::next(),
            rows: options
                .iter()
                .enumerate()
                .map(|(option_index, option)| FlattenedRow::OptionRow { option: option.clone(), option_index })
                .collect(),
            option_count: options.len(),
        };
    };

    let mut rows = Vec::with_capacity(options.len());
    let mut current: Option<GroupLabel> = None;
    for (option_index, option) in options.iter().enumerate() {
        let label = group_of(option);
        if let Some(header) = &label {
            if current.as_ref() != Some(header) {
                rows.push(FlattenedRow::GroupHeader(header.clone()));
            }
        }
        current = label;
        rows.push(FlattenedRow::OptionRow { option: option.clone(), option_index });
    }

    FlattenedRows { id: SequenceId::next(), rows, option_count: options.len() }
}

/// [`flatten`] without a grouping rule
pub fn flatten_ungrouped<T: Clone>(options: &[T]) -> FlattenedRows<T> {
    flatten(options, None::<fn(&T) -> Option<GroupLabel>>)
}
