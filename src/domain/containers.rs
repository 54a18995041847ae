//! Container operations whose failure behaviour the lessons contrast.
//!
//! Lookups and removals come in two flavours: a strict one that reports a
//! missing key as an error, and a forgiving one that treats absence as a
//! no-op. Both are kept as separate functions.

use crate::utils::error::{LessonError, Result};
use indexmap::{Equivalent, IndexMap};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Union of two mappings where `right` wins on key collision.
///
/// Keys keep the order they first appear in: `left`'s keys first, then
/// any keys only `right` has.
pub fn merge_right<K, V>(left: &IndexMap<K, V>, right: &IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = left.clone();
    merge_into(&mut merged, right.clone());
    merged
}

/// In-place right-biased union.
pub fn merge_into<K, V>(target: &mut IndexMap<K, V>, other: IndexMap<K, V>)
where
    K: Hash + Eq,
{
    for (key, value) in other {
        // insert on an existing key keeps its slot
        target.insert(key, value);
    }
}

pub fn lookup<'a, K, V, Q>(map: &'a IndexMap<K, V>, key: &Q) -> Result<&'a V>
where
    Q: ?Sized + Hash + Equivalent<K> + Display,
{
    map.get(key).ok_or_else(|| LessonError::KeyError {
        key: key.to_string(),
    })
}

/// Strict delete: fails if `key` is absent. Order of the rest is kept.
pub fn remove_key<K, V, Q>(map: &mut IndexMap<K, V>, key: &Q) -> Result<V>
where
    Q: ?Sized + Hash + Equivalent<K> + Display,
{
    map.shift_remove(key).ok_or_else(|| LessonError::KeyError {
        key: key.to_string(),
    })
}

/// Forgiving delete: returns the old value, if any.
pub fn discard_key<K, V, Q>(map: &mut IndexMap<K, V>, key: &Q) -> Option<V>
where
    Q: ?Sized + Hash + Equivalent<K>,
{
    map.shift_remove(key)
}

/// Strict set removal: fails if `item` is not a member.
pub fn remove_member<T, Q>(set: &mut BTreeSet<T>, item: &Q) -> Result<()>
where
    T: Borrow<Q> + Ord,
    Q: ?Sized + Ord + Display,
{
    if set.remove(item) {
        Ok(())
    } else {
        Err(LessonError::KeyError {
            key: item.to_string(),
        })
    }
}

/// Forgiving set removal. Returns whether anything was removed.
pub fn discard_member<T, Q>(set: &mut BTreeSet<T>, item: &Q) -> bool
where
    T: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    set.remove(item)
}

/// Removes the first element equal to `value`.
pub fn remove_value<T>(items: &mut Vec<T>, value: &T) -> Result<T>
where
    T: PartialEq + Debug,
{
    match items.iter().position(|item| item == value) {
        Some(pos) => Ok(items.remove(pos)),
        None => Err(LessonError::KeyError {
            key: format!("{:?}", value),
        }),
    }
}

/// Element at `index`, counting from the back when negative (`-1` is last).
pub fn at<T>(items: &[T], index: isize) -> Result<&T> {
    let len = items.len();
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };

    resolved
        .and_then(|i| items.get(i))
        .ok_or(LessonError::IndexError { index, len })
}

/// The last `n` elements, or all of them if there are fewer.
pub fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}
