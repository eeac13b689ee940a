//! The option store: a sparse tree of options keyed by path segments.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::literal;
use crate::path::OptionPath;
use crate::value::{OptionMap, OptionValue};

/// Options of a single chart, addressed by [`OptionPath`].
///
/// Every operation holds the store's own lock for its whole duration, so a
/// store can be shared between callers (a timer callback and a direct call,
/// say) without further coordination. Stores never contend with each other.
///
/// # Example
///
/// ```rust
/// use chartopts_option_store::{OptionStore, ZoomType};
///
/// let store = OptionStore::new();
/// store.set("/chart/type", "line").unwrap();
/// store.set("/chart/zoomType", ZoomType::XY).unwrap();
/// store.set("/title/text", "Hello").unwrap();
///
/// assert_eq!(
///     store.serialize().unwrap(),
///     "chart: {type: 'line', zoomType: 'xy'}, title: {text: 'Hello'}"
/// );
/// ```
#[derive(Debug, Default)]
pub struct OptionStore {
    root: Mutex<OptionMap>,
}

impl OptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, OptionMap> {
        // An interrupted write leaves at most an empty block behind, so a
        // poisoned lock still guards a usable tree.
        self.root.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a value is stored at `path`.
    ///
    /// Never creates nodes. Root-only paths and paths running through a
    /// leaf report `false`.
    pub fn contains(&self, path: impl Into<OptionPath>) -> Result<bool> {
        let path = path.into();
        let (head, key) = match split(&path)? {
            Some(parts) => parts,
            None => return Ok(false),
        };

        let root = self.lock();
        Ok(walk(&root, head).is_some_and(|level| level.contains_key(key)))
    }

    /// Store `value` at `path`, creating intermediate mappings as needed.
    ///
    /// Overwriting a key keeps its position in the output.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] when the path has no segments, or when an
    ///   intermediate segment already holds a non-mapping value
    /// - [`Error::InvalidValue`] when `value` is null
    pub fn set(&self, path: impl Into<OptionPath>, value: impl Into<OptionValue>) -> Result<()> {
        let path = path.into();
        let value = value.into();
        let parts = split(&path)?;
        if value.is_null() {
            return Err(Error::InvalidValue {
                path: path.to_string(),
            });
        }
        let Some((head, key)) = parts else {
            return Ok(());
        };

        let mut root = self.lock();
        let mut current: &mut OptionMap = &mut root;
        for segment in head {
            let next = current.entry(segment.clone()).or_insert_with(|| {
                debug!(path = %path, segment = %segment, "creating option block");
                OptionValue::map()
            });
            match next {
                OptionValue::Map(level) => current = level,
                other => {
                    return Err(Error::invalid_path(
                        &path,
                        format!(
                            "segment '{}' holds a {} value, not a block",
                            segment,
                            other.kind_name()
                        ),
                    ));
                }
            }
        }

        trace!(path = %path, kind = value.kind_name(), "set option");
        current.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove whatever is stored at `path`, returning it.
    ///
    /// Removing a block removes all the options below it. Missing segments
    /// make this a no-op.
    pub fn remove(&self, path: impl Into<OptionPath>) -> Result<Option<OptionValue>> {
        let path = path.into();
        let Some((head, key)) = split(&path)? else {
            return Ok(None);
        };

        let mut root = self.lock();
        let Some(level) = walk_mut(&mut root, head) else {
            debug!(path = %path, "nothing to remove");
            return Ok(None);
        };
        let removed = level.shift_remove(key);
        trace!(path = %path, removed = removed.is_some(), "remove option");
        Ok(removed)
    }

    /// A copy of the value stored at `path`, `None` if nothing is there.
    pub fn get(&self, path: impl Into<OptionPath>) -> Result<Option<OptionValue>> {
        let path = path.into();
        let Some((head, key)) = split(&path)? else {
            return Ok(None);
        };

        let root = self.lock();
        Ok(walk(&root, head).and_then(|level| level.get(key).cloned()))
    }

    /// The literal text of every option, without the enclosing braces.
    ///
    /// The caller embeds this inside the chart constructor's argument.
    /// Returns `None` for an empty store.
    pub fn serialize(&self) -> Option<String> {
        let root = self.lock();
        if root.is_empty() {
            return None;
        }
        literal::encode_entries(&root)
    }

    /// Number of top-level blocks and options.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every option.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// A copy of the whole tree.
    pub fn snapshot(&self) -> OptionMap {
        self.lock().clone()
    }
}

impl Clone for OptionStore {
    fn clone(&self) -> Self {
        OptionStore::from(self.snapshot())
    }
}

impl From<OptionMap> for OptionStore {
    fn from(root: OptionMap) -> Self {
        OptionStore {
            root: Mutex::new(root),
        }
    }
}

/// Split a path into head segments and key.
///
/// `Ok(None)` for a root-only path, an error for a path without segments.
fn split(path: &OptionPath) -> Result<Option<(&[String], &str)>> {
    if !path.is_valid() {
        return Err(Error::invalid_path(
            path,
            "null or empty value not allowed",
        ));
    }
    Ok(path.head_segments().zip(path.last_segment()))
}

fn walk<'a>(root: &'a OptionMap, head: &[String]) -> Option<&'a OptionMap> {
    let mut current = root;
    for segment in head {
        current = current.get(segment)?.as_map()?;
    }
    Some(current)
}

fn walk_mut<'a>(root: &'a mut OptionMap, head: &[String]) -> Option<&'a mut OptionMap> {
    let mut current = root;
    for segment in head {
        match current.get_mut(segment) {
            Some(OptionValue::Map(level)) => current = level,
            _ => return None,
        }
    }
    Some(current)
}
