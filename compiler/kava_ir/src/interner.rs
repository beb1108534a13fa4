//! String interner for identifiers and literal spellings.
//!
//! Interned strings are leaked to get a `'static` lifetime, so lookups hand
//! out plain `&str` without holding the lock.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings were interned.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings, max is {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for InternError {}

struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        InternTable {
            map,
            strings: vec![empty],
        }
    }
}

/// Thread-safe string interner.
///
/// Keeps one table behind a `RwLock`; the read path is the common case since
/// Java sources repeat the same identifiers heavily.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::from_raw(index));
            }
        }

        let mut guard = self.table.write();
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the text of an interned name.
    ///
    /// Unknown names (from a different interner) resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.table.read();
        guard.strings.get(name.index()).copied().unwrap_or("")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
