use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// Largest offset a 14-bit compression pointer can address.
pub const MAX_POINTER_OFFSET: usize = 0x3FFF;

/// Names already written in the current message, keyed by their canonical
/// (ASCII-lowercased) form and mapped to the offset of their first occurrence.
///
/// One table belongs to exactly one message encoding.
#[derive(Debug, Default)]
pub struct CompressionTable {
    entries: FxHashMap<CompactString, u16>,
}

impl CompressionTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lookup(&self, canonical: &str) -> Option<u16> {
        self.entries.get(canonical).copied()
    }

    /// Remembers `offset` for `canonical` unless the name is already known or
    /// the offset does not fit a pointer. Returns whether an entry was added.
    pub fn record(&mut self, canonical: CompactString, offset: usize) -> bool {
        if offset > MAX_POINTER_OFFSET {
            return false;
        }
        if self.entries.contains_key(&canonical) {
            return false;
        }
        self.entries.insert(canonical, offset as u16);
        true
    }

    /// Forgets every name recorded at or after `offset`, for when the bytes
    /// from there on are discarded.
    pub fn discard_from(&mut self, offset: usize) {
        self.entries.retain(|_, &mut at| usize::from(at) < offset);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
