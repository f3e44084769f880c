//! Scan → edit → save reconciliation.
//!
//! Pure functions: the caller owns the lists and decides when to persist.

use crate::model::{Product, TallyEntry};

/// Transient entry being created or adjusted before commit.
///
/// `id == 0` means the barcode has no tally yet and saving appends a new
/// entry. Any other id points at the existing tally to accumulate into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    pub id: u64,
    pub barcode: String,
    pub system_code: Option<String>,
    pub name: String,
    pub quantity: i64,
}

impl EditBuffer {
    pub fn new(barcode: impl Into<String>, quantity: i64) -> Self {
        Self {
            barcode: barcode.into(),
            quantity,
            ..Self::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id < 1
    }

    /// Quantity has no floor; decrementing below zero is allowed. It
    /// saturates at the `i64` bounds.
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }
}

/// Result of folding an edit buffer into the tally list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    /// The entry as it stands after the commit.
    pub entry: TallyEntry,
    /// True when a new entry was appended.
    pub created: bool,
}

/// Resolve a scanned barcode into a fresh edit buffer.
///
/// Matching is exact string equality; no normalization between EAN-8 and
/// EAN-13 or of leading zeros. An existing tally wins over the catalog so a
/// repeated scan accumulates into the same row.
pub fn lookup(
    barcode: &str,
    default_quantity: i64,
    products: &[Product],
    tallies: &[TallyEntry],
) -> EditBuffer {
    let mut buffer = EditBuffer::new(barcode, default_quantity);

    if let Some(existing) = tallies.iter().find(|t| t.barcode == barcode) {
        buffer.id = existing.id;
        buffer.name = existing.name.clone();
        buffer.system_code = existing.system_code.clone();
        return buffer;
    }

    if let Some(product) = products.iter().find(|p| p.barcode == barcode) {
        buffer.name = product.name.clone();
        buffer.system_code = Some(product.system_code.clone());
    }

    buffer
}

/// Next tally id: one past the highest id in use.
///
/// For a list that never lost entries this equals `len + 1`. Saturates at
/// `u64::MAX` for hand-edited lists that already use it.
pub fn next_id(tallies: &[TallyEntry]) -> u64 {
    tallies
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

/// Fold `buffer` into `tallies`.
///
/// A new buffer appends an entry with [`next_id`]. A buffer pointing at an
/// existing id adds its quantity to the stored one and overwrites the name.
/// An id that no longer exists is treated as new. Accumulation saturates at
/// the `i64` bounds.
pub fn commit(mut tallies: Vec<TallyEntry>, buffer: EditBuffer) -> (Vec<TallyEntry>, Committed) {
    if !buffer.is_new() {
        if let Some(existing) = tallies.iter_mut().find(|t| t.id == buffer.id) {
            existing.quantity = existing.quantity.saturating_add(buffer.quantity);
            existing.name = buffer.name;
            if buffer.system_code.is_some() {
                existing.system_code = buffer.system_code;
            }
            let entry = existing.clone();
            return (
                tallies,
                Committed {
                    entry,
                    created: false,
                },
            );
        }
        tracing::debug!(id = buffer.id, "edit points at a missing tally, appending instead");
    }

    let entry = TallyEntry {
        id: next_id(&tallies),
        barcode: buffer.barcode,
        name: buffer.name,
        system_code: buffer.system_code,
        quantity: buffer.quantity,
    };
    tallies.push(entry.clone());
    (
        tallies,
        Committed {
            entry,
            created: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, barcode: &str, name: &str, code: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            system_code: code.to_string(),
            barcode: barcode.to_string(),
        }
    }

    fn tally(id: u64, barcode: &str, quantity: i64) -> TallyEntry {
        TallyEntry {
            id,
            barcode: barcode.to_string(),
            name: format!("item {id}"),
            system_code: None,
            quantity,
        }
    }

    #[test]
    fn lookup_unknown_barcode_only_sets_barcode() {
        let buffer = lookup("7891000100103", 1, &[], &[]);
        assert_eq!(buffer, EditBuffer::new("7891000100103", 1));
        assert!(buffer.is_new());
    }

    #[test]
    fn lookup_fills_from_product_but_stays_new() {
        let products = [product(9, "12345670", "Beans", "B-9")];
        let buffer = lookup("12345670", 1, &products, &[]);
        assert_eq!(buffer.name, "Beans");
        assert_eq!(buffer.system_code.as_deref(), Some("B-9"));
        assert!(buffer.is_new());
    }

    #[test]
    fn lookup_prefers_existing_tally() {
        let products = [product(9, "12345670", "Beans", "B-9")];
        let tallies = [tally(4, "12345670", 2)];
        let buffer = lookup("12345670", 1, &products, &tallies);
        assert_eq!(buffer.id, 4);
        assert_eq!(buffer.name, "item 4");
        assert_eq!(buffer.quantity, 1);
    }

    #[test]
    fn lookup_does_not_normalize_leading_zeros() {
        let products = [product(1, "0012345670", "Padded", "P")];
        let buffer = lookup("12345670", 1, &products, &[]);
        assert!(buffer.name.is_empty());
    }

    #[test]
    fn decrement_goes_negative() {
        let mut buffer = EditBuffer::new("1", 1);
        buffer.decrement();
        buffer.decrement();
        assert_eq!(buffer.quantity, -1);
    }

    #[test]
    fn next_id_skips_past_gaps() {
        assert_eq!(next_id(&[]), 1);
        assert_eq!(next_id(&[tally(1, "a", 1), tally(2, "b", 1)]), 3);
        assert_eq!(next_id(&[tally(3, "c", 1)]), 4);
    }

    #[test]
    fn commit_new_appends_with_next_id() {
        let mut buffer = EditBuffer::new("b", 3);
        buffer.name = "Rice".to_string();
        let (tallies, committed) = commit(vec![tally(1, "a", 1)], buffer);

        assert!(committed.created);
        assert_eq!(committed.entry.id, 2);
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[1], committed.entry);
    }

    #[test]
    fn commit_existing_adds_quantity_and_overwrites_name() {
        let buffer = EditBuffer {
            id: 1,
            barcode: "a".to_string(),
            system_code: None,
            name: "Renamed".to_string(),
            quantity: 5,
        };
        let (tallies, committed) = commit(vec![tally(1, "a", 2)], buffer);

        assert!(!committed.created);
        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[0].quantity, 7);
        assert_eq!(tallies[0].name, "Renamed");
    }

    #[test]
    fn quantity_edits_saturate_at_bounds() {
        let mut buffer = EditBuffer::new("1", i64::MAX);
        buffer.increment();
        assert_eq!(buffer.quantity, i64::MAX);

        buffer.quantity = i64::MIN;
        buffer.decrement();
        assert_eq!(buffer.quantity, i64::MIN);
    }

    #[test]
    fn next_id_saturates_on_max_id() {
        assert_eq!(next_id(&[tally(u64::MAX, "a", 1)]), u64::MAX);
    }

    #[test]
    fn commit_existing_saturates_accumulated_quantity() {
        let buffer = EditBuffer {
            id: 1,
            ..EditBuffer::new("a", i64::MAX)
        };
        let (tallies, _) = commit(vec![tally(1, "a", 5)], buffer);
        assert_eq!(tallies[0].quantity, i64::MAX);
    }

    #[test]
    fn commit_stale_id_appends() {
        let buffer = EditBuffer {
            id: 42,
            ..EditBuffer::new("z", 1)
        };
        let (tallies, committed) = commit(vec![tally(1, "a", 2)], buffer);
        assert!(committed.created);
        assert_eq!(committed.entry.id, 2);
        assert_eq!(tallies.len(), 2);
    }
}
