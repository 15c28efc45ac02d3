//! Cyclic position selection over an item list.
//!
//! # Responsibility
//! - Map a monotonically growing position onto the item list by modulo.
//! - Hand back the follow-up position so the caller can persist it after a
//!   successful injection.
//!
//! # Invariants
//! - `position` is never reduced here; wrap-around happens through the
//!   modulo alone.
//! - The advance saturates at `u64::MAX` instead of overflowing.
//! - An empty item list selects nothing.

/// One resolved rotation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Item text to inject.
    pub item: String,
    /// Position to persist once the injection landed.
    pub next_position: u64,
}

/// Selects the item for `position`, or `None` when `items` is empty.
pub fn select(items: &[String], position: u64) -> Option<Selection> {
    if items.is_empty() {
        return None;
    }
    let index = (position % items.len() as u64) as usize;
    Some(Selection {
        item: items[index].clone(),
        next_position: position.saturating_add(1),
    })
}

#[cfg(test)]
mod tests {
    use super::select;

    fn items(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn position_maps_by_modulo() {
        let list = items(&["a", "b", "c"]);

        let first = select(&list, 0).unwrap();
        assert_eq!(first.item, "a");
        assert_eq!(first.next_position, 1);

        let third = select(&list, 2).unwrap();
        assert_eq!(third.item, "c");
        assert_eq!(third.next_position, 3);
    }

    #[test]
    fn position_wraps_past_list_length() {
        let list = items(&["a", "b", "c"]);

        assert_eq!(select(&list, 3).unwrap().item, "a");
        assert_eq!(select(&list, 7).unwrap().item, "b");
    }

    #[test]
    fn large_position_stays_in_bounds() {
        let list = items(&["x", "y"]);
        assert_eq!(select(&list, u64::MAX - 1).unwrap().item, "x");
    }

    #[test]
    fn position_saturates_at_the_integer_ceiling() {
        let list = items(&["x", "y"]);

        let ceiling = select(&list, u64::MAX).unwrap();
        assert_eq!(ceiling.item, "y");
        assert_eq!(ceiling.next_position, u64::MAX);
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(select(&[], 5).is_none());
    }
}
