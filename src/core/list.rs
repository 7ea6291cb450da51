//! Pure list transformations
//!
//! Every function here builds a fresh `Vec` from the input slice and never
//! touches the original. The store swaps the result in as a whole, so a
//! renderer never sees a half-updated list.

/// Return a new list with `item` appended after every existing item.
pub fn appended(items: &[String], item: &str) -> Vec<String> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(item.to_string());
    next
}

/// Return a new list without the item at `index`.
///
/// An out-of-range index matches nothing, so the result equals the input.
/// Removing the same index twice removes two *different* original items,
/// because everything after the first removal shifts down by one.
pub fn removed_at(items: &[String], index: usize) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Return a new list where the item at `index` is replaced by `text`.
///
/// An out-of-range index leaves every item as it was.
pub fn replaced_at(items: &[String], index: usize, text: &str) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == index {
                text.to_string()
            } else {
                item.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_appended_to_empty() {
        assert_eq!(appended(&[], "Buy milk"), list(&["Buy milk"]));
    }

    #[test]
    fn test_appended_accepts_empty_string() {
        let result = appended(&list(&["a"]), "");
        assert_eq!(result, list(&["a", ""]));
    }

    #[test]
    fn test_removed_at_first() {
        let items = list(&["Buy milk", "Walk dog"]);
        assert_eq!(removed_at(&items, 0), list(&["Walk dog"]));
    }

    #[test]
    fn test_removed_at_out_of_range() {
        let items = list(&["a", "b"]);
        assert_eq!(removed_at(&items, 2), items);
        assert_eq!(removed_at(&items, usize::MAX), items);
    }

    #[test]
    fn test_removed_at_twice_shifts() {
        let items = list(&["a", "b", "c"]);
        let once = removed_at(&items, 1);
        let twice = removed_at(&once, 1);
        // "c" slid into slot 1 after the first removal
        assert_eq!(twice, list(&["a"]));
    }

    #[test]
    fn test_replaced_at() {
        let items = list(&["Walk dog"]);
        assert_eq!(replaced_at(&items, 0, "Walk the dog"), list(&["Walk the dog"]));
    }

    #[test]
    fn test_replaced_at_out_of_range() {
        let items = list(&["a", "b"]);
        assert_eq!(replaced_at(&items, 5, "z"), items);
    }

    #[test]
    fn test_duplicate_items_removed_by_position() {
        let items = list(&["x", "x", "x"]);
        assert_eq!(removed_at(&items, 1), list(&["x", "x"]));
    }

    proptest! {
        #[test]
        fn prop_appended_keeps_prefix(items in prop::collection::vec(".*", 0..16), text in ".*") {
            let result = appended(&items, &text);
            prop_assert_eq!(result.len(), items.len() + 1);
            prop_assert_eq!(&result[..items.len()], &items[..]);
            prop_assert_eq!(result.last(), Some(&text));
        }

        #[test]
        fn prop_removed_at_valid_index(
            (items, index) in prop::collection::vec(".*", 1..16)
                .prop_flat_map(|v| { let len = v.len(); (Just(v), 0..len) })
        ) {
            let result = removed_at(&items, index);
            let mut expected = items.clone();
            expected.remove(index);
            prop_assert_eq!(result.len(), items.len() - 1);
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn prop_removed_at_out_of_range(items in prop::collection::vec(".*", 0..16), extra in 0usize..100) {
            let index = items.len() + extra;
            prop_assert_eq!(removed_at(&items, index), items);
        }

        #[test]
        fn prop_replaced_at_valid_index(
            (items, index) in prop::collection::vec(".*", 1..16)
                .prop_flat_map(|v| { let len = v.len(); (Just(v), 0..len) }),
            text in ".*"
        ) {
            let result = replaced_at(&items, index, &text);
            prop_assert_eq!(result.len(), items.len());
            for (i, item) in result.iter().enumerate() {
                if i == index {
                    prop_assert_eq!(item, &text);
                } else {
                    prop_assert_eq!(item, &items[i]);
                }
            }
        }
    }
}
