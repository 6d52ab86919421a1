//! # Cart Transforms
//!
//! Pure functions computing the next cart sequence from the current one.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Sequence Transforms                             │
//! │                                                                         │
//! │  add_to_cart(item)                                                      │
//! │    id present? ── yes ──► that line quantity += 1 (order unchanged)     │
//! │         │                                                               │
//! │         no ─────────────► append { ...item, quantity: 1 }               │
//! │                                                                         │
//! │  increment(id)                                                          │
//! │    matching line quantity += 1; unknown id ──► unchanged                │
//! │    (a line already at i64::MAX ──► QuantityTooLarge, nothing changes)   │
//! │                                                                         │
//! │  decrement(id)                                                          │
//! │    matching line quantity -= 1                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    drop every line with quantity <= 0                                   │
//! │    (quantity 1 ──► line removed; unknown id ──► unchanged)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transform returns a fresh `Vec`; the input slice is a snapshot and
//! is never mutated. Only the first add of an id changes the order.

use crate::error::{CoreError, CoreResult};
use crate::types::{CartItem, NewCartItem};
use crate::validation::{validate_item_id, validate_price, validate_sequence};

/// Adds one unit of `item` to the cart.
///
/// ## Behavior
/// - Line with the same `id` exists: its quantity increases by 1 in place
/// - Otherwise: a new line with `quantity = 1` is appended
///
/// ## Errors
/// - `Validation` if the id is blank or the price is not finite
/// - `QuantityTooLarge` if the existing line is already at `i64::MAX`
pub fn add_to_cart(items: &[CartItem], item: NewCartItem) -> CoreResult<Vec<CartItem>> {
    validate_item_id(&item.id)?;
    validate_price(item.price)?;

    let mut next = items.to_vec();

    if let Some(existing) = next.iter_mut().find(|line| line.id == item.id) {
        existing.quantity = one_more(existing)?;
        return Ok(next);
    }

    next.push(CartItem::from_new(item, 1));
    Ok(next)
}

/// Adds one unit to the line matching `id`. Unknown ids leave the cart as is.
pub fn increment(items: &[CartItem], id: &str) -> CoreResult<Vec<CartItem>> {
    items
        .iter()
        .map(|line| {
            if line.id == id {
                Ok(CartItem {
                    quantity: one_more(line)?,
                    ..line.clone()
                })
            } else {
                Ok(line.clone())
            }
        })
        .collect()
}

fn one_more(line: &CartItem) -> CoreResult<i64> {
    line.quantity
        .checked_add(1)
        .ok_or_else(|| CoreError::QuantityTooLarge {
            id: line.id.clone(),
            max: i64::MAX,
        })
}

/// Removes one unit from the line matching `id`.
///
/// Lines whose quantity drops to zero (or that were already non-positive)
/// are removed, so decrementing a single unit removes the line.
pub fn decrement(items: &[CartItem], id: &str) -> Vec<CartItem> {
    items
        .iter()
        .map(|line| {
            if line.id == id {
                CartItem {
                    quantity: line.quantity.saturating_sub(1),
                    ..line.clone()
                }
            } else {
                line.clone()
            }
        })
        .filter(|line| line.quantity > 0)
        .collect()
}

/// Number of distinct lines in the cart.
pub fn item_count(items: &[CartItem]) -> usize {
    items.len()
}

/// Total units across all lines. Saturates at `i64::MAX`.
pub fn total_quantity(items: &[CartItem]) -> i64 {
    items
        .iter()
        .fold(0i64, |total, line| total.saturating_add(line.quantity))
}

// =============================================================================
// Codec
// =============================================================================

/// Encodes a cart sequence into its persisted JSON text.
pub fn encode_sequence(items: &[CartItem]) -> CoreResult<String> {
    serde_json::to_string(items).map_err(|e| CoreError::Encode(e.to_string()))
}

/// Decodes persisted JSON text into a cart sequence.
///
/// The decoded lines must satisfy the cart invariants (unique non-empty ids,
/// positive quantities); a value that parses but breaks them is rejected the
/// same way as unparseable text.
pub fn decode_sequence(text: &str) -> CoreResult<Vec<CartItem>> {
    let items: Vec<CartItem> =
        serde_json::from_str(text).map_err(|e| CoreError::Decode(e.to_string()))?;

    validate_sequence(&items)?;

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(id: &str) -> NewCartItem {
        NewCartItem::new(id, format!("Product {}", id), format!("https://img/{}", id), 10.0)
    }

    fn line(id: &str, quantity: i64) -> CartItem {
        CartItem::from_new(new_item(id), quantity)
    }

    #[test]
    fn test_add_new_item_appends_with_quantity_one() {
        let items = vec![line("a", 2), line("b", 1)];

        let next = add_to_cart(&items, new_item("c")).unwrap();

        assert_eq!(next.len(), 3);
        assert_eq!(&next[..2], &items[..]);
        assert_eq!(next[2], CartItem::from_new(new_item("c"), 1));
    }

    #[test]
    fn test_add_existing_item_increments_in_place() {
        let items = vec![line("a", 2), line("b", 1), line("c", 4)];

        let next = add_to_cart(&items, new_item("b")).unwrap();

        assert_eq!(next.len(), 3);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].quantity, 2);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_add_existing_keeps_original_display_fields() {
        let items = vec![line("a", 1)];

        let next = add_to_cart(&items, NewCartItem::new("a", "Renamed", "other", 99.0)).unwrap();

        assert_eq!(next[0].title, "Product a");
        assert_eq!(next[0].price, 10.0);
        assert_eq!(next[0].quantity, 2);
    }

    #[test]
    fn test_increment() {
        let items = vec![line("a", 1), line("b", 3)];

        let next = increment(&items, "b").unwrap();

        assert_eq!(next, vec![line("a", 1), line("b", 4)]);
    }

    #[test]
    fn test_increment_unknown_id_is_noop() {
        let items = vec![line("a", 1), line("b", 3)];
        assert_eq!(increment(&items, "zzz").unwrap(), items);
    }

    #[test]
    fn test_decrement_above_one() {
        let items = vec![line("a", 1), line("b", 3), line("c", 1)];

        let next = decrement(&items, "b");

        assert_eq!(next, vec![line("a", 1), line("b", 2), line("c", 1)]);
    }

    #[test]
    fn test_decrement_last_unit_removes_line() {
        let items = vec![line("a", 1), line("b", 1), line("c", 5)];

        let next = decrement(&items, "b");

        assert_eq!(next, vec![line("a", 1), line("c", 5)]);
    }

    #[test]
    fn test_decrement_unknown_id_is_noop() {
        let items = vec![line("a", 1), line("b", 3)];
        assert_eq!(decrement(&items, "zzz"), items);
    }

    #[test]
    fn test_transforms_do_not_touch_input() {
        let items = vec![line("a", 1)];

        let _ = add_to_cart(&items, new_item("a")).unwrap();
        let _ = increment(&items, "a").unwrap();
        let _ = decrement(&items, "a");

        assert_eq!(items, vec![line("a", 1)]);
    }

    #[test]
    fn test_add_then_decrement_scenario() {
        let apple = NewCartItem::new("1", "A", "u", 10.0);

        let products = add_to_cart(&[], apple.clone()).unwrap();
        assert_eq!(products, vec![CartItem::from_new(apple.clone(), 1)]);

        let products = add_to_cart(&products, apple.clone()).unwrap();
        assert_eq!(products, vec![CartItem::from_new(apple.clone(), 2)]);

        let products = decrement(&products, "1");
        assert_eq!(products, vec![CartItem::from_new(apple, 1)]);

        let products = decrement(&products, "1");
        assert!(products.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_requests() {
        let items = vec![line("a", 1)];

        for item in [
            NewCartItem::new("", "A", "u", 1.0),
            NewCartItem::new("b", "B", "u", f64::NAN),
            NewCartItem::new("b", "B", "u", f64::INFINITY),
        ] {
            assert!(matches!(
                add_to_cart(&items, item),
                Err(CoreError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_quantity_cannot_overflow() {
        let items = vec![line("a", 1), line("b", i64::MAX)];

        assert!(matches!(
            increment(&items, "b"),
            Err(CoreError::QuantityTooLarge { ref id, .. }) if id == "b"
        ));
        assert!(matches!(
            add_to_cart(&items, new_item("b")),
            Err(CoreError::QuantityTooLarge { .. })
        ));

        // Other lines are unaffected.
        assert_eq!(increment(&items, "a").unwrap()[0].quantity, 2);
        assert_eq!(decrement(&items, "b")[1].quantity, i64::MAX - 1);
    }

    #[test]
    fn test_totals() {
        let items = vec![line("a", 2), line("b", 3)];
        assert_eq!(item_count(&items), 2);
        assert_eq!(total_quantity(&items), 5);
        assert_eq!(total_quantity(&[]), 0);
        assert_eq!(total_quantity(&[line("a", i64::MAX), line("b", 1)]), i64::MAX);
    }

    #[test]
    fn test_codec_preserves_order_and_fields() {
        let items = vec![
            CartItem::from_new(NewCartItem::new("z", "Zed", "u/z", 1.25), 3),
            CartItem::from_new(NewCartItem::new("a", "Ay", "u/a", 0.5), 1),
        ];

        let text = encode_sequence(&items).unwrap();
        assert_eq!(decode_sequence(&text).unwrap(), items);
    }

    #[test]
    fn test_decode_rejects_invalid_text() {
        assert!(matches!(
            decode_sequence("{not json"),
            Err(CoreError::Decode(_))
        ));
        assert!(matches!(
            decode_sequence(r#"{"id":"1"}"#),
            Err(CoreError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_broken_invariants() {
        let text = r#"[
            {"id":"1","title":"A","image_url":"u","price":1,"quantity":1},
            {"id":"1","title":"A","image_url":"u","price":1,"quantity":2}
        ]"#;
        assert!(matches!(
            decode_sequence(text),
            Err(CoreError::Validation(_))
        ));

        let text = r#"[{"id":"1","title":"A","image_url":"u","price":1,"quantity":0}]"#;
        assert!(matches!(
            decode_sequence(text),
            Err(CoreError::Validation(_))
        ));
    }
}
