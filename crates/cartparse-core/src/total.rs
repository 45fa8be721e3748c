//! Cart total calculation

use crate::types::CartItem;

/// Anything with a unit price and a quantity
pub trait Priced {
    /// Unit price
    fn price(&self) -> f64;
    /// Number of units
    fn quantity(&self) -> f64;
}

impl Priced for CartItem {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn quantity(&self) -> f64 {
        (**self).quantity()
    }
}

/// Sum of `price * quantity` over `items`, `0.0` when empty.
///
/// No rounding is applied; compare results with a tolerance.
pub fn calc_total<T: Priced>(items: &[T]) -> f64 {
    items.iter().map(|item| item.price() * item.quantity()).sum()
}

/// True when two amounts agree within `tolerance`
pub fn amounts_match(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(name: &str, price: f64, quantity: f64) -> CartItem {
        CartItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_calc_total() {
        let items = vec![
            item("Mollis consequat", 9.0, 2.0),
            item("Tvoluptatem", 10.32, 1.0),
            item("Scelerisque lacinia", 18.9, 1.0),
        ];
        assert!(amounts_match(calc_total(&items), 47.22, 1e-2));
    }

    #[test]
    fn test_calc_total_empty() {
        let items: Vec<CartItem> = Vec::new();
        assert_eq!(calc_total(&items), 0.0);
    }

    #[test]
    fn test_calc_total_over_references() {
        let owned = [item("a", 1.5, 4.0), item("b", 2.0, 0.5)];
        let borrowed: Vec<&CartItem> = owned.iter().collect();
        assert_eq!(calc_total(&borrowed), 7.0);
    }
}
