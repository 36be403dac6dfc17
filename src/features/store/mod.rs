//! Storefront sample data and the aggregation helpers the dashboard and
//! analytics screens render. Everything here is presentational input; there is
//! no network and no mutation.

pub(crate) mod sample;
pub(crate) mod types;

use self::types::{Order, OrderStatus, Payment, PaymentState, Product};

/// Gross revenue across non-cancelled orders.
pub fn revenue_cents(orders: &[Order]) -> i64 {
    orders
        .iter()
        .filter(|order| order.status != OrderStatus::Cancelled)
        .map(|order| order.total_cents)
        .sum()
}

/// Orders still owed fulfillment work.
pub fn open_order_count(orders: &[Order]) -> usize {
    orders.iter().filter(|order| order.status.is_open()).count()
}

/// Products at or below the low-stock threshold.
pub fn low_stock_count(products: &[Product]) -> usize {
    products.iter().filter(|product| product.is_low_stock()).count()
}

/// Payout total that has actually settled.
pub fn settled_cents(payments: &[Payment]) -> i64 {
    payments
        .iter()
        .filter(|payment| payment.state == PaymentState::Settled)
        .map(|payment| payment.amount_cents)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::sample::{sample_orders, sample_payments, sample_products};

    #[test]
    fn revenue_excludes_cancelled_orders() {
        let orders = sample_orders();
        let gross: i64 = orders.iter().map(|order| order.total_cents).sum();
        let cancelled: i64 = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Cancelled)
            .map(|order| order.total_cents)
            .sum();
        assert_eq!(revenue_cents(&orders), gross - cancelled);
    }

    #[test]
    fn open_orders_counts_pending_and_processing() {
        assert_eq!(open_order_count(&sample_orders()), 2);
    }

    #[test]
    fn low_stock_flags_threshold_and_below() {
        assert_eq!(low_stock_count(&sample_products()), 3);
    }

    #[test]
    fn settled_total_ignores_scheduled_and_held_payouts() {
        assert_eq!(settled_cents(&sample_payments()), 26_000);
    }
}
