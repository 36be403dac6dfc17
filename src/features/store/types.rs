//! Record types backing the storefront screens. All data is in-memory sample
//! data; the types still centralize labels, badge styles, and money formatting
//! so the screens stay purely presentational.

/// Stock level at or below which a product is flagged.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub sku: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price_cents: i64,
    pub stock: u32,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => {
                "inline-flex rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800"
            }
            OrderStatus::Processing => {
                "inline-flex rounded-full bg-blue-100 px-2.5 py-0.5 text-xs font-medium text-blue-800"
            }
            OrderStatus::Shipped => {
                "inline-flex rounded-full bg-indigo-100 px-2.5 py-0.5 text-xs font-medium text-indigo-800"
            }
            OrderStatus::Delivered => {
                "inline-flex rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800"
            }
            OrderStatus::Cancelled => {
                "inline-flex rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-600"
            }
        }
    }

    /// Orders still owed fulfillment work.
    pub fn is_open(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub placed_at: &'static str,
    pub status: OrderStatus,
    pub items: u32,
    pub total_cents: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentState {
    Settled,
    Scheduled,
    OnHold,
}

impl PaymentState {
    pub fn label(self) -> &'static str {
        match self {
            PaymentState::Settled => "Settled",
            PaymentState::Scheduled => "Scheduled",
            PaymentState::OnHold => "On hold",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PaymentState::Settled => {
                "inline-flex rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800"
            }
            PaymentState::Scheduled => {
                "inline-flex rounded-full bg-blue-100 px-2.5 py-0.5 text-xs font-medium text-blue-800"
            }
            PaymentState::OnHold => {
                "inline-flex rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payment {
    pub id: &'static str,
    pub order_id: &'static str,
    pub date: &'static str,
    pub state: PaymentState,
    pub amount_cents: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub published_at: &'static str,
    pub pinned: bool,
}

/// Formats a cent amount as a dollar string with thousands separators.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let absolute = cents.unsigned_abs();
    let dollars = absolute / 100;
    let remainder = absolute % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cents_groups_thousands() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(123_456), "$1,234.56");
        assert_eq!(format_cents(100_000_000), "$1,000,000.00");
        assert_eq!(format_cents(-4_250), "-$42.50");
    }

    #[test]
    fn low_stock_uses_the_threshold_inclusively() {
        let mut product = Product {
            sku: "SKU-1",
            name: "Test",
            category: "Misc",
            price_cents: 100,
            stock: LOW_STOCK_THRESHOLD,
        };
        assert!(product.is_low_stock());
        product.stock = LOW_STOCK_THRESHOLD + 1;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn open_orders_are_pending_or_processing() {
        assert!(OrderStatus::Pending.is_open());
        assert!(OrderStatus::Processing.is_open());
        assert!(!OrderStatus::Shipped.is_open());
        assert!(!OrderStatus::Delivered.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }

    #[test]
    fn status_labels_and_badges_are_stable() {
        assert_eq!(OrderStatus::Shipped.label(), "Shipped");
        assert!(OrderStatus::Pending.badge_class().contains("bg-amber-100"));
        assert_eq!(PaymentState::OnHold.label(), "On hold");
        assert!(PaymentState::Settled.badge_class().contains("bg-emerald-100"));
    }
}
