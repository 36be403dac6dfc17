//! In-memory sample data for the storefront screens.

use super::types::{
    Announcement, Order, OrderStatus, Payment, PaymentState, Product,
};

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            sku: "VND-1001",
            name: "Ceramic pour-over set",
            category: "Kitchen",
            price_cents: 5_400,
            stock: 24,
        },
        Product {
            sku: "VND-1002",
            name: "Walnut serving board",
            category: "Kitchen",
            price_cents: 3_850,
            stock: 4,
        },
        Product {
            sku: "VND-1003",
            name: "Linen apron",
            category: "Textiles",
            price_cents: 4_200,
            stock: 17,
        },
        Product {
            sku: "VND-1004",
            name: "Stoneware mug, 12oz",
            category: "Kitchen",
            price_cents: 1_900,
            stock: 61,
        },
        Product {
            sku: "VND-1005",
            name: "Hand-dipped candles (pair)",
            category: "Home",
            price_cents: 1_450,
            stock: 2,
        },
        Product {
            sku: "VND-1006",
            name: "Woven market tote",
            category: "Textiles",
            price_cents: 6_900,
            stock: 9,
        },
        Product {
            sku: "VND-1007",
            name: "Brass plant mister",
            category: "Home",
            price_cents: 2_750,
            stock: 0,
        },
        Product {
            sku: "VND-1008",
            name: "Maple honey dipper",
            category: "Kitchen",
            price_cents: 800,
            stock: 48,
        },
    ]
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-2417",
            customer: "Priya Raman",
            placed_at: "2025-06-28",
            status: OrderStatus::Pending,
            items: 3,
            total_cents: 11_150,
        },
        Order {
            id: "ORD-2416",
            customer: "Marcus Webb",
            placed_at: "2025-06-28",
            status: OrderStatus::Processing,
            items: 1,
            total_cents: 6_900,
        },
        Order {
            id: "ORD-2415",
            customer: "Elif Demir",
            placed_at: "2025-06-27",
            status: OrderStatus::Shipped,
            items: 2,
            total_cents: 5_750,
        },
        Order {
            id: "ORD-2414",
            customer: "Jon Akre",
            placed_at: "2025-06-26",
            status: OrderStatus::Delivered,
            items: 5,
            total_cents: 14_300,
        },
        Order {
            id: "ORD-2413",
            customer: "Sasha Petrov",
            placed_at: "2025-06-25",
            status: OrderStatus::Delivered,
            items: 1,
            total_cents: 1_900,
        },
        Order {
            id: "ORD-2412",
            customer: "Amara Diallo",
            placed_at: "2025-06-24",
            status: OrderStatus::Cancelled,
            items: 2,
            total_cents: 8_350,
        },
        Order {
            id: "ORD-2411",
            customer: "Tom Hardwick",
            placed_at: "2025-06-23",
            status: OrderStatus::Delivered,
            items: 4,
            total_cents: 9_800,
        },
        Order {
            id: "ORD-2410",
            customer: "Lena Fischer",
            placed_at: "2025-06-22",
            status: OrderStatus::Shipped,
            items: 1,
            total_cents: 4_200,
        },
    ]
}

pub fn sample_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "PAY-0883",
            order_id: "ORD-2414",
            date: "2025-06-27",
            state: PaymentState::Settled,
            amount_cents: 14_300,
        },
        Payment {
            id: "PAY-0882",
            order_id: "ORD-2413",
            date: "2025-06-26",
            state: PaymentState::Settled,
            amount_cents: 1_900,
        },
        Payment {
            id: "PAY-0881",
            order_id: "ORD-2415",
            date: "2025-06-28",
            state: PaymentState::Scheduled,
            amount_cents: 5_750,
        },
        Payment {
            id: "PAY-0880",
            order_id: "ORD-2412",
            date: "2025-06-25",
            state: PaymentState::OnHold,
            amount_cents: 8_350,
        },
        Payment {
            id: "PAY-0879",
            order_id: "ORD-2411",
            date: "2025-06-24",
            state: PaymentState::Settled,
            amount_cents: 9_800,
        },
        Payment {
            id: "PAY-0878",
            order_id: "ORD-2410",
            date: "2025-06-23",
            state: PaymentState::Scheduled,
            amount_cents: 4_200,
        },
    ]
}

pub fn sample_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "ANN-31",
            title: "Holiday fulfillment cutoffs",
            body: "Orders placed after December 18 are not guaranteed to arrive \
                   before the holidays. Update your storefront banners accordingly.",
            published_at: "2025-06-20",
            pinned: true,
        },
        Announcement {
            id: "ANN-30",
            title: "New payout schedule",
            body: "Weekly payouts now settle on Wednesdays. Scheduled payouts \
                   created before this change keep their original dates.",
            published_at: "2025-06-12",
            pinned: false,
        },
        Announcement {
            id: "ANN-29",
            title: "Photography guidelines refresh",
            body: "Listing photos should use a neutral background and include at \
                   least one scale reference. The review team starts enforcing \
                   this in July.",
            published_at: "2025-06-02",
            pinned: false,
        },
        Announcement {
            id: "ANN-28",
            title: "Marketplace fee update",
            body: "The per-order processing fee drops from 30 to 25 cents for \
                   orders above $50.",
            published_at: "2025-05-27",
            pinned: false,
        },
    ]
}
