//! Request-time aggregations for the back-office.
//!
//! Everything here is a pure fold over records already loaded from the
//! store. Nothing is cached, so calling twice over the same records yields
//! the same numbers.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::sum;
use crate::order::Order;
use crate::payment::Payment;

/// Count and sum for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GroupTotal {
    pub key: String,
    pub count: u64,
    pub total: Decimal,
}

/// Units and revenue for one product across all orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductSales {
    pub product_id: Uuid,
    pub title: String,
    pub quantity: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderAnalytics {
    pub total_orders: u64,
    /// Sum of `total` over every order
    pub total_sales: Decimal,
    pub average_order_value: Decimal,
    /// Keyed by status label, alphabetical
    pub by_status: Vec<GroupTotal>,
    /// Keyed by `YYYY-MM`, oldest first
    pub by_month: Vec<GroupTotal>,
    pub top_products: Vec<ProductSales>,
}

impl OrderAnalytics {
    pub fn compute(orders: &[Order], top_limit: usize) -> Self {
        let total_orders = orders.len() as u64;
        let total_sales = sum(orders.iter().map(|o| o.total));

        let by_status = group(orders.iter().map(|o| (o.status.clone(), o.total)));
        let by_month = group(
            orders
                .iter()
                .map(|o| (o.created_at.format("%Y-%m").to_string(), o.total)),
        );

        Self {
            total_orders,
            total_sales,
            average_order_value: average(total_sales, total_orders),
            by_status,
            by_month,
            top_products: top_products(orders, top_limit),
        }
    }
}

/// Rank products by revenue (price × quantity on the order snapshot).
///
/// Ties fall back to quantity, then product id, so the ranking is stable.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut sales: HashMap<Uuid, ProductSales> = HashMap::new();

    for item in orders.iter().flat_map(|o| o.items.iter()) {
        let entry = sales.entry(item.product_id).or_insert_with(|| ProductSales {
            product_id: item.product_id,
            title: item.title.clone(),
            quantity: 0,
            revenue: Decimal::ZERO,
        });
        entry.quantity = entry.quantity.saturating_add(u64::from(item.quantity));
        entry.revenue = entry.revenue.saturating_add(item.line_total());
    }

    let mut ranked: Vec<ProductSales> = sales.into_values().collect();
    ranked.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| b.quantity.cmp(&a.quantity))
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    ranked.truncate(limit);
    ranked
}

/// Overview block of the payment statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentOverview {
    pub total_payments: u64,
    pub total_amount: Decimal,
    pub avg_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentStats {
    pub overview: PaymentOverview,
    pub by_status: Vec<GroupTotal>,
    pub by_method: Vec<GroupTotal>,
}

impl PaymentStats {
    pub fn compute(payments: &[Payment]) -> Self {
        let total_payments = payments.len() as u64;
        let total_amount = sum(payments.iter().map(|p| p.amount));

        Self {
            overview: PaymentOverview {
                total_payments,
                total_amount,
                avg_amount: average(total_amount, total_payments),
            },
            by_status: group(payments.iter().map(|p| (p.status.clone(), p.amount))),
            by_method: group(payments.iter().map(|p| (p.method.clone(), p.amount))),
        }
    }
}

/// Back-office landing page numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardSummary {
    pub total_customers: u64,
    pub total_products: u64,
    pub total_orders: u64,
    pub total_revenue: Decimal,
    pub recent_orders: Vec<Order>,
    pub top_products: Vec<ProductSales>,
}

fn group(rows: impl Iterator<Item = (String, Decimal)>) -> Vec<GroupTotal> {
    let mut groups: BTreeMap<String, (u64, Decimal)> = BTreeMap::new();
    for (key, amount) in rows {
        let slot = groups.entry(key).or_insert((0, Decimal::ZERO));
        slot.0 += 1;
        slot.1 = slot.1.saturating_add(amount);
    }
    groups
        .into_iter()
        .map(|(key, (count, total))| GroupTotal { key, count, total })
        .collect()
}

fn average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        (total / Decimal::from(count)).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::customer::Address;
    use crate::order::OrderItem;

    fn item(product_id: Uuid, title: &str, price: i64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id,
            title: title.to_string(),
            price: Decimal::from(price),
            quantity,
            image: None,
        }
    }

    fn order(items: Vec<OrderItem>, total: i64, status: &str, month: u32) -> Order {
        let at = Utc.with_ymd_and_hms(2024, month, 15, 10, 0, 0).unwrap();
        Order {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            demo_ref: None,
            items,
            address: Address::default(),
            total: Decimal::from(total),
            payment_method: "khalti".to_string(),
            payment_id: None,
            status: status.to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_empty_analytics() {
        let analytics = OrderAnalytics::compute(&[], 5);
        assert_eq!(analytics.total_orders, 0);
        assert_eq!(analytics.total_sales, Decimal::ZERO);
        assert_eq!(analytics.average_order_value, Decimal::ZERO);
        assert!(analytics.by_status.is_empty());
        assert!(analytics.top_products.is_empty());
    }

    #[test]
    fn test_total_sales_is_sum_of_totals() {
        let milk = Uuid::new_v4();
        let orders = vec![
            order(vec![item(milk, "Milk", 120, 1)], 120, "Paid", 7),
            // client-trusted total, deliberately not price × quantity
            order(vec![item(milk, "Milk", 120, 2)], 200, "Pending", 8),
            order(vec![], 85, "Paid", 8),
        ];

        let analytics = OrderAnalytics::compute(&orders, 5);
        assert_eq!(analytics.total_orders, 3);
        assert_eq!(analytics.total_sales, Decimal::from(405));
        assert_eq!(analytics.average_order_value, Decimal::from(135));
        assert_eq!(analytics, OrderAnalytics::compute(&orders, 5));
    }

    #[test]
    fn test_grouping_by_status_and_month() {
        let orders = vec![
            order(vec![], 10, "Paid", 7),
            order(vec![], 20, "Paid", 8),
            order(vec![], 30, "Shipped", 8),
        ];

        let analytics = OrderAnalytics::compute(&orders, 5);
        assert_eq!(
            analytics.by_status,
            vec![
                GroupTotal { key: "Paid".into(), count: 2, total: Decimal::from(30) },
                GroupTotal { key: "Shipped".into(), count: 1, total: Decimal::from(30) },
            ]
        );
        let months: Vec<_> = analytics.by_month.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(months, vec!["2024-07", "2024-08"]);
        assert_eq!(analytics.by_month[1].count, 2);
    }

    #[test]
    fn test_top_products_rank_by_revenue() {
        let milk = Uuid::new_v4();
        let cheese = Uuid::new_v4();
        let yogurt = Uuid::new_v4();
        let orders = vec![
            order(vec![item(milk, "Milk", 120, 3), item(cheese, "Cheese", 200, 1)], 560, "Paid", 8),
            order(vec![item(yogurt, "Yogurt", 85, 1), item(cheese, "Cheese", 200, 1)], 285, "Paid", 8),
        ];

        let top = top_products(&orders, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id, cheese);
        assert_eq!(top[0].revenue, Decimal::from(400));
        assert_eq!(top[1].product_id, milk);
        assert_eq!(top[1].quantity, 3);
    }

    #[test]
    fn test_payment_stats() {
        let payment = |amount: i64, method: &str, status: &str| Payment {
            id: Uuid::new_v4(),
            amount: Decimal::from(amount),
            method: method.to_string(),
            status: status.to_string(),
            date: Utc::now(),
            booking_id: "order-1".to_string(),
        };
        let stats = PaymentStats::compute(&[
            payment(100, "khalti", "completed"),
            payment(50, "cod", "pending"),
            payment(30, "khalti", "pending"),
        ]);

        assert_eq!(stats.overview.total_payments, 3);
        assert_eq!(stats.overview.total_amount, Decimal::from(180));
        assert_eq!(stats.overview.avg_amount, Decimal::from(60));
        assert_eq!(stats.by_method[1].key, "khalti");
        assert_eq!(stats.by_method[1].total, Decimal::from(130));
        assert_eq!(stats.by_status[1].count, 2);
    }

    #[test]
    fn test_huge_stored_snapshot_does_not_overflow() {
        let gold = Uuid::new_v4();
        let huge: OrderItem = serde_json::from_value(serde_json::json!({
            "product_id": gold,
            "title": "Gold Leaf",
            "price": 1e28,
            "quantity": 10
        }))
        .unwrap();
        let mut big = order(vec![huge.clone(), huge], 0, "Paid", 8);
        big.total = Decimal::MAX;
        let orders = vec![big.clone(), big];

        let analytics = OrderAnalytics::compute(&orders, 5);

        assert_eq!(analytics.total_sales, Decimal::MAX);
        assert_eq!(analytics.by_status[0].total, Decimal::MAX);
        assert_eq!(analytics.top_products[0].product_id, gold);
        assert_eq!(analytics.top_products[0].revenue, Decimal::MAX);
        assert_eq!(analytics.top_products[0].quantity, 40);
    }
}
