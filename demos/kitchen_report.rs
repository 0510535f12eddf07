//! 廚房效期報表示例

use chrono::NaiveDate;
use expiry::{Category, ExpiryTracker, ProductBatch, Restaurant};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 廚房效期報表示例 ===\n");

    let restaurant = Restaurant::new("Osteria".to_string()).with_alert_days_before_expiry(2);
    let dairy = Category::new(restaurant.id, "Dairy".to_string())
        .with_urgent_alert_days(1)
        .with_warning_alert_days(4);
    let meat = Category::new(restaurant.id, "Meat".to_string()).with_urgent_alert_days(3);

    let today = expiry::parse_expiry_date("2025-11-01")?;
    let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d");

    let batches = vec![
        ProductBatch::new(
            restaurant.id,
            "Mozzarella".to_string(),
            Decimal::new(15, 1),
            "kg".to_string(),
            date("2025-11-04")?,
        )
        .with_category(dairy.id),
        ProductBatch::new(
            restaurant.id,
            "Chicken thighs".to_string(),
            Decimal::from(6),
            "kg".to_string(),
            date("2025-10-31")?,
        )
        .with_category(meat.id),
        ProductBatch::new(
            restaurant.id,
            "Tomato passata".to_string(),
            Decimal::from(12),
            "jar".to_string(),
            date("2026-03-01")?,
        ),
    ];

    let tracker = ExpiryTracker::new(restaurant, vec![dairy, meat]);
    let report = tracker.evaluate(today, &batches)?;

    println!("需處理批次:");
    for assessment in report.attention_list() {
        println!(
            "  - {}: {} (剩餘 {} 天)",
            assessment.name, assessment.status, assessment.days_to_expiry
        );
    }

    println!("\n彙總: {}", serde_json::to_string(&report.summary)?);

    Ok(())
}
