use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, TimeZone, Utc};
use construction_store_lib::data::models::product_promotion::ProductPromotion;
use construction_store_lib::data::models::promotion::Promotion;
use construction_store_lib::pricing::engine::round_money;
use construction_store_lib::pricing::{
    DiscountType, PriceQuote, current_promotion, discount_amount, discount_percentage, sale_price,
};
use std::str::FromStr;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

fn promotion(id: i32, kind: DiscountType, value: &str) -> Promotion {
    Promotion {
        id,
        name: format!("Promo {}", id),
        slug: format!("promo-{}", id),
        description: String::new(),
        short_description: String::new(),
        discount_type: kind,
        discount_value: dec(value),
        start_date: Some(now() - Duration::days(1)),
        end_date: Some(now() + Duration::days(1)),
        is_active: true,
        created_at: now() - Duration::days(2),
        updated_at: now() - Duration::days(2),
    }
}

fn link(id: i32, promotion_id: i32, priority: i32, created_at: DateTime<Utc>) -> ProductPromotion {
    ProductPromotion {
        id,
        product_id: 1,
        promotion_id,
        priority,
        created_at,
    }
}

#[test]
fn window_bounds_are_inclusive() {
    let mut promo = promotion(1, DiscountType::Percentage, "10");
    let start = now() - Duration::hours(1);
    let end = now() + Duration::hours(1);
    promo.start_date = Some(start);
    promo.end_date = Some(end);
    let links = vec![(link(1, 1, 1, now()), promo)];

    assert!(current_promotion(&links, start).is_some());
    assert!(current_promotion(&links, end).is_some());
    assert!(current_promotion(&links, start - Duration::seconds(1)).is_none());
    assert!(current_promotion(&links, end + Duration::seconds(1)).is_none());
}

#[test]
fn inactive_or_undated_promotions_never_apply() {
    let mut inactive = promotion(1, DiscountType::Percentage, "10");
    inactive.is_active = false;
    let mut undated = promotion(2, DiscountType::Percentage, "10");
    undated.end_date = None;

    let links = vec![
        (link(1, 1, 10, now()), inactive),
        (link(2, 2, 10, now()), undated),
    ];

    assert!(current_promotion(&links, now()).is_none());
}

#[test]
fn highest_priority_wins_and_newer_link_breaks_ties() {
    let links = vec![
        (link(1, 1, 3, now() - Duration::days(5)), promotion(1, DiscountType::Percentage, "5")),
        (link(2, 2, 7, now() - Duration::days(4)), promotion(2, DiscountType::Percentage, "10")),
        (link(3, 3, 7, now() - Duration::days(1)), promotion(3, DiscountType::Percentage, "15")),
    ];

    let chosen = current_promotion(&links, now()).unwrap();
    assert_eq!(chosen.id, 3);
}

#[test]
fn identical_links_fall_back_to_link_id() {
    let created = now() - Duration::days(1);
    let links = vec![
        (link(9, 1, 5, created), promotion(1, DiscountType::Fixed, "50")),
        (link(4, 2, 5, created), promotion(2, DiscountType::Fixed, "70")),
    ];

    assert_eq!(current_promotion(&links, now()).unwrap().id, 1);
}

#[test]
fn fixed_discount_is_capped_at_the_price() {
    let promo = promotion(1, DiscountType::Fixed, "500");
    assert_eq!(promo.calculate_discount(&dec("300")), dec("300"));
    assert_eq!(sale_price(&dec("300"), Some(&promo)), dec("0.00"));
}

#[test]
fn percentage_discount() {
    let promo = promotion(1, DiscountType::Percentage, "20");
    let price = dec("1000");

    assert_eq!(promo.calculate_discount(&price), dec("200"));
    assert_eq!(sale_price(&price, Some(&promo)), dec("800.00"));
    assert_eq!(discount_percentage(&price, Some(&promo)), dec("20"));
}

#[test]
fn special_price_never_produces_a_negative_sale_price() {
    let promo = promotion(1, DiscountType::SpecialPrice, "1500");
    let price = dec("1000");

    assert_eq!(promo.calculate_discount(&price), dec("-500"));
    assert_eq!(sale_price(&price, Some(&promo)), dec("1500.00"));

    let cheap = promotion(2, DiscountType::SpecialPrice, "-200");
    assert_eq!(sale_price(&price, Some(&cheap)), dec("0.00"));
}

#[test]
fn special_price_below_list_price_is_the_sale_price() {
    let promo = promotion(1, DiscountType::SpecialPrice, "749.99");
    let price = dec("999.99");

    assert_eq!(discount_amount(&price, Some(&promo)), dec("250.00"));
    assert_eq!(sale_price(&price, Some(&promo)), dec("749.99"));
    assert_eq!(discount_percentage(&price, Some(&promo)), dec("25.0"));
}

#[test]
fn buy_one_get_one_reports_full_unit_discount() {
    let promo = promotion(1, DiscountType::BuyOneGetOne, "0");
    let price = dec("250");

    assert_eq!(discount_amount(&price, Some(&promo)), dec("250"));
    assert_eq!(discount_percentage(&price, Some(&promo)), dec("100.0"));
}

#[test]
fn zero_price_yields_zero_everywhere() {
    let promo = promotion(1, DiscountType::Fixed, "100");
    let zero = dec("0");

    assert_eq!(promo.calculate_discount(&zero), dec("0"));
    assert_eq!(discount_percentage(&zero, Some(&promo)), dec("0"));
    assert_eq!(sale_price(&zero, Some(&promo)), dec("0.00"));
}

#[test]
fn no_promotion_leaves_price_untouched() {
    let price = dec("129.90");

    assert_eq!(sale_price(&price, None), price);
    assert_eq!(discount_amount(&price, None), dec("0"));
    assert_eq!(discount_percentage(&price, None), dec("0"));
}

#[test]
fn fixed_discount_percentage_rounds_to_one_decimal() {
    let promo = promotion(1, DiscountType::Fixed, "100");
    assert_eq!(discount_percentage(&dec("300"), Some(&promo)), dec("33.3"));
}

#[test]
fn money_rounds_half_up() {
    assert_eq!(round_money(&dec("10.005")), dec("10.01"));
    assert_eq!(round_money(&dec("10.004")), dec("10.00"));
}

#[test]
fn price_quote_fills_old_price_while_promotion_runs() {
    let promo = promotion(1, DiscountType::Percentage, "10");
    let price = dec("500");

    let quote = PriceQuote::new(&price, None, Some(&promo));
    assert!(quote.has_promotion());
    assert_eq!(quote.old_price, Some(price.clone()));
    assert_eq!(quote.sale_price, dec("450.00"));

    let stored_old = dec("650");
    let quote = PriceQuote::new(&price, Some(&stored_old), None);
    assert!(!quote.has_promotion());
    assert_eq!(quote.old_price, Some(stored_old));
    assert_eq!(quote.sale_price, price);
}

#[test]
fn schedule_states() {
    let mut promo = promotion(1, DiscountType::Fixed, "10");
    assert!(promo.is_current(now()));
    assert!(!promo.is_upcoming(now()));
    assert!(!promo.is_expired(now()));

    promo.start_date = Some(now() + Duration::hours(2));
    promo.end_date = Some(now() + Duration::days(2));
    assert!(promo.is_upcoming(now()));
    assert_eq!(promo.days_left(now()), 0);
    assert_eq!(promo.time_left_display(now()), "inactive");

    promo.start_date = Some(now() - Duration::days(3));
    promo.end_date = Some(now() - Duration::seconds(1));
    assert!(promo.is_expired(now()));

    promo.is_active = false;
    assert!(!promo.is_expired(now()));
}

#[test]
fn time_left_is_rendered_by_magnitude() {
    let mut promo = promotion(1, DiscountType::Fixed, "10");

    promo.end_date = Some(now() + Duration::days(2) + Duration::hours(5));
    assert_eq!(promo.days_left(now()), 2);
    assert_eq!(promo.time_left_display(now()), "2d 5h");

    promo.end_date = Some(now() + Duration::hours(3) + Duration::minutes(20));
    assert_eq!(promo.time_left_display(now()), "3h 20m");

    promo.end_date = Some(now() + Duration::minutes(45));
    assert_eq!(promo.time_left_display(now()), "45m");
}
