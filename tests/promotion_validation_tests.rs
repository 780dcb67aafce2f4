use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, TimeZone, Utc};
use construction_store_lib::pricing::{DiscountType, PromotionError};
use construction_store_lib::services::promotion_service::{PromotionDraft, validate_priority};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

fn draft() -> PromotionDraft {
    PromotionDraft {
        name: "Летняя распродажа".to_string(),
        slug: None,
        description: String::new(),
        short_description: "Скидки на краску".to_string(),
        discount_type: DiscountType::Percentage,
        discount_value: BigDecimal::from(15),
        start_date: None,
        end_date: None,
        is_active: true,
    }
}

#[test]
fn missing_dates_default_to_a_thirty_day_window() {
    let promotion = draft().into_new_promotion(now()).unwrap();

    assert_eq!(promotion.start_date, Some(now()));
    assert_eq!(promotion.end_date, Some(now() + Duration::days(30)));
    assert_eq!(promotion.slug, "letnyaya-rasprodazha");
}

#[test]
fn missing_end_is_counted_from_the_given_start() {
    let start = now() + Duration::days(3);
    let promotion = PromotionDraft {
        start_date: Some(start),
        ..draft()
    }
    .into_new_promotion(now())
    .unwrap();

    assert_eq!(promotion.end_date, Some(start + Duration::days(30)));
}

#[test]
fn end_must_follow_start() {
    let same = PromotionDraft {
        start_date: Some(now()),
        end_date: Some(now()),
        ..draft()
    };
    assert_eq!(same.validate(), Err(PromotionError::EndBeforeStart));

    let end_only_in_the_past = PromotionDraft {
        end_date: Some(now() - Duration::days(1)),
        ..draft()
    };
    assert_eq!(
        end_only_in_the_past.into_new_promotion(now()).map(|_| ()),
        Err(PromotionError::EndBeforeStart)
    );
}

#[test]
fn discount_value_bounds() {
    let negative = PromotionDraft {
        discount_type: DiscountType::Fixed,
        discount_value: BigDecimal::from(-1),
        ..draft()
    };
    assert_eq!(negative.validate(), Err(PromotionError::NegativeDiscount));

    let too_much = PromotionDraft {
        discount_value: BigDecimal::from(101),
        ..draft()
    };
    assert_eq!(too_much.validate(), Err(PromotionError::PercentageOutOfRange));

    let big_fixed = PromotionDraft {
        discount_type: DiscountType::Fixed,
        discount_value: BigDecimal::from(5000),
        ..draft()
    };
    assert_eq!(big_fixed.validate(), Ok(()));
}

#[test]
fn blank_name_is_rejected_first() {
    let blank = PromotionDraft {
        name: "  ".to_string(),
        discount_value: BigDecimal::from(-5),
        ..draft()
    };
    assert_eq!(blank.validate(), Err(PromotionError::EmptyName));
}

#[test]
fn explicit_slug_is_normalized() {
    let promotion = PromotionDraft {
        slug: Some("  Paint Week ".to_string()),
        ..draft()
    }
    .into_new_promotion(now())
    .unwrap();

    assert_eq!(promotion.slug, "paint-week");
}

#[test]
fn unsluggable_names_get_a_generated_slug() {
    let promotion = PromotionDraft {
        name: "!!!".to_string(),
        ..draft()
    }
    .into_new_promotion(now())
    .unwrap();

    assert!(promotion.slug.starts_with("promotion-"));
    assert_eq!(promotion.slug.len(), "promotion-".len() + 8);
}

#[test]
fn priorities_stay_within_one_to_ten() {
    assert_eq!(validate_priority(1), Ok(1));
    assert_eq!(validate_priority(10), Ok(10));
    assert_eq!(validate_priority(0), Err(PromotionError::PriorityOutOfRange(0)));
    assert_eq!(validate_priority(11), Err(PromotionError::PriorityOutOfRange(11)));
}

#[test]
fn discount_types_parse_from_admin_input() {
    assert_eq!("Special_Price".parse::<DiscountType>(), Ok(DiscountType::SpecialPrice));
    assert_eq!(
        "half_off".parse::<DiscountType>(),
        Err(PromotionError::UnknownDiscountType("half_off".to_string()))
    );
}
