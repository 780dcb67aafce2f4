use crate::data::models::product::Product;
use crate::data::models::product_promotion::ProductPromotion;
use crate::data::models::promotion::Promotion;
use crate::pricing::discount::DiscountType;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use chrono::{DateTime, Utc};

/// Picks the promotion that applies to a product right now.
///
/// Only current promotions qualify. The highest link priority wins; among
/// equal priorities the most recently created link wins, then the higher
/// link id.
pub fn current_promotion(
    links: &[(ProductPromotion, Promotion)],
    now: DateTime<Utc>,
) -> Option<&Promotion> {
    links
        .iter()
        .filter(|(_, promotion)| promotion.is_current(now))
        .max_by(|(a, _), (b, _)| {
            a.priority
                .cmp(&b.priority)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        })
        .map(|(_, promotion)| promotion)
}

pub fn discount_amount(price: &BigDecimal, current: Option<&Promotion>) -> BigDecimal {
    current
        .map(|promotion| promotion.calculate_discount(price))
        .unwrap_or_else(BigDecimal::zero)
}

/// List price minus the current discount, never below zero, to the cent.
pub fn sale_price(price: &BigDecimal, current: Option<&Promotion>) -> BigDecimal {
    let Some(promotion) = current else {
        return price.clone();
    };

    let discounted = price - promotion.calculate_discount(price);
    round_money(&discounted.max(BigDecimal::zero()))
}

/// Discount as a percentage of the list price, one decimal place.
///
/// Percentage promotions report their configured value. Every other type is
/// derived from the per-unit discount, so buy-one-get-one reports 100.
pub fn discount_percentage(price: &BigDecimal, current: Option<&Promotion>) -> BigDecimal {
    let Some(promotion) = current else {
        return BigDecimal::zero();
    };
    if *price <= BigDecimal::zero() {
        return BigDecimal::zero();
    }

    match promotion.discount_type {
        DiscountType::Percentage => promotion.discount_value.clone(),
        _ => {
            let share = promotion.calculate_discount(price) * BigDecimal::from(100) / price;
            share.with_scale_round(1, RoundingMode::HalfUp)
        }
    }
}

pub fn round_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// Everything a storefront needs to show a product's price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price: BigDecimal,
    /// Crossed-out price: the stored one, or the list price while a promotion runs.
    pub old_price: Option<BigDecimal>,
    pub sale_price: BigDecimal,
    pub discount_amount: BigDecimal,
    pub discount_percentage: BigDecimal,
    pub promotion: Option<Promotion>,
}

impl PriceQuote {
    pub fn new(
        price: &BigDecimal,
        stored_old_price: Option<&BigDecimal>,
        current: Option<&Promotion>,
    ) -> Self {
        let old_price = match (stored_old_price, current) {
            (Some(old), _) => Some(old.clone()),
            (None, Some(_)) => Some(price.clone()),
            (None, None) => None,
        };

        PriceQuote {
            price: price.clone(),
            old_price,
            sale_price: sale_price(price, current),
            discount_amount: discount_amount(price, current),
            discount_percentage: discount_percentage(price, current),
            promotion: current.cloned(),
        }
    }

    pub fn for_product(
        product: &Product,
        links: &[(ProductPromotion, Promotion)],
        now: DateTime<Utc>,
    ) -> Self {
        let current = current_promotion(links, now);
        PriceQuote::new(&product.price, product.old_price.as_ref(), current)
    }

    pub fn has_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}
