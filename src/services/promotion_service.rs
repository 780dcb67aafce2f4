use crate::data::database::Database;
use crate::data::models::product::Product;
use crate::data::models::product_promotion::{NewProductPromotion, ProductPromotion};
use crate::data::models::promotion::{NewPromotion, Promotion, UpdatePromotion};
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::implementors::promotion_repo::PromotionRepo;
use crate::data::repos::traits::repository::Repository;
use crate::pricing::schedule::default_window;
use crate::pricing::{DiscountType, PromotionError};
use crate::services::errors::PromotionServiceError;
use crate::utils::slug::slugify;
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 10;

/// Admin input for a new promotion, before defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionDraft {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub short_description: String,
    pub discount_type: DiscountType,
    pub discount_value: BigDecimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl PromotionDraft {
    pub fn validate(&self) -> Result<(), PromotionError> {
        if self.name.trim().is_empty() {
            return Err(PromotionError::EmptyName);
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start >= end {
                return Err(PromotionError::EndBeforeStart);
            }
        }

        if self.discount_value < BigDecimal::zero() {
            return Err(PromotionError::NegativeDiscount);
        }

        if self.discount_type == DiscountType::Percentage
            && self.discount_value > BigDecimal::from(100)
        {
            return Err(PromotionError::PercentageOutOfRange);
        }

        Ok(())
    }

    /// Validates, fills in the schedule window and derives a missing slug.
    pub fn into_new_promotion(self, now: DateTime<Utc>) -> Result<NewPromotion, PromotionError> {
        self.validate()?;

        let (start, end) = default_window(self.start_date, self.end_date, now);
        if start >= end {
            return Err(PromotionError::EndBeforeStart);
        }

        let slug = match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(&self.name),
        };
        let slug = if slug.is_empty() {
            format!("promotion-{}", &uuid::Uuid::new_v4().simple().to_string()[..8])
        } else {
            slug
        };

        Ok(NewPromotion {
            name: self.name.trim().to_string(),
            slug,
            description: self.description,
            short_description: self.short_description,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            start_date: Some(start),
            end_date: Some(end),
            is_active: self.is_active,
        })
    }
}

pub fn validate_priority(priority: i32) -> Result<i32, PromotionError> {
    if (MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        Ok(priority)
    } else {
        Err(PromotionError::PriorityOutOfRange(priority))
    }
}

#[derive(Debug, Clone)]
pub struct PromotionDetail {
    pub promotion: Promotion,
    pub products: Vec<(ProductPromotion, Product)>,
}

pub struct PromotionService {
    promotions: PromotionRepo,
    products: ProductRepo,
}

impl PromotionService {
    pub fn new(db: &Database) -> Self {
        PromotionService {
            promotions: PromotionRepo::new(db.clone()),
            products: ProductRepo::new(db.clone()),
        }
    }

    pub async fn create(
        &self,
        draft: PromotionDraft,
        now: DateTime<Utc>,
    ) -> Result<Promotion, PromotionServiceError> {
        let new_promotion = draft.into_new_promotion(now)?;

        match self.promotions.add(new_promotion).await {
            Ok(promotion) => {
                tracing::info!(id = promotion.id, slug = %promotion.slug, "Promotion created");
                Ok(promotion)
            }
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(PromotionServiceError::PromotionAlreadyExists)
            }
            Err(e) => {
                tracing::error!("Failed to create promotion: {}", e);
                Err(PromotionServiceError::DatabaseError)
            }
        }
    }

    pub async fn detail(&self, slug: &str) -> Result<PromotionDetail, PromotionServiceError> {
        let promotion = self
            .promotions
            .get_by_slug(slug)
            .await
            .map_err(|_| PromotionServiceError::DatabaseError)?
            .ok_or(PromotionServiceError::PromotionNotFound)?;

        let products = self
            .promotions
            .products_for(promotion.id)
            .await
            .map_err(|_| PromotionServiceError::DatabaseError)?;

        Ok(PromotionDetail { promotion, products })
    }

    pub async fn list_current(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Promotion>, PromotionServiceError> {
        self.promotions
            .get_current(now)
            .await
            .map_err(|_| PromotionServiceError::DatabaseError)
    }

    /// Links a product with `priority`; linking again only updates the
    /// priority.
    pub async fn link(
        &self,
        product_id: i32,
        promotion_id: i32,
        priority: i32,
    ) -> Result<ProductPromotion, PromotionServiceError> {
        let priority = validate_priority(priority)?;

        self.products
            .get_by_id(product_id)
            .await
            .map_err(|_| PromotionServiceError::DatabaseError)?
            .ok_or(PromotionServiceError::ProductNotFound)?;
        self.promotions
            .get_by_id(promotion_id)
            .await
            .map_err(|_| PromotionServiceError::DatabaseError)?
            .ok_or(PromotionServiceError::PromotionNotFound)?;

        self.promotions
            .link(NewProductPromotion {
                product_id,
                promotion_id,
                priority,
            })
            .await
            .map_err(|_| PromotionServiceError::DatabaseError)
    }

    pub async fn unlink(
        &self,
        product_id: i32,
        promotion_id: i32,
    ) -> Result<(), PromotionServiceError> {
        match self.promotions.unlink(product_id, promotion_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(PromotionServiceError::LinkNotFound),
            Err(_) => Err(PromotionServiceError::DatabaseError),
        }
    }

    /// Switches a promotion off without touching its dates.
    pub async fn deactivate(
        &self,
        promotion_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Promotion, PromotionServiceError> {
        match self
            .promotions
            .update(
                promotion_id,
                UpdatePromotion {
                    is_active: Some(false),
                    updated_at: now,
                },
            )
            .await
        {
            Ok(promotion) => Ok(promotion),
            Err(DieselError::NotFound) => Err(PromotionServiceError::PromotionNotFound),
            Err(_) => Err(PromotionServiceError::DatabaseError),
        }
    }
}
