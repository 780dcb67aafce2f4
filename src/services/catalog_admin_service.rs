use crate::data::database::Database;
use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::models::product::{NewProduct, Product, Unit, UpdateProduct};
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CatalogAdminServiceError;
use crate::utils::slug::slugify;
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::str::FromStr;

const NAME_MAX: usize = 200;
const SLUG_MAX: usize = 200;

/// Uses the given slug when it has any letters or digits, otherwise derives
/// one from `name`.
pub fn resolve_slug(slug: Option<&str>, name: &str) -> String {
    match slug.map(slugify) {
        Some(slug) if !slug.is_empty() => slug,
        _ => slugify(name),
    }
}

fn too_long(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

fn finish(invalid: Vec<String>) -> Result<(), CatalogAdminServiceError> {
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CatalogAdminServiceError::InvalidForm(invalid))
    }
}

/// Admin input for creating or replacing a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub image_url: Option<String>,
}

impl CategoryDraft {
    pub fn slug(&self) -> String {
        resolve_slug(self.slug.as_deref(), &self.name)
    }

    pub fn validate(&self) -> Result<(), CatalogAdminServiceError> {
        let mut invalid = Vec::new();

        let name = self.name.trim();
        if name.is_empty() || too_long(name, NAME_MAX) {
            invalid.push("name".to_string());
        }
        let slug = self.slug();
        if slug.is_empty() || too_long(&slug, SLUG_MAX) {
            invalid.push("slug".to_string());
        }
        if self.image_url.as_deref().is_some_and(|url| too_long(url, 500)) {
            invalid.push("image_url".to_string());
        }

        finish(invalid)
    }
}

/// Admin input for creating or replacing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub category_id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub brand: String,
    pub description: String,
    pub price: BigDecimal,
    pub old_price: Option<BigDecimal>,
    pub unit: String,
    pub stock: i32,
    pub available: bool,
    pub weight: Option<BigDecimal>,
    pub dimensions: String,
    pub color: String,
    pub material: String,
    pub image_url: Option<String>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        ProductDraft {
            category_id: 0,
            name: String::new(),
            slug: None,
            brand: String::new(),
            description: String::new(),
            price: BigDecimal::zero(),
            old_price: None,
            unit: Unit::Piece.as_str().to_string(),
            stock: 0,
            available: true,
            weight: None,
            dimensions: String::new(),
            color: String::new(),
            material: String::new(),
            image_url: None,
        }
    }
}

impl ProductDraft {
    pub fn slug(&self) -> String {
        resolve_slug(self.slug.as_deref(), &self.name)
    }

    /// Lists every invalid field, in form order.
    pub fn validate(&self) -> Result<(), CatalogAdminServiceError> {
        let mut invalid = Vec::new();
        let negative = |value: &BigDecimal| *value < BigDecimal::zero();

        let name = self.name.trim();
        if name.is_empty() || too_long(name, NAME_MAX) {
            invalid.push("name".to_string());
        }
        let slug = self.slug();
        if slug.is_empty() || too_long(&slug, SLUG_MAX) {
            invalid.push("slug".to_string());
        }
        if too_long(&self.brand, 100) {
            invalid.push("brand".to_string());
        }
        if negative(&self.price) {
            invalid.push("price".to_string());
        }
        if self.old_price.as_ref().is_some_and(negative) {
            invalid.push("old_price".to_string());
        }
        if Unit::from_str(&self.unit).is_err() {
            invalid.push("unit".to_string());
        }
        if self.stock < 0 {
            invalid.push("stock".to_string());
        }
        if self.weight.as_ref().is_some_and(negative) {
            invalid.push("weight".to_string());
        }
        if too_long(&self.dimensions, 100) {
            invalid.push("dimensions".to_string());
        }
        if too_long(&self.color, 50) {
            invalid.push("color".to_string());
        }
        if too_long(&self.material, 100) {
            invalid.push("material".to_string());
        }
        if self.image_url.as_deref().is_some_and(|url| too_long(url, 500)) {
            invalid.push("image_url".to_string());
        }

        finish(invalid)
    }
}

pub struct CatalogAdminService {
    categories: CategoryRepo,
    products: ProductRepo,
}

impl CatalogAdminService {
    pub fn new(db: &Database) -> Self {
        CatalogAdminService {
            categories: CategoryRepo::new(db.clone()),
            products: ProductRepo::new(db.clone()),
        }
    }

    pub async fn create_category(
        &self,
        draft: &CategoryDraft,
    ) -> Result<Category, CatalogAdminServiceError> {
        draft.validate()?;
        let slug = draft.slug();

        let created = self
            .categories
            .add(NewCategory {
                name: draft.name.trim(),
                slug: &slug,
                description: &draft.description,
                image_url: draft.image_url.as_deref(),
            })
            .await
            .map_err(|e| write_error(e, CatalogAdminServiceError::CategoryNotFound))?;

        tracing::info!(id = created.id, slug = %created.slug, "Category created");
        Ok(created)
    }

    pub async fn update_category(
        &self,
        id: i32,
        draft: &CategoryDraft,
    ) -> Result<Category, CatalogAdminServiceError> {
        draft.validate()?;
        let slug = draft.slug();

        self.categories
            .update(
                id,
                UpdateCategory {
                    name: draft.name.trim(),
                    slug: &slug,
                    description: &draft.description,
                },
            )
            .await
            .map_err(|e| write_error(e, CatalogAdminServiceError::CategoryNotFound))
    }

    pub async fn create_product(
        &self,
        draft: &ProductDraft,
    ) -> Result<Product, CatalogAdminServiceError> {
        draft.validate()?;
        let slug = draft.slug();

        let created = self
            .products
            .add(NewProduct {
                category_id: draft.category_id,
                name: draft.name.trim(),
                slug: &slug,
                brand: &draft.brand,
                description: &draft.description,
                price: draft.price.clone(),
                old_price: draft.old_price.clone(),
                unit: &draft.unit,
                stock: draft.stock,
                available: draft.available,
                weight: draft.weight.clone(),
                dimensions: &draft.dimensions,
                color: &draft.color,
                material: &draft.material,
                image_url: draft.image_url.as_deref(),
            })
            .await
            .map_err(|e| write_error(e, CatalogAdminServiceError::ProductNotFound))?;

        tracing::info!(id = created.id, slug = %created.slug, "Product created");
        Ok(created)
    }

    /// Replaces the product's editable fields. Its images stay as they are.
    pub async fn update_product(
        &self,
        id: i32,
        draft: &ProductDraft,
        now: DateTime<Utc>,
    ) -> Result<Product, CatalogAdminServiceError> {
        draft.validate()?;
        let slug = draft.slug();

        self.products
            .update(
                id,
                UpdateProduct {
                    category_id: draft.category_id,
                    name: draft.name.trim(),
                    slug: &slug,
                    brand: &draft.brand,
                    description: &draft.description,
                    price: draft.price.clone(),
                    old_price: draft.old_price.clone(),
                    unit: &draft.unit,
                    stock: draft.stock,
                    available: draft.available,
                    weight: draft.weight.clone(),
                    dimensions: &draft.dimensions,
                    color: &draft.color,
                    material: &draft.material,
                    updated: now,
                },
            )
            .await
            .map_err(|e| write_error(e, CatalogAdminServiceError::ProductNotFound))
    }
}

/// Maps a failed insert or update. `missing` is what a vanished row means
/// for the caller.
fn write_error(e: DieselError, missing: CatalogAdminServiceError) -> CatalogAdminServiceError {
    match e {
        DieselError::NotFound => missing,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CatalogAdminServiceError::SlugTaken
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            CatalogAdminServiceError::CategoryNotFound
        }
        e => {
            tracing::error!("Catalog write failed: {}", e);
            CatalogAdminServiceError::DatabaseError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_slug_falls_back_to_the_name() {
        assert_eq!(resolve_slug(None, "Цемент М500"), "tsement-m500");
        assert_eq!(resolve_slug(Some("   "), "Gravel 5-20"), "gravel-5-20");
        assert_eq!(resolve_slug(Some("!!"), "Sand"), "sand");
    }

    #[test]
    fn given_slug_is_normalised() {
        assert_eq!(resolve_slug(Some("Dry Mix"), "Ignored"), "dry-mix");
    }

    #[test]
    fn missing_row_maps_to_the_callers_not_found() {
        assert_eq!(
            write_error(DieselError::NotFound, CatalogAdminServiceError::ProductNotFound),
            CatalogAdminServiceError::ProductNotFound
        );
    }
}
