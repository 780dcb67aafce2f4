use crate::data::database::Database;
use crate::data::models::category::Category;
use crate::data::models::product::Product;
use crate::data::models::product_image::ProductImage;
use crate::data::models::product_promotion::ProductPromotion;
use crate::data::models::promotion::Promotion;
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::implementors::product_image_repo::ProductImageRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::implementors::promotion_repo::PromotionRepo;
use crate::data::repos::traits::repository::Repository;
use crate::images::ImageResolver;
use crate::pricing::{PriceQuote, current_promotion};
use crate::services::errors::CatalogServiceError;
use chrono::{DateTime, Utc};

pub const HOME_PAGE_SIZE: i64 = 8;
pub const RELATED_PRODUCTS: i64 = 4;

/// A product as the storefront lists it.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub product: Product,
    pub quote: PriceQuote,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryView {
    pub category: Category,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub image: ProductImage,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub card: ProductCard,
    pub category: CategoryView,
    pub gallery: Vec<GalleryImage>,
    pub related: Vec<ProductCard>,
}

#[derive(Debug, Clone)]
pub struct CategoryDetail {
    pub category: CategoryView,
    pub products: Vec<ProductCard>,
}

#[derive(Debug, Clone)]
pub struct HomePage {
    pub categories: Vec<CategoryView>,
    pub featured: Vec<ProductCard>,
    pub newest: Vec<ProductCard>,
    pub promotions: Vec<Promotion>,
    pub available_count: i64,
}

pub struct CatalogService {
    categories: CategoryRepo,
    products: ProductRepo,
    images: ProductImageRepo,
    promotions: PromotionRepo,
    resolver: ImageResolver,
}

impl CatalogService {
    pub fn new(db: &Database, resolver: ImageResolver) -> Self {
        CatalogService {
            categories: CategoryRepo::new(db.clone()),
            products: ProductRepo::new(db.clone()),
            images: ProductImageRepo::new(db.clone()),
            promotions: PromotionRepo::new(db.clone()),
            resolver,
        }
    }

    pub async fn home(&self, now: DateTime<Utc>) -> Result<HomePage, CatalogServiceError> {
        let categories = self.list_categories().await?;
        let featured = self
            .products
            .get_featured(HOME_PAGE_SIZE)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;
        let newest = self
            .products
            .get_available(HOME_PAGE_SIZE, 0)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;
        let promotions = self
            .promotions
            .get_current(now)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;
        let available_count = self
            .products
            .count_available()
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(HomePage {
            categories,
            featured: self.cards(featured, now).await?,
            newest: self.cards(newest, now).await?,
            promotions,
            available_count,
        })
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryView>, CatalogServiceError> {
        let categories = self
            .categories
            .get_all()
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .unwrap_or_default();

        Ok(categories
            .into_iter()
            .map(|category| self.category_view(category))
            .collect())
    }

    pub async fn category_detail(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<CategoryDetail, CatalogServiceError> {
        let category = self
            .categories
            .get_by_slug(slug)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .ok_or(CatalogServiceError::CategoryNotFound)?;

        let products = self
            .products
            .get_by_category(category.id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(CategoryDetail {
            category: self.category_view(category),
            products: self.cards(products, now).await?,
        })
    }

    pub async fn product_detail(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<ProductDetail, CatalogServiceError> {
        let (product, category) = self
            .products
            .get_by_slug(slug)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .ok_or(CatalogServiceError::ProductNotFound)?;

        let links = self
            .promotions
            .links_for_product(product.id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        let gallery = self
            .images
            .get_by_product(product.id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .into_iter()
            .map(|image| GalleryImage {
                url: self.resolver.resolve(&image),
                image,
            })
            .collect();

        let related = self
            .products
            .get_related(&product, RELATED_PRODUCTS)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(ProductDetail {
            card: self.card(product, &links, now),
            category: self.category_view(category),
            gallery,
            related: self.cards(related, now).await?,
        })
    }

    /// A blank query lists every available product.
    pub async fn search(
        &self,
        query: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ProductCard>, CatalogServiceError> {
        let products = if query.trim().is_empty() {
            self.products.get_all_available().await
        } else {
            self.products.search(query).await
        }
        .map_err(|_| CatalogServiceError::DatabaseError)?;

        self.cards(products, now).await
    }

    /// The promotion currently applied to a product, if any.
    pub async fn current_promotion(
        &self,
        product_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Promotion>, CatalogServiceError> {
        let links = self
            .promotions
            .links_for_product(product_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(current_promotion(&links, now).cloned())
    }

    /// Prices a batch of products with one promotions query.
    pub async fn cards(
        &self,
        products: Vec<Product>,
        now: DateTime<Utc>,
    ) -> Result<Vec<ProductCard>, CatalogServiceError> {
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut links = self
            .promotions
            .links_for_products(&ids)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(products
            .into_iter()
            .map(|product| {
                let product_links = links.remove(&product.id).unwrap_or_default();
                self.card(product, &product_links, now)
            })
            .collect())
    }

    fn card(
        &self,
        product: Product,
        links: &[(ProductPromotion, Promotion)],
        now: DateTime<Utc>,
    ) -> ProductCard {
        ProductCard {
            quote: PriceQuote::for_product(&product, links, now),
            image_url: self.resolver.resolve(&product),
            product,
        }
    }

    fn category_view(&self, category: Category) -> CategoryView {
        CategoryView {
            image_url: self.resolver.resolve(&category),
            category,
        }
    }
}

