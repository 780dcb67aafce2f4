use crate::data::database::Database;
use crate::data::models::cart::NewCartItem;
use crate::data::models::product::Product;
use crate::data::repos::implementors::cart_repo::CartRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::implementors::promotion_repo::PromotionRepo;
use crate::data::repos::traits::repository::Repository;
use crate::images::ImageResolver;
use crate::pricing::PriceQuote;
use crate::services::errors::CartServiceError;
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
    pub quote: PriceQuote,
    pub image_url: Option<String>,
}

impl CartLine {
    /// Sale price times quantity.
    pub fn line_total(&self) -> BigDecimal {
        &self.quote.sale_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
}

impl CartView {
    pub fn total(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.line_total())
    }

    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct CartService {
    cart: CartRepo,
    products: ProductRepo,
    promotions: PromotionRepo,
    resolver: ImageResolver,
}

impl CartService {
    pub fn new(db: &Database, resolver: ImageResolver) -> Self {
        CartService {
            cart: CartRepo::new(db.clone()),
            products: ProductRepo::new(db.clone()),
            promotions: PromotionRepo::new(db.clone()),
            resolver,
        }
    }

    /// Adds `quantity` units of a product, merging with an existing line.
    pub async fn add(
        &self,
        session: &str,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), CartServiceError> {
        if quantity < 1 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let product = self
            .products
            .get_by_id(product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::ProductNotFound)?;

        if !product.available {
            return Err(CartServiceError::ProductUnavailable);
        }

        self.cart
            .add_or_increment(NewCartItem {
                session_key: session,
                product_id,
                quantity,
            })
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        tracing::info!(session = %session, product_id, quantity, "Added to cart");
        Ok(())
    }

    /// Sets a line's quantity; zero or less removes it.
    pub async fn update(
        &self,
        session: &str,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), CartServiceError> {
        let updated = self
            .cart
            .set_quantity(session, product_id, quantity)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        if updated.is_none() && quantity > 0 {
            return Err(CartServiceError::ItemNotFound);
        }
        Ok(())
    }

    pub async fn remove(&self, session: &str, product_id: i32) -> Result<(), CartServiceError> {
        match self.cart.remove(session, product_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(CartServiceError::ItemNotFound),
            Err(_) => Err(CartServiceError::DatabaseError),
        }
    }

    pub async fn view(
        &self,
        session: &str,
        now: DateTime<Utc>,
    ) -> Result<CartView, CartServiceError> {
        let rows = self
            .cart
            .get_by_session(session)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        let ids: Vec<i32> = rows.iter().map(|(_, product)| product.id).collect();
        let mut links = self
            .promotions
            .links_for_products(&ids)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?;

        let lines = rows
            .into_iter()
            .map(|(item, product)| {
                let product_links = links.remove(&product.id).unwrap_or_default();
                CartLine {
                    quote: PriceQuote::for_product(&product, &product_links, now),
                    image_url: self.resolver.resolve(&product),
                    quantity: item.quantity,
                    product,
                }
            })
            .collect();

        Ok(CartView { lines })
    }
}
