use crate::data::database::Database;
use crate::data::models::cart::{CartItem, NewCartItem};
use crate::data::models::product::Product;
use diesel::prelude::*;
use diesel::result;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

/// Session-keyed cart lines.
pub struct CartRepo {
    db: Database,
}

impl CartRepo {
    pub fn new(db: Database) -> Self {
        CartRepo { db }
    }

    pub async fn get_by_session(
        &self,
        session: &str,
    ) -> Result<Vec<(CartItem, Product)>, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_items, created, session_key};
        use crate::data::models::schema::products;

        let mut conn = self.db.connection().await?;

        cart_items
            .inner_join(products::table)
            .filter(session_key.eq(session))
            .order(created.asc())
            .select((CartItem::as_select(), Product::as_select()))
            .load(&mut conn)
            .await
    }

    /// Adds `item.quantity` units, merging with an existing line for the
    /// same product.
    pub async fn add_or_increment(&self, item: NewCartItem<'_>) -> Result<CartItem, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{
            cart_items, product_id, quantity, session_key,
        };

        let mut conn = self.db.connection().await?;

        diesel::insert_into(cart_items)
            .values(&item)
            .on_conflict((session_key, product_id))
            .do_update()
            .set(quantity.eq(quantity + excluded(quantity)))
            .returning(CartItem::as_returning())
            .get_result(&mut conn)
            .await
    }

    /// Sets a line's quantity. Zero or less removes the line and yields `None`.
    pub async fn set_quantity(
        &self,
        session: &str,
        product: i32,
        new_quantity: i32,
    ) -> Result<Option<CartItem>, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{
            cart_items, product_id, quantity, session_key,
        };

        if new_quantity <= 0 {
            self.remove(session, product).await?;
            return Ok(None);
        }

        let mut conn = self.db.connection().await?;

        diesel::update(
            cart_items
                .filter(session_key.eq(session))
                .filter(product_id.eq(product)),
        )
        .set(quantity.eq(new_quantity))
        .returning(CartItem::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
    }

    pub async fn remove(&self, session: &str, product: i32) -> Result<bool, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_items, product_id, session_key};

        let mut conn = self.db.connection().await?;

        let removed = diesel::delete(
            cart_items
                .filter(session_key.eq(session))
                .filter(product_id.eq(product)),
        )
        .execute(&mut conn)
        .await?;

        Ok(removed > 0)
    }
}
