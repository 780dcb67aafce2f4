use crate::data::database::Database;
use crate::data::models::product::Product;
use crate::data::models::product_promotion::{NewProductPromotion, ProductPromotion};
use crate::data::models::promotion::{NewPromotion, Promotion, UpdatePromotion};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct PromotionRepo {
    db: Database,
}

impl PromotionRepo {
    pub fn new(db: Database) -> Self {
        PromotionRepo { db }
    }

    pub async fn get_by_slug(&self, slug_query: &str) -> Result<Option<Promotion>, result::Error> {
        use crate::data::models::schema::promotions::dsl::{promotions, slug};

        let mut conn = self.db.connection().await?;

        promotions
            .filter(slug.eq(slug_query))
            .select(Promotion::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Active promotions whose window contains `now`, ending soonest first.
    pub async fn get_current(&self, now: DateTime<Utc>) -> Result<Vec<Promotion>, result::Error> {
        use crate::data::models::schema::promotions::dsl::{
            end_date, is_active, promotions, start_date,
        };

        let mut conn = self.db.connection().await?;

        promotions
            .filter(is_active.eq(true))
            .filter(start_date.le(now))
            .filter(end_date.ge(now))
            .order(end_date.asc())
            .select(Promotion::as_select())
            .load(&mut conn)
            .await
    }

    /// Every promotion linked to `product`, current or not, with its link.
    pub async fn links_for_product(
        &self,
        product: i32,
    ) -> Result<Vec<(ProductPromotion, Promotion)>, result::Error> {
        use crate::data::models::schema::product_promotions::dsl::{product_id, product_promotions};
        use crate::data::models::schema::promotions;

        let mut conn = self.db.connection().await?;

        product_promotions
            .inner_join(promotions::table)
            .filter(product_id.eq(product))
            .select((ProductPromotion::as_select(), Promotion::as_select()))
            .load(&mut conn)
            .await
    }

    /// Links for a batch of products, keyed by product id.
    pub async fn links_for_products(
        &self,
        product_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<(ProductPromotion, Promotion)>>, result::Error> {
        use crate::data::models::schema::product_promotions::dsl::{product_id, product_promotions};
        use crate::data::models::schema::promotions;

        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn = self.db.connection().await?;

        let rows: Vec<(ProductPromotion, Promotion)> = product_promotions
            .inner_join(promotions::table)
            .filter(product_id.eq_any(product_ids.to_vec()))
            .select((ProductPromotion::as_select(), Promotion::as_select()))
            .load(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<(ProductPromotion, Promotion)>> = HashMap::new();
        for row in rows {
            map.entry(row.0.product_id).or_default().push(row);
        }

        Ok(map)
    }

    /// Products a promotion is attached to, highest priority first.
    pub async fn products_for(
        &self,
        promotion: i32,
    ) -> Result<Vec<(ProductPromotion, Product)>, result::Error> {
        use crate::data::models::schema::product_promotions::dsl::{
            priority, product_promotions, promotion_id,
        };
        use crate::data::models::schema::products;

        let mut conn = self.db.connection().await?;

        product_promotions
            .inner_join(products::table)
            .filter(promotion_id.eq(promotion))
            .order(priority.desc())
            .select((ProductPromotion::as_select(), Product::as_select()))
            .load(&mut conn)
            .await
    }

    /// Links a product to a promotion; relinking only changes the priority.
    pub async fn link(&self, item: NewProductPromotion) -> Result<ProductPromotion, result::Error> {
        use crate::data::models::schema::product_promotions::dsl::{
            priority, product_id, product_promotions, promotion_id,
        };

        let mut conn = self.db.connection().await?;

        diesel::insert_into(product_promotions)
            .values(&item)
            .on_conflict((product_id, promotion_id))
            .do_update()
            .set(priority.eq(excluded(priority)))
            .returning(ProductPromotion::as_returning())
            .get_result(&mut conn)
            .await
    }

    /// Returns whether a link existed.
    pub async fn unlink(&self, product: i32, promotion: i32) -> Result<bool, result::Error> {
        use crate::data::models::schema::product_promotions::dsl::{
            product_id, product_promotions, promotion_id,
        };

        let mut conn = self.db.connection().await?;

        let removed = diesel::delete(
            product_promotions
                .filter(product_id.eq(product))
                .filter(promotion_id.eq(promotion)),
        )
        .execute(&mut conn)
        .await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl Repository for PromotionRepo {
    type Id = i32;
    type Item = Promotion;
    type NewItem<'a> = NewPromotion;
    type UpdateForm<'a> = UpdatePromotion;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::promotions::dsl::{created_at, promotions};

        let mut conn = self.db.connection().await?;

        match promotions
            .order(created_at.desc())
            .select(Promotion::as_select())
            .load(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::promotions::dsl::promotions;

        let mut conn = self.db.connection().await?;

        promotions
            .find(id)
            .select(Promotion::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::promotions::dsl::promotions;

        let mut conn = self.db.connection().await?;

        diesel::insert_into(promotions)
            .values(&item)
            .returning(Promotion::as_returning())
            .get_result(&mut conn)
            .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::promotions::dsl::promotions;

        let mut conn = self.db.connection().await?;

        diesel::update(promotions.find(id))
            .set(&item)
            .returning(Promotion::as_returning())
            .get_result(&mut conn)
            .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::promotions::dsl::promotions;

        let mut conn = self.db.connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(promotions.find(id)).execute(connection).await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
