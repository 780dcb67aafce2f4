use crate::data::database::Database;
use crate::data::models::product_image::{NewProductImage, ProductImage};
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;

/// Gallery pictures attached to a product.
pub struct ProductImageRepo {
    db: Database,
}

impl ProductImageRepo {
    pub fn new(db: Database) -> Self {
        ProductImageRepo { db }
    }

    pub async fn get_by_product(&self, product: i32) -> Result<Vec<ProductImage>, result::Error> {
        use crate::data::models::schema::product_images::dsl::{
            id, product_id, product_images, sort_order,
        };

        let mut conn = self.db.connection().await?;

        product_images
            .filter(product_id.eq(product))
            .order((sort_order.asc(), id.asc()))
            .select(ProductImage::as_select())
            .load(&mut conn)
            .await
    }

    /// Every gallery picture of every product in `category`.
    pub async fn get_by_category(&self, category: i32) -> Result<Vec<ProductImage>, result::Error> {
        use crate::data::models::schema::product_images::dsl::{product_id, product_images};
        use crate::data::models::schema::products::dsl::{category_id, id as products_id, products};

        let mut conn = self.db.connection().await?;

        let product_ids = products
            .filter(category_id.eq(category))
            .select(products_id);

        product_images
            .filter(product_id.eq_any(product_ids))
            .select(ProductImage::as_select())
            .load(&mut conn)
            .await
    }

    pub async fn get_by_id(&self, image_id: i32) -> Result<Option<ProductImage>, result::Error> {
        use crate::data::models::schema::product_images::dsl::product_images;

        let mut conn = self.db.connection().await?;

        product_images
            .find(image_id)
            .select(ProductImage::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn add(&self, item: NewProductImage<'_>) -> Result<ProductImage, result::Error> {
        use crate::data::models::schema::product_images::dsl::product_images;

        let mut conn = self.db.connection().await?;

        diesel::insert_into(product_images)
            .values(&item)
            .returning(ProductImage::as_returning())
            .get_result(&mut conn)
            .await
    }

    pub async fn delete(&self, image_id: i32) -> Result<(), result::Error> {
        use crate::data::models::schema::product_images::dsl::product_images;

        let mut conn = self.db.connection().await?;

        diesel::delete(product_images.find(image_id))
            .execute(&mut conn)
            .await?;
        Ok(())
    }
}
