use crate::data::database::Database;
use crate::data::models::category::Category;
use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::repos::traits::repository::Repository;
use crate::images::ImageSources;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct ProductRepo {
    db: Database,
}

impl ProductRepo {
    pub fn new(db: Database) -> Self {
        ProductRepo { db }
    }

    /// Available products, newest first.
    pub async fn get_available(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{available, created, products};

        let mut conn = self.db.connection().await?;

        products
            .filter(available.eq(true))
            .order(created.desc())
            .limit(limit)
            .offset(offset)
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    /// Available products in catalogue order, for the home page.
    pub async fn get_featured(&self, limit: i64) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{available, name, products, stock};

        let mut conn = self.db.connection().await?;

        products
            .filter(available.eq(true))
            .order((stock.desc(), name.asc()))
            .limit(limit)
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    pub async fn count_available(&self) -> Result<i64, result::Error> {
        use crate::data::models::schema::products::dsl::{available, products};

        let mut conn = self.db.connection().await?;

        products
            .filter(available.eq(true))
            .count()
            .get_result(&mut conn)
            .await
    }

    pub async fn get_by_category(&self, category: i32) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{
            available, category_id, name, products,
        };

        let mut conn = self.db.connection().await?;

        products
            .filter(category_id.eq(category))
            .filter(available.eq(true))
            .order(name.asc())
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    /// Every product in `category`, available or not.
    pub async fn get_all_in_category(&self, category: i32) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{category_id, products};

        let mut conn = self.db.connection().await?;

        products
            .filter(category_id.eq(category))
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    /// Up to `limit` other available products from the same category.
    pub async fn get_related(
        &self,
        product: &Product,
        limit: i64,
    ) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{
            available, category_id, created, id, products,
        };

        let mut conn = self.db.connection().await?;

        products
            .filter(category_id.eq(product.category_id))
            .filter(id.ne(product.id))
            .filter(available.eq(true))
            .order(created.desc())
            .limit(limit)
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    /// Every available product by name; what a blank search shows.
    pub async fn get_all_available(&self) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{available, name, products};

        let mut conn = self.db.connection().await?;

        products
            .filter(available.eq(true))
            .order(name.asc())
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    /// Case-insensitive substring match on name, brand, material and
    /// description.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{
            available, brand, description, material, name, products,
        };

        let pattern = format!("%{}%", escape_like(query.trim()));
        let mut conn = self.db.connection().await?;

        products
            .filter(available.eq(true))
            .filter(
                name.ilike(&pattern)
                    .or(brand.ilike(&pattern))
                    .or(material.ilike(&pattern))
                    .or(description.ilike(&pattern)),
            )
            .order(name.asc())
            .select(Product::as_select())
            .load(&mut conn)
            .await
    }

    /// An available product with its category. Hidden products are not found.
    pub async fn get_by_slug(
        &self,
        slug_query: &str,
    ) -> Result<Option<(Product, Category)>, result::Error> {
        use crate::data::models::schema::categories;
        use crate::data::models::schema::products::dsl::{available, products, slug};

        let mut conn = self.db.connection().await?;

        products
            .inner_join(categories::table)
            .filter(slug.eq(slug_query))
            .filter(available.eq(true))
            .select((Product::as_select(), Category::as_select()))
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn set_image_sources(
        &self,
        product_id: i32,
        sources: &ImageSources,
    ) -> Result<Product, result::Error> {
        use crate::data::models::schema::products::dsl::{
            image, image_file, image_url, products, updated,
        };

        let mut conn = self.db.connection().await?;

        diesel::update(products.find(product_id))
            .set((
                image.eq(sources.storage_path.as_deref()),
                image_file.eq(sources.local_file.as_deref()),
                image_url.eq(sources.external_url.as_deref()),
                updated.eq(chrono::Utc::now()),
            ))
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
    }
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl Repository for ProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem<'a> = NewProduct<'a>;
    type UpdateForm<'a> = UpdateProduct<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::products::dsl::{created, products};

        let mut conn = self.db.connection().await?;

        match products
            .order(created.desc())
            .select(Product::as_select())
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
        use crate::data::models::schema::products::dsl::products;

        let mut conn = self.db.connection().await?;

        products
            .find(id)
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = self.db.connection().await?;

        diesel::insert_into(products)
            .values(&item)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = self.db.connection().await?;

        diesel::update(products.find(id))
            .set(&item)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = self.db.connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(products.find(id)).execute(connection).await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
    }
}
