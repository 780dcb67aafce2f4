use crate::data::database::Database;
use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::repos::traits::repository::Repository;
use crate::images::ImageSources;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CategoryRepo {
    db: Database,
}

impl CategoryRepo {
    pub fn new(db: Database) -> Self {
        CategoryRepo { db }
    }

    pub async fn get_by_slug(&self, slug_query: &str) -> Result<Option<Category>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, slug};

        let mut conn = self.db.connection().await?;

        categories
            .filter(slug.eq(slug_query))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Overwrites all three image columns with `sources`.
    pub async fn set_image_sources(
        &self,
        id: i32,
        sources: &ImageSources,
    ) -> Result<Category, result::Error> {
        use crate::data::models::schema::categories::dsl::{
            categories, image, image_file, image_url,
        };

        let mut conn = self.db.connection().await?;

        diesel::update(categories.find(id))
            .set((
                image.eq(sources.storage_path.as_deref()),
                image_file.eq(sources.local_file.as_deref()),
                image_url.eq(sources.external_url.as_deref()),
            ))
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
    }
}

#[async_trait]
impl Repository for CategoryRepo {
    type Id = i32;
    type Item = Category;
    type NewItem<'a> = NewCategory<'a>;
    type UpdateForm<'a> = UpdateCategory<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, name};

        let mut conn = self.db.connection().await?;

        match categories
            .order(name.asc())
            .select(Category::as_select())
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
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = self.db.connection().await?;

        categories
            .find(id)
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = self.db.connection().await?;

        diesel::insert_into(categories)
            .values(&item)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = self.db.connection().await?;

        diesel::update(categories.find(id))
            .set(&item)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
    }

    /// Products and their galleries go with the category through the
    /// cascading foreign keys.
    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = self.db.connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(categories.find(id)).execute(connection).await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
