use crate::data::database::Database;
use crate::data::models::category::Category;
use crate::data::models::product::Product;
use crate::data::models::product_image::{NewProductImage, ProductImage};
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::implementors::product_image_repo::ProductImageRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::images::{HasImageSources, ImageUploader};
use crate::services::errors::ImageServiceError;
use bytes::Bytes;

/// Image uploads and the storage cleanup that follows entity deletes.
pub struct ImageService {
    categories: CategoryRepo,
    products: ProductRepo,
    gallery: ProductImageRepo,
    uploader: ImageUploader,
}

impl ImageService {
    pub fn new(db: &Database, uploader: ImageUploader) -> Self {
        ImageService {
            categories: CategoryRepo::new(db.clone()),
            products: ProductRepo::new(db.clone()),
            gallery: ProductImageRepo::new(db.clone()),
            uploader,
        }
    }

    /// Replaces a category's picture. The previous remote object is removed
    /// once the new key is saved.
    pub async fn upload_category_image(
        &self,
        category_id: i32,
        file_name: &str,
        content: Bytes,
    ) -> Result<Category, ImageServiceError> {
        if content.is_empty() {
            return Err(ImageServiceError::EmptyUpload);
        }

        let category = self
            .categories
            .get_by_id(category_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?
            .ok_or(ImageServiceError::NotFound)?;

        let sources = self
            .uploader
            .upload(&category, file_name, content)
            .await
            .ok_or(ImageServiceError::UploadFailed)?;

        let saved = self.categories.set_image_sources(category_id, &sources).await;
        let updated = self
            .uploader
            .discard_on_error(&sources, saved)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record uploaded image: {}", e);
                ImageServiceError::DatabaseError
            })?;

        self.purge_replaced(&category, &updated).await;
        Ok(updated)
    }

    pub async fn upload_product_image(
        &self,
        product_id: i32,
        file_name: &str,
        content: Bytes,
    ) -> Result<Product, ImageServiceError> {
        if content.is_empty() {
            return Err(ImageServiceError::EmptyUpload);
        }

        let product = self
            .products
            .get_by_id(product_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?
            .ok_or(ImageServiceError::NotFound)?;

        let sources = self
            .uploader
            .upload(&product, file_name, content)
            .await
            .ok_or(ImageServiceError::UploadFailed)?;

        let saved = self.products.set_image_sources(product_id, &sources).await;
        let updated = self
            .uploader
            .discard_on_error(&sources, saved)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record uploaded image: {}", e);
                ImageServiceError::DatabaseError
            })?;

        self.purge_replaced(&product, &updated).await;
        Ok(updated)
    }

    /// Uploads a new gallery picture and appends it to the product.
    pub async fn add_gallery_image(
        &self,
        product_id: i32,
        file_name: &str,
        content: Bytes,
        alt_text: &str,
        sort_order: i32,
    ) -> Result<ProductImage, ImageServiceError> {
        if content.is_empty() {
            return Err(ImageServiceError::EmptyUpload);
        }

        self.products
            .get_by_id(product_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?
            .ok_or(ImageServiceError::NotFound)?;

        let sources = self
            .uploader
            .upload_new(ProductImage::UPLOAD_FOLDER, file_name, content)
            .await
            .ok_or(ImageServiceError::UploadFailed)?;

        let new_image = NewProductImage {
            product_id,
            image: sources.storage_path(),
            image_file: None,
            image_url: None,
            alt_text,
            sort_order: sort_order.max(0),
        };

        let saved = self.gallery.add(new_image).await;
        self.uploader
            .discard_on_error(&sources, saved)
            .await
            .map_err(|e| {
                tracing::error!("Failed to save gallery image row: {}", e);
                ImageServiceError::DatabaseError
            })
    }

    /// Deletes a product with its gallery, then their remote pictures.
    pub async fn delete_product(&self, product_id: i32) -> Result<(), ImageServiceError> {
        let product = self
            .products
            .get_by_id(product_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?
            .ok_or(ImageServiceError::NotFound)?;
        let gallery = self
            .gallery
            .get_by_product(product_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?;

        self.products
            .delete(product_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?;

        self.uploader.purge(&product).await;
        for image in &gallery {
            self.uploader.purge(image).await;
        }
        Ok(())
    }

    pub async fn delete_gallery_image(&self, image_id: i32) -> Result<(), ImageServiceError> {
        let image = self
            .gallery
            .get_by_id(image_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?
            .ok_or(ImageServiceError::NotFound)?;

        self.gallery
            .delete(image_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?;

        self.uploader.purge(&image).await;
        Ok(())
    }

    /// Deletes a category; its products and their galleries cascade, and
    /// every remote picture involved is purged afterwards.
    pub async fn delete_category(&self, category_id: i32) -> Result<(), ImageServiceError> {
        let category = self
            .categories
            .get_by_id(category_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?
            .ok_or(ImageServiceError::NotFound)?;
        let products = self
            .products
            .get_all_in_category(category_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?;
        let gallery = self
            .gallery
            .get_by_category(category_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?;

        self.categories
            .delete(category_id)
            .await
            .map_err(|_| ImageServiceError::DatabaseError)?;

        self.uploader.purge(&category).await;
        for product in &products {
            self.uploader.purge(product).await;
        }
        for image in &gallery {
            self.uploader.purge(image).await;
        }

        tracing::info!(
            category_id,
            products = products.len(),
            gallery = gallery.len(),
            "Category deleted"
        );
        Ok(())
    }

    async fn purge_replaced<E: HasImageSources>(&self, previous: &E, current: &E) {
        let old = previous.image_sources();
        let new = current.image_sources();
        if let Some(old_key) = old.storage_path() {
            if new.storage_path() != Some(old_key) {
                self.uploader.purge_key(old_key).await;
            }
        }
    }
}
