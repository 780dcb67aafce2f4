use crate::data::models::product::Product;
use crate::data::models::schema::*;
use crate::images::{HasImageSources, ImageSources};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = product_images)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image: Option<String>,
    pub image_file: Option<String>,
    pub image_url: Option<String>,
    pub alt_text: String,
    pub sort_order: i32,
}

impl HasImageSources for ProductImage {
    const UPLOAD_FOLDER: &'static str = "products/gallery";

    fn image_sources(&self) -> ImageSources {
        ImageSources::new(
            self.image.clone(),
            self.image_file.clone(),
            self.image_url.clone(),
        )
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = product_images)]
pub struct NewProductImage<'a> {
    pub product_id: i32,
    pub image: Option<&'a str>,
    pub image_file: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub alt_text: &'a str,
    pub sort_order: i32,
}
