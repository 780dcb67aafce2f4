use crate::data::models::schema::*;
use crate::images::{HasImageSources, ImageSources};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
    pub image_file: Option<String>,
    pub image_url: Option<String>,
}

impl HasImageSources for Category {
    const UPLOAD_FOLDER: &'static str = "categories";

    fn image_sources(&self) -> ImageSources {
        ImageSources::new(
            self.image.clone(),
            self.image_file.clone(),
            self.image_url.clone(),
        )
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = categories)]
pub struct UpdateCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
}
