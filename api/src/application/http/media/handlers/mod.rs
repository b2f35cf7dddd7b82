pub mod delete_image;
pub mod get_image_url;
pub mod list_images;
pub mod upload_image;
