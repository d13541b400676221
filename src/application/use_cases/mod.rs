mod chat_about_pet;
mod load_pet_image;
mod provider_client;
mod recommend_pets;
mod resolve_image;
mod test_connection;

pub use chat_about_pet::*;
pub use load_pet_image::*;
pub use provider_client::*;
pub use recommend_pets::*;
pub use resolve_image::*;
pub use test_connection::*;
