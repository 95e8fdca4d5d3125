mod entity_card;
mod entity_detail;
mod entity_drawer;
mod search_lens;

pub use entity_card::EntityCard;
pub use entity_detail::EntityDetail;
pub use entity_drawer::EntityDrawer;
pub use search_lens::SearchLens;
