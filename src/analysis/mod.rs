pub mod damage;
pub mod effective_health;
pub mod impact;
pub mod item_value;
pub mod timeline;
