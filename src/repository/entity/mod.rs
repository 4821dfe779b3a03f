mod counter_find_entity;
mod ticket_find_entity;
mod ticket_insert_entity;

pub use counter_find_entity::*;
pub use ticket_find_entity::*;
pub use ticket_insert_entity::*;
