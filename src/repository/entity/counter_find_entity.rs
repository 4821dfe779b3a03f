use serde::Deserialize;

#[derive(Deserialize)]
pub struct CounterFindEntity {
    pub seq: i32,
}
