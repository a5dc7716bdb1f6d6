#[derive(thiserror::Error, Debug)]
pub enum PlaceStoreError {
    #[error("place store is unavailable: {0}")]
    Unavailable(String),
}
