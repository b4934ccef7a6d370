pub mod adapter;
pub mod external;

// IsbnProvider is the shape the catalog expects from any ISBN source
pub trait IsbnProvider: Sync + Send {
    fn get_code(&self) -> String;
}
