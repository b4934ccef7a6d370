pub const EXTERNAL_ISBN_CODE: &str = "EXT-ISBN-332211";

// ExternalIsbnSystem stands in for a third-party registry whose API we cannot change.
#[derive(Debug, Clone)]
pub struct ExternalIsbnSystem {
    code: String,
}

impl ExternalIsbnSystem {
    pub fn new() -> Self {
        Self {
            code: EXTERNAL_ISBN_CODE.to_string(),
        }
    }

    pub fn get_isbn_code(&self) -> String {
        self.code.to_string()
    }
}

impl Default for ExternalIsbnSystem {
    fn default() -> Self {
        Self::new()
    }
}
