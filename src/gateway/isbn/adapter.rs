use crate::gateway::isbn::external::ExternalIsbnSystem;
use crate::gateway::isbn::IsbnProvider;

// IsbnAdapter exposes the external registry through IsbnProvider
#[derive(Debug)]
pub struct IsbnAdapter {
    external: ExternalIsbnSystem,
}

impl IsbnAdapter {
    pub fn new(external: ExternalIsbnSystem) -> Self {
        Self {
            external,
        }
    }
}

impl IsbnProvider for IsbnAdapter {
    fn get_code(&self) -> String {
        self.external.get_isbn_code()
    }
}
