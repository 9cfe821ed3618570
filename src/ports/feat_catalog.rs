//! Feat catalog port - the current month's feats.

use async_trait::async_trait;

use crate::domain::feat::Feat;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors surfaced by a feat catalog.
#[derive(Debug, thiserror::Error)]
pub enum FeatCatalogError {
    #[error("Feat catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<FeatCatalogError> for DomainError {
    fn from(err: FeatCatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogUnavailable, err.to_string())
    }
}

/// Port for listing feats so stored attempts can be joined with their
/// display metadata.
#[async_trait]
pub trait FeatCatalog: Send + Sync {
    async fn monthly_feats(&self) -> Result<Vec<Feat>, FeatCatalogError>;
}
