//! In-memory feat catalog.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feat::Feat;
use crate::ports::{FeatCatalog, FeatCatalogError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryFeatCatalog {
    feats: Arc<RwLock<Vec<Feat>>>,
}

impl InMemoryFeatCatalog {
    pub fn new(feats: Vec<Feat>) -> Self {
        Self {
            feats: Arc::new(RwLock::new(feats)),
        }
    }

    pub async fn add(&self, feat: Feat) {
        self.feats.write().await.push(feat);
    }
}

#[async_trait]
impl FeatCatalog for InMemoryFeatCatalog {
    async fn monthly_feats(&self) -> Result<Vec<Feat>, FeatCatalogError> {
        Ok(self.feats.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FeatId;

    #[tokio::test]
    async fn lists_added_feats() {
        let catalog = InMemoryFeatCatalog::default();
        catalog
            .add(Feat::new(FeatId::new("feat_plank").unwrap(), "3 MIN PLANK", "Plank"))
            .await;

        let feats = catalog.monthly_feats().await.unwrap();
        assert_eq!(feats.len(), 1);
        assert_eq!(feats[0].name, "3 MIN PLANK");
    }
}
