//! Product catalog service with guarded seed-on-empty behavior.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::documents::{Filter, normalize_document};
use crate::domain::entities::Product;
use crate::domain::error::Error;
use crate::domain::ports::{DocumentStore, SeedOutcome};
use crate::domain::schema::{EntityKind, SchemaRegistry};
use crate::domain::DomainResult;

/// Upper bound on product listings.
pub(crate) const PRODUCT_QUERY_LIMIT: usize = 200;

/// Marker recorded when the default catalog has been applied. The store
/// inserts it atomically, so concurrent first reads converge on a single
/// copy of each default product.
const CATALOG_SEED_KEY: &str = "default-product-catalog";

/// The showcase catalog inserted the first time the collection is observed
/// empty.
fn default_catalog() -> [Product; 3] {
    [
        Product {
            title: "Murottal Bilal Qori – Vol.1".to_owned(),
            description: Some("Audio premium 320kbps".to_owned()),
            price: 9.99,
            category: "audio".to_owned(),
            image: Some("/media/murottal1.jpg".to_owned()),
            stock: None,
            rating: Some(4.9),
        },
        Product {
            title: "E-book Soulful Qur’an Basics".to_owned(),
            description: Some("Panduan maqomat & rasa".to_owned()),
            price: 14.9,
            category: "ebook".to_owned(),
            image: Some("/media/ebook-sq.jpg".to_owned()),
            stock: None,
            rating: Some(4.9),
        },
        Product {
            title: "Kaos Soulful Qur’an".to_owned(),
            description: Some("Cotton combed 24s".to_owned()),
            price: 12.0,
            category: "merchandise".to_owned(),
            image: Some("/media/tee-sq.jpg".to_owned()),
            stock: None,
            rating: Some(4.9),
        },
    ]
}

/// Read side of the product catalog.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
    registry: SchemaRegistry,
}

impl CatalogService {
    /// Create a catalog service over the given store.
    pub fn new(store: Arc<dyn DocumentStore>, registry: SchemaRegistry) -> Self {
        Self { store, registry }
    }

    /// List the catalog, seeding the defaults when the collection is empty.
    ///
    /// Returned records are normalized: each carries a string `id` field and
    /// no internal identifier.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable; an unconfigured store cannot
    /// accept the seed write, so the catalog does not degrade to empty the
    /// way the pure content feeds do.
    pub async fn list_products(&self) -> DomainResult<Vec<Value>> {
        let collection = EntityKind::Product.collection();
        let mut items = self
            .store
            .find(collection, Filter::new(), PRODUCT_QUERY_LIMIT)
            .await?;

        if items.is_empty() {
            let defaults = default_catalog();
            let mut bodies = Vec::with_capacity(defaults.len());
            for product in &defaults {
                let raw = serde_json::to_value(product)
                    .map_err(|err| Error::internal(err.to_string()))?;
                bodies.push(self.registry.validate(EntityKind::Product, raw)?.into_body());
            }
            match self
                .store
                .seed_if_absent(CATALOG_SEED_KEY, collection, bodies)
                .await?
            {
                SeedOutcome::Applied => info!("seeded default product catalog"),
                SeedOutcome::AlreadySeeded => {
                    debug!("default product catalog already seeded by a concurrent reader");
                }
            }
            items = self
                .store
                .find(collection, Filter::new(), PRODUCT_QUERY_LIMIT)
                .await?;
        }

        Ok(items.into_iter().map(normalize_document).collect())
    }
}
