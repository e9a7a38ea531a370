//! # Catalog Commands

use barber_core::{Product, Service};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::RegisterState;

/// Everything the register can sell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub services: Vec<Service>,
    pub products: Vec<Product>,
}

/// Lists services and products.
///
/// `query` narrows the product list by name (case-insensitive); services
/// are always listed in full.
pub fn get_catalog(state: &RegisterState, query: Option<&str>) -> Result<CatalogResponse, ApiError> {
    debug!(query = ?query, "get_catalog command");

    let catalog = state.catalog();
    let products = catalog
        .search_products(query.unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();

    Ok(CatalogResponse {
        services: catalog.services().to_vec(),
        products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use barber_core::InMemoryCatalog;

    #[test]
    fn test_full_catalog() {
        let state = RegisterState::new(ConfigState::default(), InMemoryCatalog::sample());
        let response = get_catalog(&state, None).unwrap();

        assert_eq!(response.services.len(), 5);
        assert_eq!(response.products.len(), 4);
        assert_eq!(response.services[0].name, "Regular Haircut");
    }

    #[test]
    fn test_product_search() {
        let state = RegisterState::new(ConfigState::default(), InMemoryCatalog::sample());
        let response = get_catalog(&state, Some("hair")).unwrap();

        let ids: Vec<&str> = response.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3"]);
        assert_eq!(response.services.len(), 5);
    }
}
