//! # Catalog
//!
//! Read-only lookup of the services and products the register can sell.
//!
//! The register never owns catalog data; it is handed a `Catalog`
//! implementation at startup. `InMemoryCatalog::sample()` carries the
//! shop's standard menu.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, Service};

/// Query interface over the available services and products.
pub trait Catalog {
    /// All services in menu order.
    fn services(&self) -> &[Service];

    /// All products in shelf order.
    fn products(&self) -> &[Product];

    /// Looks up a service by id.
    fn service(&self, id: &str) -> Option<&Service> {
        self.services().iter().find(|s| s.id == id)
    }

    /// Looks up a product by id.
    fn product(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::service`], but a miss is a `ServiceNotFound` error.
    fn require_service(&self, id: &str) -> CoreResult<&Service> {
        self.service(id)
            .ok_or_else(|| CoreError::ServiceNotFound(id.to_string()))
    }

    /// Like [`Catalog::product`], but a miss is a `ProductNotFound` error.
    fn require_product(&self, id: &str) -> CoreResult<&Product> {
        self.product(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Case-insensitive substring match on product names. An empty query
    /// returns every product.
    fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products()
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// A catalog held in plain vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    services: Vec<Service>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(services: Vec<Service>, products: Vec<Product>) -> Self {
        InMemoryCatalog { services, products }
    }

    /// The shop's standard menu: five services and four retail products.
    pub fn sample() -> Self {
        let services = vec![
            service("1", "Regular Haircut", "Classic haircut with styling", 75_000, 30),
            service("2", "Beard Trim", "Precision beard shaping and trimming", 50_000, 20),
            service("3", "Hair Coloring", "Full hair coloring service", 250_000, 90),
            service("4", "Shave", "Traditional straight razor shave", 60_000, 25),
            service("5", "Hair & Beard Combo", "Haircut with beard trim and styling", 120_000, 45),
        ];

        let products = vec![
            product("p1", "Premium Pomade", 85_000, 15),
            product("p2", "Beard Oil", 65_000, 8),
            product("p3", "Hair Wax", 70_000, 12),
            product("p4", "Shampoo", 95_000, 20),
        ];

        InMemoryCatalog::new(services, products)
    }
}

impl Catalog for InMemoryCatalog {
    fn services(&self) -> &[Service] {
        &self.services
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

fn service(id: &str, name: &str, description: &str, price: i64, minutes: u32) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_rupiah(price),
        duration_minutes: minutes,
    }
}

fn product(id: &str, name: &str, price: i64, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_rupiah(price),
        stock,
    }
}
