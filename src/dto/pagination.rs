//! Paginación y enlaces HATEOAS
//!
//! Los listados aceptan `page` y `pageSize` (ambos ≥ 1) y devuelven el
//! slice pedido junto con el total y los enlaces de navegación.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Parámetros de paginación de los listados
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Número de página (por defecto 1)
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    /// Cantidad de items por página (por defecto 10)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Cantidad de registros a saltar
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Total de páginas para `total_count` registros (mínimo 1)
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            return 1;
        }
        (total_count - 1) / self.page_size + 1
    }
}

/// Enlace de navegación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: String,
}

impl Link {
    fn get(rel: &str, base_path: &str, page: i64, page_size: i64) -> Self {
        Self {
            rel: rel.to_string(),
            href: format!("{}?page={}&pageSize={}", base_path, page, page_size),
            method: "GET".to_string(),
        }
    }
}

/// Construir los enlaces self/first/prev/next/last de una página
pub fn paged_links(base_path: &str, params: &PaginationParams, total_count: i64) -> Vec<Link> {
    let page = params.page;
    let page_size = params.page_size;
    let last = params.total_pages(total_count);

    let mut links = vec![
        Link::get("self", base_path, page, page_size),
        Link::get("first", base_path, 1, page_size),
    ];
    if page > 1 {
        links.push(Link::get("prev", base_path, page - 1, page_size));
    }
    if page < last {
        links.push(Link::get("next", base_path, page + 1, page_size));
    }
    links.push(Link::get("last", base_path, last, page_size));
    links
}

/// Respuesta paginada con enlaces HATEOAS
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub links: Vec<Link>,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>, total_count: i64, params: &PaginationParams, base_path: &str) -> Self {
        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages: params.total_pages(total_count),
            links: paged_links(base_path, params, total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rels(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.rel.as_str()).collect()
    }

    #[test]
    fn test_offset_and_total_pages() {
        let params = PaginationParams::new(2, 10);
        assert_eq!(params.offset(), 10);
        assert_eq!(params.total_pages(15), 2);
        assert_eq!(params.total_pages(20), 2);
        assert_eq!(params.total_pages(21), 3);
        assert_eq!(params.total_pages(0), 1);
    }

    #[test]
    fn test_total_pages_with_huge_page_size() {
        assert_eq!(PaginationParams::new(1, i64::MAX).total_pages(1), 1);
        assert_eq!(PaginationParams::new(1, i64::MAX).total_pages(i64::MAX), 1);
        assert_eq!(PaginationParams::new(1, 1).total_pages(i64::MAX), i64::MAX);

        let links = paged_links("/api/v1/patio", &PaginationParams::new(1, i64::MAX), 3);
        assert_eq!(rels(&links), vec!["self", "first", "last"]);
    }

    #[test]
    fn test_first_page_links() {
        let params = PaginationParams::new(1, 10);
        let links = paged_links("/api/v1/moto", &params, 15);
        assert_eq!(rels(&links), vec!["self", "first", "next", "last"]);
        assert_eq!(links[2].href, "/api/v1/moto?page=2&pageSize=10");
        assert_eq!(links[3].href, "/api/v1/moto?page=2&pageSize=10");
    }

    #[test]
    fn test_middle_page_links() {
        let params = PaginationParams::new(2, 5);
        let links = paged_links("/api/v1/vaga", &params, 15);
        assert_eq!(rels(&links), vec!["self", "first", "prev", "next", "last"]);
        assert_eq!(links[2].href, "/api/v1/vaga?page=1&pageSize=5");
        assert_eq!(links[4].href, "/api/v1/vaga?page=3&pageSize=5");
    }

    #[test]
    fn test_empty_collection_links() {
        let params = PaginationParams::default();
        let links = paged_links("/api/v1/patio", &params, 0);
        assert_eq!(rels(&links), vec!["self", "first", "last"]);
        assert_eq!(links[2].href, "/api/v1/patio?page=1&pageSize=10");
    }

    #[test]
    fn test_validation_rejects_zero() {
        assert!(PaginationParams::new(0, 10).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_paged_response() {
        let params = PaginationParams::new(2, 10);
        let page = PagedResponse::new(vec![1, 2, 3, 4, 5], 15, &params, "/api/v1/moto");
        assert_eq!(page.total_count, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 5);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 15);
        assert_eq!(json["pageSize"], 10);
    }
}
