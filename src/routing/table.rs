//! Static prefix-to-backend route table.

use crate::config::ServicesConfig;
use crate::error::RouteTableError;

/// A single registered route: a literal path prefix and the base URL of
/// the backend service it forwards to.
///
/// Prefixes include their trailing `/` segment boundary (`user/`,
/// `products/`), which keeps the singular and plural product forms
/// disjoint literals.
#[derive(Debug, Clone)]
pub struct Route {
    /// Service name, used for logging and error messages.
    pub name: String,
    /// Literal prefix matched against the inbound path, case-sensitive.
    pub prefix: String,
    /// Backend base URL. Empty means the route is registered but not
    /// configured; dispatch reports that per request.
    pub backend_base_url: String,
}

/// Result of a successful route lookup.
#[derive(Debug)]
pub struct Resolved<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// The path after the matched prefix, forwarded to the backend.
    pub remainder: &'a str,
}

/// Immutable prefix-matching table, built once at startup.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from explicit routes.
    ///
    /// Fails if any prefix is empty or if one registered prefix is a
    /// prefix of another. Disjointness makes matching order-independent,
    /// so a misconfiguration surfaces here and not at request time.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        for route in &routes {
            if route.prefix.is_empty() {
                return Err(RouteTableError::EmptyPrefix {
                    route: route.name.clone(),
                });
            }
        }
        for (i, a) in routes.iter().enumerate() {
            for b in routes.iter().skip(i + 1) {
                if a.prefix.starts_with(&b.prefix) || b.prefix.starts_with(&a.prefix) {
                    let (first, second) = if a.prefix.len() <= b.prefix.len() {
                        (a.prefix.clone(), b.prefix.clone())
                    } else {
                        (b.prefix.clone(), a.prefix.clone())
                    };
                    return Err(RouteTableError::OverlappingPrefixes { first, second });
                }
            }
        }
        Ok(Self { routes })
    }

    /// Build the standard gateway table from service configuration.
    ///
    /// The product service answers under both its singular and plural
    /// prefix, mirroring the inbound contract.
    pub fn from_services(services: &ServicesConfig) -> Result<Self, RouteTableError> {
        Self::new(vec![
            Route {
                name: "user".to_string(),
                prefix: "user/".to_string(),
                backend_base_url: services.user_service_url.clone(),
            },
            Route {
                name: "product".to_string(),
                prefix: "product/".to_string(),
                backend_base_url: services.product_service_url.clone(),
            },
            Route {
                name: "product".to_string(),
                prefix: "products/".to_string(),
                backend_base_url: services.product_service_url.clone(),
            },
            Route {
                name: "order".to_string(),
                prefix: "order/".to_string(),
                backend_base_url: services.order_service_url.clone(),
            },
        ])
    }

    /// Look up the route for a path and split off the remainder.
    ///
    /// Longest-prefix match; returns `None` when no prefix matches.
    pub fn resolve<'a>(&'a self, path: &'a str) -> Option<Resolved<'a>> {
        self.routes
            .iter()
            .filter(|route| path.starts_with(&route.prefix))
            .max_by_key(|route| route.prefix.len())
            .map(|route| Resolved {
                route,
                remainder: &path[route.prefix.len()..],
            })
    }

    /// Registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
