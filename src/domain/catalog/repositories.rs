use futures::future::LocalBoxFuture;

use super::entities::CatalogPage;
use super::value_objects::SearchTerm;
use crate::domain::errors::NetworkResult;

/// Interface to the remote catalog search collaborator.
///
/// Injected into the application layer rather than hard-wired, so the
/// controller can be driven by a stub in tests without any browser runtime.
pub trait CatalogGateway {
    /// Issue one search request. An empty term matches everything;
    /// `skip`/`limit` select the page window.
    fn search(
        &self,
        term: &SearchTerm,
        skip: u32,
        limit: u32,
    ) -> LocalBoxFuture<'static, NetworkResult<CatalogPage>>;
}
