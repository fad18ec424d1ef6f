//! Fetch implementation

use crate::config::FolderConfig;
use crate::error::{Error, Result};
use crate::pagination::Paginator;
use crate::provider::DataProvider;
use crate::types::{FetchRequest, FetchResponse, Folder};
use std::sync::Arc;
use tracing::debug;

/// Fetch the folders of `request.org_id`
///
/// Folders keep the provider's relative order. In paginated mode one window
/// is returned and token failures are wrapped in [`Error::Pagination`].
/// An empty result is reported as [`Error::NotFound`], which still carries
/// the empty response.
pub fn fetch_folders(
    request: &FetchRequest,
    provider: &dyn DataProvider,
    paginator: &Paginator,
) -> Result<FetchResponse> {
    if request.org_id.is_nil() {
        return Err(Error::invalid_argument("organization ID must not be nil"));
    }

    let all = provider.folders()?;
    let total = all.len();

    let matching: Vec<Arc<Folder>> = all
        .into_iter()
        .filter(|folder| folder.org_id == request.org_id && request.deleted.admits(folder))
        .collect();

    debug!(
        org_id = %request.org_id,
        total,
        matched = matching.len(),
        paginate = request.paginate,
        "Filtered folders by organization"
    );

    let response = if request.paginate {
        paginator
            .paginate(&matching, &request.page_token)
            .map_err(Error::pagination)?
    } else {
        FetchResponse::new(matching, String::new())
    };

    if response.is_empty() {
        return Err(Error::not_found(request.org_id, response));
    }
    Ok(response)
}

// ============================================================================
// Folder Fetcher
// ============================================================================

/// A data provider bound to a paginator
#[derive(Clone)]
pub struct FolderFetcher {
    provider: Arc<dyn DataProvider>,
    paginator: Paginator,
}

impl std::fmt::Debug for FolderFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderFetcher")
            .field("paginator", &self.paginator)
            .finish_non_exhaustive()
    }
}

impl FolderFetcher {
    /// Create a fetcher with the default page size
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self {
            provider,
            paginator: Paginator::default(),
        }
    }

    /// Start building a fetcher
    pub fn builder() -> FolderFetcherBuilder {
        FolderFetcherBuilder::default()
    }

    /// Build a fetcher from configuration
    pub fn from_config(config: &FolderConfig) -> Result<Self> {
        Self::builder()
            .provider(config.provider()?)
            .paginator(config.paginator()?)
            .build()
    }

    /// The paginator used for windowed requests
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Fetch folders for a request
    pub fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        fetch_folders(request, self.provider.as_ref(), &self.paginator)
    }
}

/// Builder for [`FolderFetcher`]
#[derive(Default)]
pub struct FolderFetcherBuilder {
    provider: Option<Arc<dyn DataProvider>>,
    paginator: Option<Paginator>,
}

impl FolderFetcherBuilder {
    /// Set the data provider
    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn DataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the paginator
    #[must_use]
    pub fn paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = Some(paginator);
        self
    }

    /// Build the fetcher; fails if no provider was set
    pub fn build(self) -> Result<FolderFetcher> {
        let provider = self
            .provider
            .ok_or_else(|| Error::invalid_argument("data provider is required"))?;
        Ok(FolderFetcher {
            provider,
            paginator: self.paginator.unwrap_or_default(),
        })
    }
}
