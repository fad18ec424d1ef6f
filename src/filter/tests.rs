//! Tests for filter module

use super::*;
use crate::error::{Error, ErrorKind, Result};
use crate::pagination::{encode_page_token, Paginator};
use crate::provider::{DataProvider, StaticProvider};
use crate::types::{DeletedFilter, FetchRequest, Folder};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

struct Fixture {
    org_1: Uuid,
    org_2: Uuid,
    folders: Vec<Arc<Folder>>,
    provider: StaticProvider,
}

fn fixture() -> Fixture {
    let org_1 = Uuid::new_v4();
    let org_2 = Uuid::new_v4();
    let folders = vec![
        Arc::new(Folder::new("Test-Folder 1", org_1)),
        Arc::new(Folder::new("Test-Folder 2", org_1)),
        Arc::new(Folder::new("Test-Folder 3", org_2)),
        Arc::new(Folder::new("Test-Folder 4", org_1).deleted()),
    ];
    let provider = StaticProvider::from_shared(folders.clone());
    Fixture {
        org_1,
        org_2,
        folders,
        provider,
    }
}

/// Counts reads so tests can check the provider is left alone
#[derive(Default)]
struct CountingProvider {
    reads: AtomicUsize,
}

impl DataProvider for CountingProvider {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

struct FailingProvider;

impl DataProvider for FailingProvider {
    fn folders(&self) -> Result<Vec<Arc<Folder>>> {
        Err(Error::provider("store offline"))
    }
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_fetch_keeps_matching_org_in_order() {
    let fx = fixture();
    let request = FetchRequest::new(fx.org_1);

    let response = fetch_folders(&request, &fx.provider, &Paginator::default()).unwrap();
    assert_eq!(
        response.folders,
        vec![
            fx.folders[0].clone(),
            fx.folders[1].clone(),
            fx.folders[3].clone()
        ]
    );
    assert!(response.next_page_token.is_empty());
}

#[test]
fn test_fetch_other_org() {
    let fx = fixture();
    let request = FetchRequest::new(fx.org_2);

    let response = fetch_folders(&request, &fx.provider, &Paginator::default()).unwrap();
    assert_eq!(response.folders, vec![fx.folders[2].clone()]);
}

#[test]
fn test_fetch_shares_provider_records() {
    let fx = fixture();
    let response =
        fetch_folders(&FetchRequest::new(fx.org_2), &fx.provider, &Paginator::default()).unwrap();
    assert!(Arc::ptr_eq(&response.folders[0], &fx.folders[2]));
}

#[test]
fn test_fetch_excluding_deleted() {
    let fx = fixture();
    let request = FetchRequest::new(fx.org_1).with_deleted(DeletedFilter::Exclude);

    let response = fetch_folders(&request, &fx.provider, &Paginator::default()).unwrap();
    assert_eq!(
        response.folders,
        vec![fx.folders[0].clone(), fx.folders[1].clone()]
    );
}

#[test]
fn test_fetch_unknown_org_is_not_found_with_empty_response() {
    let fx = fixture();
    let unknown = Uuid::new_v4();

    let err = fetch_folders(&FetchRequest::new(unknown), &fx.provider, &Paginator::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains(&unknown.to_string()));

    let response = err.into_response().unwrap();
    assert!(response.folders.is_empty());
    assert!(response.next_page_token.is_empty());
}

#[test]
fn test_fetch_nil_org_is_invalid_and_skips_provider() {
    let provider = CountingProvider::default();

    let err = fetch_folders(&FetchRequest::new(Uuid::nil()), &provider, &Paginator::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(provider.reads.load(Ordering::SeqCst), 0);
}

#[test]
fn test_fetch_propagates_provider_error() {
    let err = fetch_folders(
        &FetchRequest::new(Uuid::new_v4()),
        &FailingProvider,
        &Paginator::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
}

#[test]
fn test_fetch_does_not_mutate_records() {
    let fx = fixture();
    let before: Vec<Folder> = fx.folders.iter().map(|f| (**f).clone()).collect();

    let _ = fetch_folders(&FetchRequest::new(fx.org_1), &fx.provider, &Paginator::default());

    let after: Vec<Folder> = fx.provider.folders().unwrap().iter().map(|f| (**f).clone()).collect();
    assert_eq!(before, after);
}

// ============================================================================
// Pagination through the filter
// ============================================================================

#[test]
fn test_paginated_fetch_walks_all_pages() {
    let fx = fixture();
    let paginator = Paginator::default();

    let first = fetch_folders(&FetchRequest::new(fx.org_1).paginated(), &fx.provider, &paginator)
        .unwrap();
    assert_eq!(
        first.folders,
        vec![fx.folders[0].clone(), fx.folders[1].clone()]
    );
    assert_eq!(first.next_page_token, encode_page_token(2).unwrap());

    let request = FetchRequest::new(fx.org_1)
        .paginated()
        .with_page_token(first.next_page_token);
    let second = fetch_folders(&request, &fx.provider, &paginator).unwrap();
    assert_eq!(second.folders, vec![fx.folders[3].clone()]);
    assert!(second.next_page_token.is_empty());
}

#[test]
fn test_paginated_fetch_wraps_decode_error() {
    let fx = fixture();
    let request = FetchRequest::new(fx.org_1)
        .paginated()
        .with_page_token("ab271ac");

    let err = fetch_folders(&request, &fx.provider, &Paginator::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Pagination);
    assert_eq!(err.root_cause().kind(), ErrorKind::Decode);
    assert!(err.into_response().is_none());
}

#[test]
fn test_paginated_fetch_past_end_is_not_found() {
    let fx = fixture();
    let request = FetchRequest::new(fx.org_1)
        .paginated()
        .with_page_token(encode_page_token(50).unwrap());

    let err = fetch_folders(&request, &fx.provider, &Paginator::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_token_ignored_without_pagination() {
    let fx = fixture();
    let request = FetchRequest::new(fx.org_1).with_page_token("ab271ac");

    let response = fetch_folders(&request, &fx.provider, &Paginator::default()).unwrap();
    assert_eq!(response.folders.len(), 3);
}

// ============================================================================
// FolderFetcher
// ============================================================================

#[test]
fn test_builder_requires_provider() {
    let err = FolderFetcher::builder().build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_fetcher_uses_configured_page_size() {
    let fx = fixture();
    let fetcher = FolderFetcher::builder()
        .provider(Arc::new(fx.provider))
        .paginator(Paginator::new(1).unwrap())
        .build()
        .unwrap();

    let response = fetcher
        .fetch(&FetchRequest::new(fx.org_1).paginated())
        .unwrap();
    assert_eq!(response.folders, vec![fx.folders[0].clone()]);
    assert_eq!(response.next_page_token, encode_page_token(1).unwrap());
}

#[test]
fn test_fetcher_defaults_to_page_size_two() {
    let fx = fixture();
    let fetcher = FolderFetcher::new(Arc::new(fx.provider));
    assert_eq!(fetcher.paginator().page_size(), 2);
}

#[test]
fn test_concurrent_fetches() {
    let fx = fixture();
    let fetcher = FolderFetcher::new(Arc::new(fx.provider));
    let org_1 = fx.org_1;
    let org_2 = fx.org_2;

    std::thread::scope(|scope| {
        let a = scope.spawn(|| fetcher.fetch(&FetchRequest::new(org_1)).unwrap().len());
        let b = scope.spawn(|| fetcher.fetch(&FetchRequest::new(org_2)).unwrap().len());
        assert_eq!(a.join().unwrap(), 3);
        assert_eq!(b.join().unwrap(), 1);
    });
}
