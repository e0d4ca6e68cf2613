use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{DashboardError, Result};
use crate::movie::Movie;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Search and page selection for the new releases listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub query: String,
    pub page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { query: String::new(), page: 1 }
    }
}

impl ListParams {
    /// Missing, non-numeric and zero pages all fall back to the first page.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let query = params
            .get("query")
            .map(|q| q.trim().to_string())
            .unwrap_or_default();
        let page = params
            .get("page")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        Self { query, page }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: usize,
    pub results: Vec<Movie>,
}

pub trait MovieSource: Send + Sync {
    fn new_releases(&self, params: &ListParams) -> Result<ReleasePage>;

    fn release_by_id(&self, id: i64) -> Result<Option<Movie>>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Listing { results: Vec<Movie> },
    Movies(Vec<Movie>),
}

/// In-memory movie source, kept in the order it was loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    page_size: usize,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, page_size: usize) -> Self {
        Self { movies, page_size: page_size.max(1) }
    }

    pub fn from_json(json: &str, page_size: usize, path: &Path) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|source| DashboardError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        let movies = match file {
            CatalogFile::Listing { results } => results,
            CatalogFile::Movies(movies) => movies,
        };
        Ok(Self::new(movies, page_size))
    }

    pub fn load(path: &Path, page_size: usize) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| DashboardError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json, page_size, path)?;
        info!(path = %path.display(), movies = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl MovieSource for Catalog {
    fn new_releases(&self, params: &ListParams) -> Result<ReleasePage> {
        let matches: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|m| m.matches(&params.query))
            .collect();
        let total_results = matches.len();
        let total_pages = total_results.div_ceil(self.page_size) as u32;
        let start = (params.page.max(1) as usize - 1).saturating_mul(self.page_size);
        let results = matches
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(ReleasePage {
            page: params.page,
            total_pages,
            total_results,
            results,
        })
    }

    fn release_by_id(&self, id: i64) -> Result<Option<Movie>> {
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }
}
