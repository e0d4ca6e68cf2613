use serde::Serialize;
use tracing::warn;

use crate::catalog::ReleasePage;
use crate::metrics::EngagementMetrics;
use crate::movie::{flag_code, parse_release_date, Movie, PosterUrls};
use crate::prng::RightShift;

pub fn view_href(id: i64) -> String {
    format!("/dashboard/new-releases/{id}/view")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseRow {
    pub id: i64,
    pub title: String,
    pub poster_url: String,
    pub release_date: String,
    pub flag: Option<&'static str>,
    pub trailer_viewed: i64,
    pub metrics: Option<EngagementMetrics>,
    pub view_href: String,
}

impl ReleaseRow {
    /// Rows whose release date does not parse are shown without metrics.
    pub fn build(movie: &Movie, posters: &PosterUrls, shift: RightShift) -> Self {
        let metrics = match parse_release_date(&movie.release_date) {
            Ok(date) => Some(EngagementMetrics::generate(shift, movie.id, date)),
            Err(err) => {
                warn!(id = movie.id, error = %err, "skipping engagement metrics");
                None
            }
        };

        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: posters.resolve(movie.poster_path.as_deref()),
            release_date: movie.release_date.clone(),
            flag: flag_code(&movie.original_language),
            trailer_viewed: movie.id,
            metrics,
            view_href: view_href(movie.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseTable {
    /// Rows on this page, not matches across the whole catalog.
    pub total_results: usize,
    pub page: u32,
    pub total_pages: u32,
    pub query: String,
    pub rows: Vec<ReleaseRow>,
}

impl ReleaseTable {
    pub fn build(
        page: &ReleasePage,
        query: &str,
        posters: &PosterUrls,
        shift: RightShift,
    ) -> Self {
        let rows: Vec<ReleaseRow> = page
            .results
            .iter()
            .map(|movie| ReleaseRow::build(movie, posters, shift))
            .collect();

        Self {
            total_results: rows.len(),
            page: page.page,
            total_pages: page.total_pages,
            query: query.to_string(),
            rows,
        }
    }
}
