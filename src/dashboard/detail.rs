use serde::Serialize;

use crate::movie::{Movie, PosterUrls};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseDetail {
    pub id: i64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub poster_url: String,
    pub genres: Vec<String>,
    pub release_date: String,
    pub runtime: Option<u32>,
    pub budget: u64,
    pub revenue: u64,
    pub vote_average: f64,
    pub vote_count: u64,
    pub production_companies: Vec<String>,
    pub spoken_languages: Vec<String>,
    pub homepage: Option<String>,
}

impl ReleaseDetail {
    pub fn build(movie: &Movie, posters: &PosterUrls) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            tagline: movie.tagline.clone().filter(|t| !t.is_empty()),
            overview: movie.overview.clone(),
            poster_url: posters.resolve(movie.poster_path.as_deref()),
            genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
            release_date: movie.release_date.clone(),
            runtime: movie.runtime,
            budget: movie.budget,
            revenue: movie.revenue,
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            production_companies: movie
                .production_companies
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            spoken_languages: movie
                .spoken_languages
                .iter()
                .map(|l| l.english_name.clone())
                .collect(),
            homepage: movie.homepage.clone().filter(|h| !h.is_empty()),
        }
    }
}
