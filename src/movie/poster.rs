pub const DEFAULT_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterUrls {
    pub base_url: String,
    pub placeholder: String,
}

impl Default for PosterUrls {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl PosterUrls {
    pub fn resolve(&self, poster_path: Option<&str>) -> String {
        match poster_path {
            Some(path) if !path.is_empty() => format!("{}{}", self.base_url, path),
            _ => self.placeholder.clone(),
        }
    }
}
