use std::net::SocketAddr;
use std::path::PathBuf;

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::error::{DashboardError, Result};
use crate::movie::PosterUrls;
use crate::prng::RightShift;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_CATALOG_PATH: &str = "data/new_releases.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub catalog_path: PathBuf,
    pub page_size: usize,
    pub posters: PosterUrls,
    pub metrics_shift: RightShift,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            posters: PosterUrls::default(),
            metrics_shift: RightShift::Logical,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let defaults = PosterUrls::default();

        let bind_raw = env.string("DASHBOARD_BIND", DEFAULT_BIND);
        let bind = bind_raw.parse::<SocketAddr>().map_err(|_| DashboardError::Config {
            key: "DASHBOARD_BIND",
            value: bind_raw.clone(),
        })?;

        Ok(Self {
            bind,
            catalog_path: PathBuf::from(env.string("DASHBOARD_CATALOG_PATH", DEFAULT_CATALOG_PATH)),
            page_size: env.usize("DASHBOARD_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1),
            posters: PosterUrls {
                base_url: env.string("DASHBOARD_POSTER_BASE_URL", &defaults.base_url),
                placeholder: env.string("DASHBOARD_PLACEHOLDER_POSTER", &defaults.placeholder),
            },
            metrics_shift: parse_shift((env.0)("DASHBOARD_METRICS_SHIFT"))?,
            log_json: env.bool("DASHBOARD_LOG_JSON", false),
        })
    }
}

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, name: &str, default: &str) -> String {
        (self.0)(name)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    fn usize(&self, name: &str, default: usize) -> usize {
        (self.0)(name)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(default)
    }

    fn bool(&self, name: &str, default: bool) -> bool {
        (self.0)(name)
            .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Some(true),
                "0" | "false" | "no" => Some(false),
                _ => None,
            })
            .unwrap_or(default)
    }
}

fn parse_shift(raw: Option<String>) -> Result<RightShift> {
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("logical") => Ok(RightShift::Logical),
        Some("arithmetic") => Ok(RightShift::Arithmetic),
        Some(other) => Err(DashboardError::Config {
            key: "DASHBOARD_METRICS_SHIFT",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = config(&[]).unwrap();
        let defaults = Config::default();
        assert_eq!(cfg.bind, defaults.bind);
        assert_eq!(cfg.catalog_path, defaults.catalog_path);
        assert_eq!(cfg.page_size, 20);
        assert_eq!(cfg.posters, PosterUrls::default());
        assert_eq!(cfg.metrics_shift, RightShift::Logical);
        assert!(!cfg.log_json);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config(&[
            ("DASHBOARD_BIND", "127.0.0.1:8080"),
            ("DASHBOARD_CATALOG_PATH", "/srv/releases.json"),
            ("DASHBOARD_PAGE_SIZE", "5"),
            ("DASHBOARD_POSTER_BASE_URL", "http://posters.local"),
            ("DASHBOARD_PLACEHOLDER_POSTER", "/none.png"),
            ("DASHBOARD_METRICS_SHIFT", "arithmetic"),
            ("DASHBOARD_LOG_JSON", "yes"),
        ])
        .unwrap();
        assert_eq!(cfg.bind, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(cfg.catalog_path, PathBuf::from("/srv/releases.json"));
        assert_eq!(cfg.page_size, 5);
        assert_eq!(cfg.posters.resolve(Some("/x.jpg")), "http://posters.local/x.jpg");
        assert_eq!(cfg.posters.resolve(None), "/none.png");
        assert_eq!(cfg.metrics_shift, RightShift::Arithmetic);
        assert!(cfg.log_json);
    }

    #[test]
    fn unparseable_numbers_fall_back() {
        let cfg = config(&[
            ("DASHBOARD_PAGE_SIZE", "lots"),
            ("DASHBOARD_LOG_JSON", "maybe"),
        ])
        .unwrap();
        assert_eq!(cfg.page_size, 20);
        assert!(!cfg.log_json);
        assert_eq!(config(&[("DASHBOARD_PAGE_SIZE", "0")]).unwrap().page_size, 1);
    }

    #[test]
    fn bool_flags_ignore_padding_and_case() {
        for raw in [" true", "True\n", "  YES ", "On", "1"] {
            let expected = raw != "On";
            let cfg = config(&[("DASHBOARD_LOG_JSON", raw)]).unwrap();
            assert_eq!(cfg.log_json, expected, "DASHBOARD_LOG_JSON={raw:?}");
        }
        assert!(!config(&[("DASHBOARD_LOG_JSON", " False ")]).unwrap().log_json);
    }

    #[test]
    fn bad_bind_and_shift_are_rejected() {
        let err = config(&[("DASHBOARD_BIND", "not an address")]).unwrap_err();
        assert!(matches!(err, DashboardError::Config { key: "DASHBOARD_BIND", .. }));

        let err = config(&[("DASHBOARD_METRICS_SHIFT", "sideways")]).unwrap_err();
        assert!(matches!(err, DashboardError::Config { key: "DASHBOARD_METRICS_SHIFT", .. }));
    }
}
