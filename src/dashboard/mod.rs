mod detail;
mod table;

pub use self::{
    detail::ReleaseDetail,
    table::{view_href, ReleaseRow, ReleaseTable},
};

use std::sync::Arc;

use crate::catalog::{ListParams, MovieSource};
use crate::error::{DashboardError, Result};
use crate::movie::PosterUrls;
use crate::prng::RightShift;

/// Turns source records into the list and detail views.
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn MovieSource>,
    posters: PosterUrls,
    shift: RightShift,
}

impl Dashboard {
    pub fn new(source: Arc<dyn MovieSource>, posters: PosterUrls, shift: RightShift) -> Self {
        Self { source, posters, shift }
    }

    pub fn new_releases(&self, params: &ListParams) -> Result<ReleaseTable> {
        let page = self.source.new_releases(params)?;
        Ok(ReleaseTable::build(&page, &params.query, &self.posters, self.shift))
    }

    pub fn release(&self, id: i64) -> Result<ReleaseDetail> {
        let movie = self
            .source
            .release_by_id(id)?
            .ok_or_else(|| DashboardError::NotFound { id: id.to_string() })?;
        Ok(ReleaseDetail::build(&movie, &self.posters))
    }
}
