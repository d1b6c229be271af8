//! Paged browsing of the entry listing.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::batch::fan_in;
use crate::errors::PokedexResult;
use crate::gateway::{ResourceGateway, Transport};

/// Where the browser is in the listing. Passed in and handed back by value;
/// nothing about paging lives in globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub page: u32, // 1-based
    pub limit: u32,
    pub total: u32, // 0 until the first page has been loaded
}

impl PageCursor {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    /// Saturates at `u32::MAX` rather than wrapping for absurd page numbers.
    pub fn offset(&self) -> u32 {
        (self.page.max(1) - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.limit.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn with_total(self, total: u32) -> Self {
        Self { total, ..self }
    }

    /// Jump to `page`, clamped to the known range.
    pub fn goto(self, page: u32) -> Self {
        let last = self.total_pages().max(1);
        Self {
            page: page.clamp(1, last),
            ..self
        }
    }

    pub fn next(self) -> Self {
        if self.has_next() {
            self.goto(self.page + 1)
        } else {
            self
        }
    }

    pub fn previous(self) -> Self {
        if self.has_previous() {
            self.goto(self.page - 1)
        } else {
            self
        }
    }
}

/// What a list card needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySummary {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub cursor: PageCursor,
    pub entries: Vec<EntrySummary>,
}

pub struct Catalog;

impl Catalog {
    /// Load the page `cursor` points at, with each listed entry's detail fetched
    /// concurrently. The returned cursor carries the listing's total count.
    pub async fn load_page<T: Transport>(
        gateway: &ResourceGateway<T>,
        cursor: PageCursor,
    ) -> PokedexResult<CatalogPage> {
        let listing = gateway.fetch_entry_page(cursor.limit, cursor.offset()).await?;
        info!(page = cursor.page, total = listing.count, "loaded catalog page");

        let details = fan_in(
            listing
                .results
                .iter()
                .map(|entry| gateway.fetch_entry_detail(&entry.name)),
        )
        .await?;

        let entries = details
            .into_iter()
            .map(|detail| EntrySummary {
                id: detail.id,
                image: detail.artwork().map(str::to_string),
                types: detail.types.iter().map(|t| t.type_.name.clone()).collect(),
                name: detail.name,
            })
            .collect();

        Ok(CatalogPage {
            cursor: cursor.with_total(listing.count),
            entries,
        })
    }
}
