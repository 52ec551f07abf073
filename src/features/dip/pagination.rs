use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::AppError;
use crate::features::dip::dto::PersonPage;

/// Cap on pages fetched for one query, in case the API keeps handing out
/// fresh cursors.
pub const MAX_PAGES: usize = 100;

/// Source of `/person` pages. The DIP client is the production
/// implementation; tests substitute canned pages.
#[async_trait]
pub trait PersonSource: Send + Sync {
    async fn fetch_person_page(
        &self,
        wahlperiode: u32,
        cursor: Option<String>,
    ) -> Result<PersonPage, AppError>;
}

/// Walk the cursor-paginated `/person` endpoint and concatenate all
/// documents for one electoral period, in page order.
///
/// The API signals the last page by repeating the previous cursor (or
/// omitting it), so stopping on an unchanged cursor never drops or
/// re-fetches a page. A failure on any page aborts the whole fetch.
pub async fn fetch_all_persons<S>(source: &S, wahlperiode: u32) -> Result<Vec<Value>, AppError>
where
    S: PersonSource + ?Sized,
{
    let mut members = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages_fetched = 0usize;

    loop {
        let page = source.fetch_person_page(wahlperiode, cursor.clone()).await?;
        members.extend(page.documents);
        pages_fetched += 1;

        tracing::debug!(
            wahlperiode,
            page = pages_fetched,
            collected = members.len(),
            "fetched person page"
        );

        match page.cursor {
            Some(next) if Some(&next) != cursor.as_ref() => cursor = Some(next),
            _ => break,
        }

        if pages_fetched >= MAX_PAGES {
            tracing::warn!(
                wahlperiode,
                pages = pages_fetched,
                "page cap reached, returning partial member list"
            );
            break;
        }
    }

    Ok(members)
}
