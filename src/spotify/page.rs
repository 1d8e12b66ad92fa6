use super::client::Spotify;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::VecDeque;

/// One entry of a paged collection. Entries whose entity is gone
/// (deleted or unavailable tracks) resolve to `None` and are skipped.
pub trait Entry {
    type Entity;

    fn into_entity(self) -> Option<Self::Entity>;
}

#[derive(Deserialize, Debug)]
pub struct Page<T> {
    pub href: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<Option<T>>,
    pub limit: Option<u32>,
    pub next: Option<String>,
    pub offset: Option<u32>,
    pub previous: Option<String>,
    pub total: Option<u32>,
}

/// Lazily walks a paged collection by following its `next` links.
///
/// A page is only fetched once every entity of the previous one has been
/// handed out. The walk ends when a page has no `next` link, and the first
/// error ends it for good.
pub struct Paginator<'c, 'a, T> {
    client: &'c mut Spotify<'a>,
    next_url: Option<String>,
    buffer: VecDeque<T>,
    pages: usize,
}

impl<'c, 'a, T> Paginator<'c, 'a, T>
where
    T: Entry + DeserializeOwned,
{
    pub fn new(client: &'c mut Spotify<'a>, start_url: String) -> Self {
        Self {
            client,
            next_url: Some(start_url),
            buffer: VecDeque::new(),
            pages: 0,
        }
    }

    pub async fn next(&mut self) -> Result<Option<T::Entity>> {
        loop {
            if let Some(entry) = self.buffer.pop_front() {
                match entry.into_entity() {
                    Some(entity) => return Ok(Some(entity)),
                    None => continue,
                }
            }

            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };

            log::debug!("fetching page {}: {}", self.pages + 1, url);
            let page: Page<T> = self.client.get(&url).await?;
            self.pages += 1;
            log::debug!(
                "page {:?}: {} items at offset {:?} of {:?} (limit {:?}, previous {:?})",
                page.href,
                page.items.len(),
                page.offset,
                page.total,
                page.limit,
                page.previous
            );
            self.next_url = page.next;
            self.buffer.extend(page.items.into_iter().flatten());
        }
    }

    pub async fn collect_all(mut self) -> Result<Vec<T::Entity>> {
        let mut entities = Vec::new();
        while let Some(entity) = self.next().await? {
            entities.push(entity);
        }
        Ok(entities)
    }

    /// Number of pages fetched so far.
    pub fn pages(&self) -> usize {
        self.pages
    }
}
