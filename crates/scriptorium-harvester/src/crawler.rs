//! Link discovery over seed pages

use crate::error::HarvestError;
use scriptorium_domain::traits::LinkSource;
use std::fmt::Display;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Collects article links from seed pages until enough are found
pub struct Crawler<'a, L>
where
    L: LinkSource,
{
    source: &'a L,
    seed_urls: &'a [String],
    max_articles: usize,
    delay: Duration,
}

impl<'a, L> Crawler<'a, L>
where
    L: LinkSource,
    L::Error: Display,
{
    /// Create a crawler over `seed_urls`
    pub fn new(source: &'a L, seed_urls: &'a [String], max_articles: usize) -> Self {
        Self {
            source,
            seed_urls,
            max_articles,
            delay: Duration::ZERO,
        }
    }

    /// Pause before every seed page request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Collect at most `max_articles` links, seed pages in order
    ///
    /// Seed pages after the limit is reached are not requested.
    pub fn find_articles(&self) -> Result<Vec<String>, HarvestError> {
        let mut urls = Vec::with_capacity(self.max_articles);

        for seed_url in self.seed_urls {
            if urls.len() >= self.max_articles {
                break;
            }
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            let links = self
                .source
                .find_links(seed_url)
                .map_err(|e| HarvestError::Links {
                    seed_url: seed_url.clone(),
                    message: e.to_string(),
                })?;
            debug!("{} links on {}", links.len(), seed_url);

            let room = self.max_articles - urls.len();
            urls.extend(links.into_iter().take(room));
        }

        info!(
            "Collected {} of {} requested article links",
            urls.len(),
            self.max_articles
        );
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct StaticLinks {
        pages: HashMap<String, Vec<String>>,
        visited: RefCell<Vec<String>>,
    }

    impl StaticLinks {
        fn new(pages: Vec<(&str, Vec<&str>)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(seed, links)| {
                        (seed.to_string(), links.into_iter().map(String::from).collect())
                    })
                    .collect(),
                visited: RefCell::new(Vec::new()),
            }
        }
    }

    impl LinkSource for StaticLinks {
        type Error = String;

        fn find_links(&self, seed_url: &str) -> Result<Vec<String>, Self::Error> {
            self.visited.borrow_mut().push(seed_url.to_string());
            self.pages
                .get(seed_url)
                .cloned()
                .ok_or_else(|| format!("404 for {}", seed_url))
        }
    }

    fn seeds(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_collects_links_in_seed_order() {
        let source = StaticLinks::new(vec![("s1", vec!["a", "b"]), ("s2", vec!["c"])]);
        let seed_urls = seeds(&["s1", "s2"]);

        let links = Crawler::new(&source, &seed_urls, 10).find_articles().unwrap();
        assert_eq!(links, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stops_at_limit() {
        let source = StaticLinks::new(vec![("s1", vec!["a", "b", "c"]), ("s2", vec!["d"])]);
        let seed_urls = seeds(&["s1", "s2"]);

        let links = Crawler::new(&source, &seed_urls, 2).find_articles().unwrap();
        assert_eq!(links, vec!["a", "b"]);
        assert_eq!(*source.visited.borrow(), vec!["s1"]);
    }

    #[test]
    fn test_link_source_failure() {
        let source = StaticLinks::new(vec![("s1", vec!["a"])]);
        let seed_urls = seeds(&["s1", "missing"]);

        let result = Crawler::new(&source, &seed_urls, 5).find_articles();
        assert!(matches!(
            result,
            Err(HarvestError::Links { seed_url, .. }) if seed_url == "missing"
        ));
    }
}
