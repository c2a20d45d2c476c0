use crate::news::{NewsDate, NewsDraft, NewsEvent};
use serde::{Deserialize, Serialize};

/// Newest items first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub items: Vec<NewsEvent>,
}

impl NewsFeed {
    pub fn new() -> Self {
        NewsFeed { items: Vec::new() }
    }

    pub fn publish(&mut self, id: u32, date: NewsDate, draft: NewsDraft) -> u32 {
        self.items.insert(
            0,
            NewsEvent {
                id,
                date,
                category: draft.category,
                title: draft.title,
                body: draft.body,
                is_read: false,
                offer_id: draft.offer_id,
            },
        );

        id
    }

    pub fn remove_for_offer(&mut self, offer_id: u32) {
        self.items.retain(|n| n.offer_id != Some(offer_id));
    }

    pub fn mark_read(&mut self, news_id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == news_id) {
            Some(item) => {
                item.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::NewsCategory;

    #[test]
    fn publish_prepends_and_remove_for_offer() {
        let mut feed = NewsFeed::new();
        let date = NewsDate::new(2025, 7);

        feed.publish(1, date, NewsDraft::new(NewsCategory::League, "a", "b"));
        feed.publish(2, date, NewsDraft::new(NewsCategory::TransferOffer, "c", "d").with_offer(9));

        assert_eq!(feed.items[0].id, 2);
        assert_eq!(feed.unread_count(), 2);

        feed.remove_for_offer(9);

        assert_eq!(feed.len(), 1);
        assert_eq!(feed.items[0].id, 1);
    }

    #[test]
    fn mark_read_unknown_is_false() {
        let mut feed = NewsFeed::new();
        feed.publish(1, NewsDate::new(2025, 7), NewsDraft::new(NewsCategory::Standard, "a", "b"));

        assert!(feed.mark_read(1));
        assert!(!feed.mark_read(5));
        assert_eq!(feed.unread_count(), 0);
    }
}
