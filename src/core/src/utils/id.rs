use serde::{Deserialize, Serialize};

/// Monotonic id counters, one per entity kind. Stored with the world so that a
/// reloaded snapshot keeps issuing fresh ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    pub player: u32,
    pub team: u32,
    pub match_result: u32,
    pub offer: u32,
    pub news: u32,
    pub staff: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        IdSequence {
            player: 1,
            team: 1,
            match_result: 1,
            offer: 1,
            news: 1,
            staff: 1,
        }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_player(&mut self) -> u32 {
        Self::take(&mut self.player)
    }

    pub fn next_team(&mut self) -> u32 {
        Self::take(&mut self.team)
    }

    pub fn next_match_result(&mut self) -> u32 {
        Self::take(&mut self.match_result)
    }

    pub fn next_offer(&mut self) -> u32 {
        Self::take(&mut self.offer)
    }

    pub fn next_news(&mut self) -> u32 {
        Self::take(&mut self.news)
    }

    pub fn next_staff(&mut self) -> u32 {
        Self::take(&mut self.staff)
    }

    fn take(counter: &mut u32) -> u32 {
        let id = *counter;
        *counter += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_independent() {
        let mut ids = IdSequence::new();

        assert_eq!(ids.next_player(), 1);
        assert_eq!(ids.next_player(), 2);
        assert_eq!(ids.next_offer(), 1);
        assert_eq!(ids.player, 3);
    }
}
