use crate::player::Player;
use crate::shared::Money;

/// Age after which a player's value depreciates every year.
const DEPRECIATION_AGE: u8 = 29;
const DEPRECIATION_PER_YEAR: Money = 25_000;
const MIN_MARKET_VALUE: Money = 5_000;

pub struct PlayerValueCalculator;

impl PlayerValueCalculator {
    pub fn calculate(player: &Player) -> Money {
        Self::value_of(player.current_ability(), player.potential, player.age)
    }

    pub fn value_of(ability: u8, potential: u8, age: u8) -> Money {
        let base_value = ability as Money * 10_000 + potential as Money * 5_000;

        let age_penalty = if age > DEPRECIATION_AGE {
            (age - DEPRECIATION_AGE) as Money * DEPRECIATION_PER_YEAR
        } else {
            0
        };

        (base_value - age_penalty).max(MIN_MARKET_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn young_player_has_no_depreciation() {
        assert_eq!(PlayerValueCalculator::value_of(60, 80, 21), 1_000_000);
        assert_eq!(PlayerValueCalculator::value_of(60, 80, 29), 1_000_000);
    }

    #[test]
    fn veteran_depreciates_per_year() {
        assert_eq!(PlayerValueCalculator::value_of(60, 80, 33), 900_000);
    }

    #[test]
    fn value_is_floored() {
        assert_eq!(PlayerValueCalculator::value_of(0, 0, 40), MIN_MARKET_VALUE);
    }
}
