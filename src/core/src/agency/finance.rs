use crate::agency::{ManagerProfile, StaffEffects};
use crate::news::{NewsCategory, NewsDraft};
use crate::player::{ContractStatus, Player};
use crate::shared::{CurrencyUtils, Money};
use crate::simulator::{SimulationResult, SimulatorData};
use log::debug;

pub struct FinanceResult {
    pub income: Money,
    pub expenses: Money,
}

impl FinanceResult {
    pub fn process(self, data: &mut SimulatorData, result: &mut SimulationResult) {
        if let Some(manager) = data.manager.as_mut() {
            manager.cash += self.income - self.expenses;
        }

        result.income = self.income;
        result.expenses = self.expenses;

        data.publish(NewsDraft::new(
            NewsCategory::Finance,
            "Monthly Finances",
            format!(
                "Commission income: {}. Expenses: {}. Net: {}.",
                self.income,
                self.expenses,
                self.income - self.expenses
            ),
        ));
    }
}

pub struct FinanceSettlement;

impl FinanceSettlement {
    /// Salary commission from every represented player under a live contract,
    /// against office overhead and staff wages.
    pub fn calculate(manager: &ManagerProfile, players: &[Player], year: i32, overhead: Money) -> FinanceResult {
        let effects = StaffEffects::from_staff(&manager.staff);

        let commission: Money = players
            .iter()
            .filter(|p| p.is_managed && p.contract_status(year) != ContractStatus::Expired)
            .filter_map(|p| p.salary_commission.map(|rate| CurrencyUtils::apply_rate(p.salary, rate)))
            .sum();

        let income = CurrencyUtils::scale(commission, effects.commercial_multiplier());
        let expenses = overhead + manager.staff_wages();

        debug!("finances: income {}, expenses {}", income, expenses);

        FinanceResult { income, expenses }
    }
}
