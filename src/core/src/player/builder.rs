use crate::player::{Player, PlayerPosition, PlayerSkills, PlayerStatus};
use crate::shared::{FullName, Money};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    age: Option<u8>,
    position: Option<PlayerPosition>,
    skills: Option<PlayerSkills>,
    potential: Option<u8>,
    market_value: Option<Money>,
    team_id: Option<u32>,
    contract_expiry_year: Option<i32>,
    salary: Option<Money>,
    status: Option<PlayerStatus>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn potential(mut self, potential: u8) -> Self {
        self.potential = Some(potential);
        self
    }

    pub fn market_value(mut self, market_value: Money) -> Self {
        self.market_value = Some(market_value);
        self
    }

    pub fn team_id(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn contract_expiry_year(mut self, year: i32) -> Self {
        self.contract_expiry_year = Some(year);
        self
    }

    pub fn salary(mut self, salary: Money) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn status(mut self, status: PlayerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let skills = self.skills.ok_or("skills is required")?;
        let potential = self.potential.ok_or("potential is required")?;

        if [skills.pace, skills.shooting, skills.passing, skills.defending]
            .iter()
            .any(|v| *v > potential)
        {
            return Err(format!("skills exceed potential {}", potential));
        }

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            age: self.age.ok_or("age is required")?,
            position: self.position.ok_or("position is required")?,
            skills,
            potential,
            market_value: self.market_value.unwrap_or_default(),
            team_id: self.team_id,
            contract_expiry_year: self.contract_expiry_year.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            is_managed: false,
            salary_commission: None,
            transfer_commission: None,
            status: self.status.unwrap_or_default(),
            is_transfer_listed: false,
            last_match_rating: None,
        })
    }
}
