use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleNameGeneratorData {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl PeopleNameGeneratorData {
    pub fn new(first_names: Vec<String>, last_names: Vec<String>) -> Self {
        PeopleNameGeneratorData {
            first_names,
            last_names,
        }
    }
}

impl Default for PeopleNameGeneratorData {
    fn default() -> Self {
        let to_vec = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();

        PeopleNameGeneratorData::new(
            to_vec(&["Ahmet", "Mehmet", "Mustafa", "Ali", "Hasan", "Emre", "Burak", "Can", "Ozan", "Yusuf", "Arda"]),
            to_vec(&["Yilmaz", "Kaya", "Demir", "Celik", "Sahin", "Turan", "Guler", "Ozturk", "Aydin", "Yildiz", "Polat"]),
        )
    }
}
