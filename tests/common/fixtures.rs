//! One model of each family with the parameters used across the tests

use isotherm_rs::models::{Bet, Freundlich, IsothermModel, Langmuir, Temkin};

pub fn reference_langmuir() -> IsothermModel {
    Langmuir::new(10.0, 0.05).unwrap().into()
}

pub fn reference_freundlich() -> IsothermModel {
    Freundlich::new(20.0, 2.5).unwrap().into()
}

pub fn reference_bet() -> IsothermModel {
    Bet::new(10.0, 10.0, 1000.0).unwrap().into()
}

pub fn reference_temkin() -> IsothermModel {
    Temkin::new(2.0, 100.0, 298.0).unwrap().into()
}

pub fn all_models() -> Vec<IsothermModel> {
    vec![
        reference_langmuir(),
        reference_freundlich(),
        reference_bet(),
        reference_temkin(),
    ]
}
