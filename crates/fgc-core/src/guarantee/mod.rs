pub mod calculator;
pub mod record;
pub mod validation;

pub use calculator::{calculate_guarantee, simulate, Simulation, SimulationOutput};
pub use record::build_record;
pub use validation::parse_investment_amount;
