pub mod region_selector;
pub mod results;
pub mod simulator;
pub mod solution_section;
pub mod status;
pub mod supplier_card;

pub use simulator::Simulator;
pub use status::Status;
