pub mod use_region_choice;
pub mod use_regions;
pub mod use_simulation;
