mod expand;
mod locations;

pub use expand::ExpandCommand;
pub use locations::LocationsCommand;
