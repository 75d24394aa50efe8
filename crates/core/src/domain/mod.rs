pub mod contract;
pub mod instrument;
pub mod portfolio;
pub mod profile;
pub mod recommendation;
