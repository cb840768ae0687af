pub mod about;
pub mod interactive;
pub mod report;
pub mod simulate;
