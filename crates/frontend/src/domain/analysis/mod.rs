pub mod model;
pub mod selection;
pub mod ui;
