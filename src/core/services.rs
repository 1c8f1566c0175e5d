pub mod answer;
pub mod area;
pub mod schema;
pub mod survey;
pub mod user;
