pub mod answer;
pub mod area;
pub mod column;
pub mod schema;
pub mod survey;
pub mod user;
