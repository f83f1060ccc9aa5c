pub mod admin;
pub mod capitalization;
pub mod dashboard;
pub mod draws;
pub mod health;
pub mod influencers;
pub mod pages;
pub mod profile;
pub mod promotions;
pub mod winners;
