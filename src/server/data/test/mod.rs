mod dish;
mod event;
mod ingredient;
mod participant;
mod reset;
mod token;
mod user;
