pub mod cli;
pub mod form;
pub mod web;
