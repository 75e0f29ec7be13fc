use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::domain::validation::FormInput;

#[derive(Debug, Args)]
pub struct ExampleCommand {}

pub fn run(_command: ExampleCommand) -> Result<()> {
    print_json(&FormInput::example().to_request())
}
