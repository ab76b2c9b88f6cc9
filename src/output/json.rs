use super::{DirsOutput, RecentListOutput};
use std::error::Error;

pub fn output_dirs(data: &DirsOutput) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

pub fn output_recent(data: &RecentListOutput) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}
