use plan2board_core::error::Plan2BoardError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), Plan2BoardError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
