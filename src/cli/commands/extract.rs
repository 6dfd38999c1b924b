//! Extract command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{read_document, ExtractArgs};
use crate::template::extract_key_str;

/// Extract the block and return it as printed
pub fn extract_block(args: &ExtractArgs, level: LogLevel) -> Result<String, String> {
    let document = read_document(&args.file).map_err(|e| e.to_string())?;
    let block = extract_key_str(&document, &args.key);

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Extracted {} line(s) under '{}' from {}",
            block.value.lines().count(),
            args.key,
            args.file.display()
        ),
    );
    Ok(block.value)
}

pub fn run_extract(args: ExtractArgs, level: LogLevel) -> Result<(), String> {
    let block = extract_block(&args, level)?;
    println!("{block}");
    Ok(())
}
