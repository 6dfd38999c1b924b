//! Instantiate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_setting, read_document, InstantiateArgs};
use crate::error::Result as CrateResult;
use crate::template::{instantiate_document, instantiate_text, ParameterSetting};

use super::render;

/// Merge the `--params` file with inline `--set` assignments
pub fn collect_setting(args: &InstantiateArgs) -> CrateResult<ParameterSetting> {
    let mut setting = match &args.params {
        Some(path) => load_setting(path)?,
        None => ParameterSetting::new(),
    };
    for assignment in &args.set {
        let (key, value) = ParameterSetting::parse_assignment(assignment)?;
        setting.insert(key, value);
    }
    Ok(setting)
}

/// Instantiate the template and return the rendered output
pub fn instantiate_file(args: &InstantiateArgs, level: LogLevel) -> Result<String, String> {
    let document = read_document(&args.file).map_err(|e| e.to_string())?;
    let setting = collect_setting(args).map_err(|e| e.to_string())?;

    log(level, LogLevel::Verbose, &format!("Substituting {} parameter(s)", setting.len()));

    let outcome = match &args.key {
        Some(key) => instantiate_document(&document, key, &setting),
        None => instantiate_text(&document, &setting),
    }
    .map_err(|e| e.to_string())?;

    if outcome.has_warnings() {
        log(level, LogLevel::Verbose, &format!("{} warning(s) raised", outcome.warnings.len()));
    }
    render(&outcome.value, args.format).map_err(|e| e.to_string())
}

pub fn run_instantiate(args: InstantiateArgs, level: LogLevel) -> Result<(), String> {
    let output = instantiate_file(&args, level)?;
    println!("{}", output.trim_end());
    Ok(())
}
