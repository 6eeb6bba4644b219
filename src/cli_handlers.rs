use crate::bundle::Bundle;
use crate::error::Result;
use std::path::Path;

/// Handle the order command
pub fn handle_order(root: &Path, json: bool) -> Result<()> {
    let bundle = Bundle::open(root)?;
    let files = bundle.sorted_files();

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in &files {
        println!("{file}");
    }

    Ok(())
}

/// Handle the cat command
pub fn handle_cat(root: &Path) -> Result<()> {
    let bundle = Bundle::open(root)?;
    print!("{}", bundle.concatenate()?);
    Ok(())
}

/// Handle the deps command
pub fn handle_deps(root: &Path, json: bool) -> Result<()> {
    let bundle = Bundle::open(root)?;
    let report = bundle.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for record in &report.files {
        if record.dependencies.is_empty() {
            println!("{}", record.path);
        } else {
            println!("{}: {}", record.path, record.dependencies.join(", "));
        }
    }

    Ok(())
}

/// Handle the check command
pub fn handle_check(root: &Path) -> Result<()> {
    let bundle = Bundle::open(root)?;
    println!("OK: {} files, no cycles", bundle.sorted_files().len());
    Ok(())
}
