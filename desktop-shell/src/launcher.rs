use crate::error::ShellError;
use tokio::process::Command;
use tracing::info;

fn platform_opener() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".to_string()]
    } else if cfg!(target_os = "windows") {
        vec!["cmd".to_string(), "/C".to_string(), "start".to_string(), String::new()]
    } else {
        vec!["xdg-open".to_string()]
    }
}

/// Open `url` with `browser_command`, or the platform opener. Does not wait
/// for the browser to exit.
pub fn open_ui(url: &str, browser_command: Option<&[String]>) -> Result<(), ShellError> {
    let command = match browser_command {
        Some(parts) if !parts.is_empty() => parts.to_vec(),
        _ => platform_opener(),
    };
    let (program, args) = command
        .split_first()
        .map(|(program, args)| (program.clone(), args.to_vec()))
        .unwrap_or_default();

    Command::new(&program)
        .args(&args)
        .arg(url)
        .spawn()
        .map_err(|source| ShellError::Browser {
            program: program.clone(),
            source,
        })?;

    info!(url, program = %program, "UI opened");
    Ok(())
}
