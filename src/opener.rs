use std::path::Path;
use std::process::Command;

/// Opens `path` with the system default application.
///
/// Fire-and-forget: the child is not waited on and a failure to spawn is only logged.
pub fn open_file(path: &Path) {
    match open_command(path).spawn() {
        Ok(_) => crate::log(&format!("Opened {}", path.display())),
        Err(e) => crate::log(&format!("Failed to open {}: {}", path.display(), e)),
    }
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_open_command_passes_path_last() {
        let path = Path::new("kurzy_fortuna_vs_tipsport.csv");
        let command = open_command(path);

        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args.last(), Some(&path.as_os_str()));
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn test_open_command_uses_xdg_open() {
        let command = open_command(Path::new("fortuna_zapasy.csv"));
        assert_eq!(command.get_program(), "xdg-open");
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_open_command_uses_start() {
        let command = open_command(Path::new("fortuna_zapasy.csv"));
        assert_eq!(command.get_program(), "cmd");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(&args[..3], &[OsStr::new("/C"), OsStr::new("start"), OsStr::new("")]);
    }
}
