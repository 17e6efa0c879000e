use std::{error::Error, fs::File, io::Write, path::Path};

fn write_args(workdir: &Path) -> std::io::Result<()> {
    let mut file = File::create(workdir.join("args"))?;
    for arg in std::env::args().skip(1) {
        file.write_all(arg.as_bytes())?;
        file.write_all(b"\n")?;
    }
    Ok(())
}

fn get_exit_status(workdir: &Path) -> Result<i32, Box<dyn Error>> {
    let exit_status = std::fs::read_to_string(workdir.join("exit-status"))?
        .trim()
        .parse()?;
    Ok(exit_status)
}

fn copy_stderr(workdir: &Path) -> std::io::Result<()> {
    let mut file = File::open(workdir.join("stderr"))?;
    std::io::copy(&mut file, &mut std::io::stderr())?;
    Ok(())
}

/// Writes a placeholder bundle to the path following `-o`, like iconutil does.
fn write_output() -> std::io::Result<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if let Some(pos) = args.iter().position(|arg| arg == "-o") {
        if let Some(output) = args.get(pos + 1) {
            std::fs::write(output, b"icns")?;
        }
    }
    Ok(())
}

/// Stand-in for `iconutil`. Records its arguments next to the executable and
/// replays the stderr and exit status configured there.
pub fn test_binary_main() {
    let workdir = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .to_owned();
    let _ = write_args(&workdir);
    let _ = copy_stderr(&workdir);

    let exit_status = get_exit_status(&workdir).unwrap_or(0);
    if exit_status == 0 {
        let _ = write_output();
    }
    std::process::exit(exit_status);
}
