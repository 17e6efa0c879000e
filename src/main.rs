use std::process::ExitCode;

fn main() -> eyre::Result<ExitCode> {
    appicons::main()
}
