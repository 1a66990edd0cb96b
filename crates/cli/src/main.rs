use std::process::ExitCode;

fn main() -> ExitCode {
    noctis_cli::run()
}
