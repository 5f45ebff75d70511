use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    revgate::cli::run()
}
