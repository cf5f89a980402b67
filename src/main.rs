use std::io::BufWriter;
use std::process::ExitCode;

use bitsegtree::{batch, Config};

fn main() -> ExitCode {
    if std::env::var_os("BITSEG_LOG").is_some() {
        let env = env_logger::Env::new()
            .filter("BITSEG_LOG")
            .write_style("BITSEG_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let config = Config::from_env();
    log::debug!("configuration from environment: {config:?}");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match batch::run(&config, stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
