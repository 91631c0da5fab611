use std::process::ExitCode;

fn main() -> ExitCode {
    match mini_pokedex::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
