use std::process::ExitCode;

fn main() -> ExitCode {
    match repoguard::run() {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{}", repoguard::format_error(&err));
            ExitCode::FAILURE
        }
    }
}
