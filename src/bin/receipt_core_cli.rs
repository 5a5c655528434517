use receipt_core::cli::{run_cli, CliError};

fn main() -> Result<(), CliError> {
    receipt_core::init();
    run_cli()
}
