use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = plugctl::cli::Cli::parse();
    let exit_code = plugctl::run(cli).await;
    std::process::exit(exit_code);
}
