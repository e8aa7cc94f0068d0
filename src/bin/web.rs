// src/bin/web.rs
use team_sheet::{cli, web};

#[tokio::main]
async fn main() {
    let opts = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            eprintln!("{}", cli::HELP);
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Serving the team form on http://{}/", opts.bind);
    if let Err(e) = web::serve(&opts.bind).await {
        eprintln!("Server failed: {e}");
        std::process::exit(1);
    }
}
