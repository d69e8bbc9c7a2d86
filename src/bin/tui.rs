use anyhow::Result;
use nittei::cli;
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args
        .first()
        .and_then(|a| PathBuf::from(a).file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "nittei".to_string());

    let mut root: Option<PathBuf> = None;
    let mut rest: Vec<String> = Vec::new();
    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => {
                cli::print_help(&binary_name);
                return Ok(());
            }
            "--root" | "-r" => match iter.next() {
                Some(path) => root = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: {} requires a path", arg);
                    std::process::exit(2);
                }
            },
            _ => rest.push(arg),
        }
    }

    // CLI Command: nittei format ...
    if rest.first().map(String::as_str) == Some("format") {
        let ctx = nittei::context::StandardContext::new(root);
        let config = nittei::config::Config::load_or_default(&ctx)?;
        nittei::locale::init(config.locale.as_deref());
        // Logging is optional for one-shot commands.
        let _ = nittei::logging::init_term_logger(nittei::config::LogLevel::Warn);

        let parsed = cli::parse_format_args(&rest[1..])?;
        if parsed.entries.is_empty() {
            eprintln!("Error: no dates given. See '{} --help'.", binary_name);
            std::process::exit(2);
        }
        println!("{}", cli::run_format(&parsed)?);
        return Ok(());
    }

    if let Some(unknown) = rest.first() {
        eprintln!("Error: unknown argument '{}'. See '{} --help'.", unknown, binary_name);
        std::process::exit(2);
    }

    // Normal TUI startup
    nittei::tui::run(root).await
}
