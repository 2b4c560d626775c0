use anyhow::Result;
use clap::Parser;
use gitlite::App;
use gitlite::Config;
use gitlite::clock::SystemClock;
use gitlite::ops::process::ShellRunner;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "gitlite")]
#[command(about = "Interactive menu over everyday git operations", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print usage information and exit
    #[arg(short = 'h', long = "help", short_alias = 'H')]
    help: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version", short_alias = 'V')]
    version: bool,
}

fn print_help() {
    println!("Usage: gitlite [OPTION]");
    println!("Options: [-h | --help | -H] [-v | --version | -V]");
}

fn init_logging() {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    // Anything clap cannot parse is reported as an unknown option, followed
    // by the help text. That path exits 0, matching the help/version paths.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            let arg = std::env::args().nth(1).unwrap_or_default();
            println!("Unknown Option: {arg}");
            print_help();
            return Ok(());
        }
    };

    if cli.help {
        print_help();
        return Ok(());
    }

    let config = Config::load();
    let app = App::new(
        config,
        ShellRunner::new(std::env::current_dir()?),
        SystemClock,
    );
    let mut out = std::io::stdout();

    if cli.version {
        app.cmd_version(&mut out)?;
        return Ok(());
    }

    app.print_stashes(&mut out)?;
    app.print_changes(&mut out)?;

    let stdin = std::io::stdin();
    app.cmd_main_menu(&mut stdin.lock(), &mut out)?;

    Ok(())
}
