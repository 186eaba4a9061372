mod app;
mod ui;
mod users;

use clap::Parser;

use app::prompt::TerminalPrompter;
use ui::OutputFormat;
use users::UsersData;

/// UsersApp main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long)]
    debug: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Emit status messages as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    ui::init(format, !cli.no_color);
    ui::set_debug_mode(cli.debug);
    ui::debug("app.start", "Debug mode is on");

    app::render::banner();

    let mut store = UsersData::new();
    let mut prompter = TerminalPrompter;
    if let Err(e) = app::run(&mut store, &mut prompter) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
