use bootsmith::ui::output;

fn main() {
    if let Err(err) = bootsmith::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
