use nsloader::ui::output;

fn main() {
    if let Err(err) = nsloader::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
