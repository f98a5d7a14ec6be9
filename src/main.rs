fn main() {
    if let Err(err) = storyboard_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
