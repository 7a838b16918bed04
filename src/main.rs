use lifetick::App;

fn main() -> std::io::Result<()> {
    App::new().run()
}
