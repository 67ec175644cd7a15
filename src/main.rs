use last_pencil::{IoConsole, SessionBuilder};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), last_pencil::GameError> {
    let mut session = SessionBuilder::new().build(IoConsole::stdio())?;
    session.run()?;
    Ok(())
}
