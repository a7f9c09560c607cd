use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_connect_four::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment; a missing .env is fine.
    dotenvy::dotenv().ok();
    let options = ConsoleOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or("warn".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Play until the human is done.
    let mut session = options.session()?;
    let mut rng = options.rng();
    if let Err(e) = Console::stdio().run(&mut session, &mut rng) {
        log::error!("fatal error: {}", e);
        return Err(e);
    }
    Ok(())
}
