use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{layer, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Registry,
};

pub fn setup_logger(verbose: bool, log_file: Option<&Path>) -> eyre::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = Registry::default().with(LevelFilter::from(level)).with(
        layer()
            .with_ansi(true)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
    );

    if let Some(log_file) = log_file {
        let time_format = time::macros::format_description!(
            "[year]-[month]-[day] [hour repr:24]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        );

        let file = std::fs::File::options()
            .append(true)
            .create(true)
            .open(log_file)?;
        builder
            .with(
                layer()
                    .with_ansi(false)
                    .with_timer(LocalTime::new(time_format))
                    .with_writer(file),
            )
            .try_init()?;
    } else {
        builder.try_init()?;
    }

    Ok(())
}
