use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

pub fn init_logging(debug_logging: bool) {
    let model_directive = if debug_logging {
        "windplant=debug"
    } else {
        "windplant=info"
    };

    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive(model_directive.parse().unwrap());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}
