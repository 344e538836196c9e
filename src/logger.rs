use log::LevelFilter;
use env_logger::Builder;
use std::env;
use std::io::Write;
use chrono::Local;

pub fn init() {
    let mut builder = Builder::new();
    builder.format(|buf, record| {
        writeln!(buf,
            "{} [{}] - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });

    match env::var("RUST_LOG") {
        Ok(spec) => {
            builder.parse_filters(&spec);
        }
        Err(_) => {
            builder.filter(None, LevelFilter::Info);
        }
    }

    // Tests and multi-binary runs may init more than once.
    let _ = builder.try_init();
}
