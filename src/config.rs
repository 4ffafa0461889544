use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration. Every option can also come from the environment
/// (and from a `.env` file loaded before parsing).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wishlist_promotions",
    about = "Prices the logged-in user's wishlist items that are on Black Friday promotion",
    version
)]
pub struct Config {
    #[arg(
        long,
        env = "WISHLIST_DATA_DIR",
        value_name = "DIR",
        help = "Directory of JSON catalog documents; the built-in reference catalog is used when unset"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "WISHLIST_ACTOR_BUFFER",
        value_name = "N",
        default_value_t = 32,
        value_parser = clap::value_parser!(usize),
        help = "Channel capacity of each in-memory catalog actor"
    )]
    pub actor_buffer: usize,

    #[arg(long, help = "Print the whole product catalog instead of running the pipeline")]
    pub list_products: bool,
}
