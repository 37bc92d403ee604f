use clap::Parser;
use server::config::ServerConfig;
use server::network::Server;
use std::time::Duration;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Server IP address to bind to
    #[clap(short = 'H', long, default_value = "127.0.0.1")]
    host: String,
    /// Server port to listen on
    #[clap(short, long, default_value = "8888")]
    port: u16,
    /// Grid width in cells
    #[clap(long, default_value_t = shared::MAP_WIDTH)]
    width: i32,
    /// Grid height in cells
    #[clap(long, default_value_t = shared::MAP_HEIGHT)]
    height: i32,
    /// Chat delivery radius in grid units (0 = every chat is global)
    #[clap(short, long, default_value_t = shared::CHAT_RADIUS)]
    radius: i32,
    /// Per-player outbox capacity before frames are dropped
    #[clap(long, default_value_t = shared::OUTBOX_CAPACITY)]
    outbox_capacity: usize,
    /// Background map refresh period in seconds (0 disables the timer)
    #[clap(long, default_value = "30")]
    refresh_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let config = ServerConfig {
        width: args.width,
        height: args.height,
        chat_radius: args.radius,
        outbox_capacity: args.outbox_capacity,
        map_refresh: (args.refresh_secs > 0).then(|| Duration::from_secs(args.refresh_secs)),
    };

    let address = format!("{}:{}", args.host, args.port);
    let server = Server::bind(&address, config).await?;
    server.run().await?;

    Ok(())
}
