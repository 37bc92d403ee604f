//! Manual smoke-test client: connects, joins, walks a few cells, says
//! hello, and prints every frame the server pushes for a short while.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout, Duration};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:8888".to_string());

    let stream = TcpStream::connect(&addr).await?;
    println!("Connected to {}", addr);

    let (read_half, mut writer) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    // Print incoming frames as they arrive.
    let reader = tokio::spawn(async move {
        while let Ok(Some(line)) = lines.next_line().await {
            println!("<< {}", line);
        }
    });

    writer.write_all(b"probe\n").await?;

    for command in ["/d", "/w", "/a", "/s", "/x"] {
        sleep(Duration::from_millis(200)).await;
        println!(">> {}", command);
        writer.write_all(format!("{}\n", command).as_bytes()).await?;
    }

    sleep(Duration::from_millis(200)).await;
    println!(">> hello from the test client");
    writer.write_all(b"hello from the test client\n").await?;

    // Watch broadcasts for a few seconds, then disconnect.
    let _ = timeout(Duration::from_secs(3), reader).await;
    println!("Test client finished");

    Ok(())
}
