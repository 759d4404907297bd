//! Example downloading a Go release archive in segments.
//!
//! ```text
//! cargo run --example download -- 1.22.0
//! cargo run --example download -- https://example.com/some/file.iso 8
//! ```
//!
//! Set `RUST_LOG=splinter=debug` to follow the probe, the plan and every segment.

use color_eyre::Result;
use splinter::release::{Layout, Release};
use splinter::{DownloadRequest, DownloaderBuilder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let target = args.next().unwrap_or_else(|| String::from("1.22.0"));
    let parts = args.next().map(|p| p.parse::<usize>()).transpose()?;

    // A URL is downloaded into the current directory, anything else names a release.
    let mut request = if target.contains("://") {
        DownloadRequest::try_from(target.as_str())?
    } else {
        let layout = Layout::from_home()?;
        Release::new(&target).download_request(&layout)?
    };
    if let Some(parts) = parts {
        request = request.with_parts(parts);
    }

    let downloader = DownloaderBuilder::new().build()?;
    let summary = downloader.run(&request).await?;

    println!(
        "\nDownloaded {} bytes in {} segment(s) to {}\nsha256 {}",
        summary.size(),
        summary.segments(),
        summary.path().display(),
        summary.sha256()
    );

    Ok(())
}
