use clap::Parser;
use malshare::{Client, Config};
use std::path::PathBuf;

/// Walk through the MalShare API with a single key
#[derive(Parser, Debug)]
#[command(name = "malshare-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MalShare API key
    #[arg(long = "api", env = "MALSHARE_API_KEY")]
    api_key: String,

    /// Override the MalShare base URL
    #[arg(long = "url", default_value = "")]
    url: String,

    /// Search term
    #[arg(long, default_value = "emotet")]
    query: String,

    /// Hash to download
    #[arg(long, default_value = "95bc3d64f49b03749427fcd6601fa8a7")]
    hash: String,

    /// File to upload
    #[arg(long)]
    upload: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let client = Client::new(Config {
        api_key: cli.api_key,
        base_url: Some(cli.url),
        ..Default::default()
    })?;

    match client.get_list_of_hash_24().await {
        Ok(hashes) => println!("{} hashes in the past 24 hours", hashes.len()),
        Err(e) => println!("getlist failed: {e}"),
    }

    match client.get_list_of_types_file_24().await {
        Ok(counts) => {
            for (file_type, count) in counts {
                println!("{file_type}: {count}");
            }
        }
        Err(e) => println!("gettypes failed: {e}"),
    }

    match client.get_limit_key().await {
        Ok(limit) => println!("Remaining: {} of {}", limit.remaining, limit.limit),
        Err(e) => println!("getlimit failed: {e}"),
    }

    match client.get_search_result(&cli.query).await {
        Ok(records) => {
            for record in records {
                println!("{}", record.hashes.md5);
            }
        }
        Err(e) => println!("search failed: {e}"),
    }

    if let Some(path) = cli.upload {
        if let Err(e) = client.upload_file(&path).await {
            println!("upload failed: {e}");
        }
    }

    match client.download_file_from_hash(&cli.hash).await {
        Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
        Err(e) => println!("getfile failed: {e}"),
    }

    Ok(())
}
