//! Read command - prints a secret fetched by reference.

use crate::ReadArgs;
use crate::client;

/// Resolves a secret reference through the host and prints the raw value.
///
/// Output is the bare secret so the command composes with shell pipelines;
/// masking would defeat the point here.
pub fn run(args: &ReadArgs) -> super::Result {
    let runtime = client::runtime()?;
    let data = runtime.block_on(async {
        let host = client::connect(&args.host).await?;
        anyhow::Ok(host.read(&args.reference).await?)
    })?;

    match data.as_str() {
        Some(secret) => println!("{secret}"),
        None => println!("{data}"),
    }
    Ok(())
}
